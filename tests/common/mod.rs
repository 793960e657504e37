/// Shared test fixtures and utilities for test modules
pub mod fixtures {
    use gateway_response_mock::configuration::NotifierConfig;
    use gateway_response_mock::notifier::RequestContext;
    use gateway_response_mock::tls::TlsPolicy;
    use std::net::SocketAddr;

    /// A representative gateway callback payload
    pub fn sample_payload() -> &'static str {
        concat!(
            "<paymentService version=\"1.4\" merchantCode=\"TESTMERCHANT\">",
            "<notify><orderStatusEvent orderCode=\"order-1234\"/></notify>",
            "</paymentService>"
        )
    }

    /// Configuration addressing the given context root and endpoint suffix
    pub fn notifier_config(context_root: &str, endpoint: &str) -> NotifierConfig {
        NotifierConfig {
            order_notification_endpoint: endpoint.to_string(),
            notifications_context_root: context_root.to_string(),
            tls_policy: TlsPolicy::Verified,
        }
    }

    /// Request context addressing a locally bound mock server
    pub fn request_context_for(address: &SocketAddr) -> RequestContext {
        RequestContext::new("http", address.ip().to_string(), address.port())
    }
}
