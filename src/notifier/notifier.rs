use crate::configuration::NotifierConfig;
use crate::errors::NotificationError;
use crate::tls::TlsClientFactory;
use crate::traits::HttpClientFactory;
use reqwest::header::CONTENT_TYPE;
use tracing::{error, info};
use uuid::Uuid;

/// Read-only projection of the inbound request used to address the callback.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestContext {
    pub scheme: String,
    pub server_name: String,
    pub server_port: u16,
}

impl RequestContext {
    pub fn new(
        scheme: impl Into<String>,
        server_name: impl Into<String>,
        server_port: u16,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            server_name: server_name.into(),
            server_port,
        }
    }
}

/// Forwards simulated gateway responses to the notification endpoint.
///
/// Every send builds its own client and discards it afterwards, so no
/// connection, pool, or TLS context survives across calls.
pub struct Notifier {
    config: NotifierConfig,
    client_factory: Box<dyn HttpClientFactory>,
}

impl Notifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self::with_client_factory(config, Box::new(TlsClientFactory::new()))
    }

    pub fn with_client_factory(
        config: NotifierConfig,
        client_factory: Box<dyn HttpClientFactory>,
    ) -> Self {
        Self {
            config,
            client_factory,
        }
    }

    /// Sends the payload to the endpoint derived from the inbound request.
    ///
    /// The response body is discarded; an `Ok` return is the success signal.
    #[tracing::instrument(
        name = "send_response",
        skip(self, payload_xml),
        fields(request_id = %Uuid::new_v4())
    )]
    pub async fn send_response(
        &self,
        request: &RequestContext,
        payload_xml: &str,
    ) -> Result<(), NotificationError> {
        let client = match self.client_factory.build(self.config.tls_policy) {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to prepare the HTTP client for the mock response: {:?}", e);
                return Err(NotificationError::TlsSetup(e));
            }
        };

        let endpoint = self.construct_endpoint(request);
        info!("Forwarding mock gateway response to: {}", &endpoint);

        let response = client
            .post(&endpoint)
            .header(CONTENT_TYPE, "text/xml")
            .body(payload_xml.to_owned())
            .send()
            .await
            .map_err(|source| transport_error(&endpoint, source))?;

        response
            .error_for_status()
            .map_err(|source| transport_error(&endpoint, source))?;

        Ok(())
    }

    /// Assembles `scheme://host:port` followed by the configured context root
    /// and endpoint suffix, joined with exactly one slash per segment.
    pub fn construct_endpoint(&self, request: &RequestContext) -> String {
        format!(
            "{}://{}:{}{}",
            request.scheme,
            request.server_name,
            request.server_port,
            join_segments(
                &self.config.notifications_context_root,
                &self.config.order_notification_endpoint,
            )
        )
    }
}

fn transport_error(url: &str, source: reqwest::Error) -> NotificationError {
    error!("Failed to deliver the mock gateway response to {}: {:?}", url, source);
    NotificationError::Transport {
        url: url.to_owned(),
        source,
    }
}

// Misconfigured values may omit or duplicate leading/trailing slashes; empty
// segments are skipped entirely.
fn join_segments(context_root: &str, endpoint: &str) -> String {
    let mut path = String::new();
    for segment in [context_root, endpoint] {
        let trimmed = segment.trim_matches('/');
        if !trimmed.is_empty() {
            path.push('/');
            path.push_str(trimmed);
        }
    }
    path
}
