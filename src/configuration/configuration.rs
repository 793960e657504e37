use crate::tls::TlsPolicy;

/// Settings addressing the notification endpoint.
///
/// Injected into the `Notifier` at construction; values are plain data owned
/// by the host application's configuration store, never looked up globally.
#[derive(serde::Deserialize, Clone, Debug, PartialEq)]
pub struct NotifierConfig {
    /// Path suffix of the order-notification receiver.
    pub order_notification_endpoint: String,
    /// Context root the notification extension is mounted under.
    pub notifications_context_root: String,
    /// Verification stance for the outbound call.
    #[serde(default)]
    pub tls_policy: TlsPolicy,
}
