use crate::errors::TlsSetupError;
use crate::traits::HttpClientFactory;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Certificate-verification stance for outbound calls.
///
/// `InsecureTrustAny` accepts every certificate chain and skips hostname
/// verification. It exists for test environments where the callback receiver
/// presents a self-signed or mismatched certificate; it must be selected
/// explicitly through configuration and is never the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsPolicy {
    #[default]
    Verified,
    InsecureTrustAny,
}

/// Builds an HTTP client honoring the given TLS policy.
///
/// The returned client serves both schemes: plain `http` connections carry no
/// TLS requirement at all, and `https` connections follow the selected policy.
pub fn build_client(policy: TlsPolicy) -> Result<Client, TlsSetupError> {
    let builder = match policy {
        TlsPolicy::Verified => Client::builder(),
        TlsPolicy::InsecureTrustAny => {
            warn!("TLS certificate and hostname verification are disabled for outbound calls");
            Client::builder()
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true)
        }
    };

    Ok(builder.build()?)
}

/// Default HttpClientFactory implementation backed by `build_client`
#[derive(Clone, Debug)]
pub struct TlsClientFactory;

impl TlsClientFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TlsClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClientFactory for TlsClientFactory {
    fn build(&self, policy: TlsPolicy) -> Result<Client, TlsSetupError> {
        build_client(policy)
    }
}
