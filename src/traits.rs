use crate::errors::TlsSetupError;
use crate::tls::TlsPolicy;
use reqwest::Client;

#[cfg(test)]
use mockall::automock;

/// Trait for building the per-call HTTP client
#[cfg_attr(test, automock)]
pub trait HttpClientFactory: Send + Sync {
    /// Build a client honoring the given TLS policy
    fn build(&self, policy: TlsPolicy) -> Result<Client, TlsSetupError>;
}
