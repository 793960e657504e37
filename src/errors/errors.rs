use thiserror::Error;

/// Failure initializing the HTTP client and its TLS configuration.
///
/// Client construction either succeeds entirely or fails with this error;
/// there is no partial state to recover from.
#[derive(Debug, Error)]
#[error("failed to build the HTTP client for the mock connector")]
pub struct TlsSetupError(#[from] pub reqwest::Error);

/// The only error surfaced by the outward-facing send operation.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The per-call HTTP client could not be built; no network call was made.
    #[error("failed to prepare the HTTP client for sending the mock response")]
    TlsSetup(#[from] TlsSetupError),

    /// The POST itself failed: connect, handshake, IO, or an HTTP error status.
    #[error("failed to deliver the mock response to {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
