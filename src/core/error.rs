use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Collector fetches never return this: their contract is best-effort, and
/// per-source failures are absorbed into [`SourceWarning`]s instead. It
/// surfaces where a failure genuinely blocks the caller, such as building a
/// client or establishing the Reddit session.
///
/// [`SourceWarning`]: crate::SourceWarning
#[derive(Debug, Error)]
pub enum MentionsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The Reddit token handshake failed.
    #[error("Authentication error: {0}")]
    Auth(String),
}
