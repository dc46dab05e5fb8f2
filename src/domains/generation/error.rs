//! External text generation error types.

use thiserror::Error;

/// Errors from the external text-generation API.
///
/// These never reach tool callers; the poem service falls back to the
/// template renderer instead.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// HTTP request failed.
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response carried no usable text.
    #[error("response contained no poem text")]
    EmptyResponse,

    /// The call did not finish within the configured bound.
    #[error("external generation timed out after {0:?}")]
    Timeout(std::time::Duration),
}
