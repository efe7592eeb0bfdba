//! Error type for content API calls.

/// Failure of a single API call, split by where it occurred so callers can
/// branch on the failure kind.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server responded with a non-success HTTP status. Carries the
    /// status code and status text; the response body is not consulted.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, status_text: String },

    /// The call failed before an HTTP response was obtained (connect, DNS,
    /// body read, JSON decode), with the underlying message.
    #[error("Network error: {message}")]
    Network { message: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network {
            message: err.to_string(),
        }
    }
}
