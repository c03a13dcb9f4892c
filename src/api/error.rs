use thiserror::Error;

/// Failures surfaced by the property API.
///
/// The UI treats `Status` and `Network` identically (generic error placeholder
/// with the message text); the split exists so callers and tests can tell a
/// rejected transport apart from a non-2xx response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Status code for non-2xx responses, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
