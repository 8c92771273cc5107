//! Failure taxonomy for REST calls.

/// Errors produced by project API operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body was not the expected JSON.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
    /// No browser transport in this build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
