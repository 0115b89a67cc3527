//! Error types for the comments client.

use thiserror::Error;

/// Result type for comments client operations.
pub type Result<T> = std::result::Result<T, CommentsError>;

/// Comments client errors.
#[derive(Debug, Error)]
pub enum CommentsError {
    /// Configuration error (missing base URL, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request did not complete or the server answered with a non-2xx status
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be parsed into the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Why a request failed to produce a successful response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failed, timed out, or the body could not be read
    #[error("network error: {0}")]
    Network(String),

    /// Non-success status code
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
}

impl CommentsError {
    pub fn is_transport(&self) -> bool {
        matches!(self, CommentsError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, CommentsError::Decode(_))
    }

    /// Status code of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            CommentsError::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn network(err: reqwest::Error) -> Self {
        CommentsError::Transport(TransportError::Network(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_transport() {
        let err = CommentsError::from(TransportError::Status {
            status: 404,
            body: "not found".into(),
        });

        assert!(err.is_transport());
        assert!(!err.is_decode());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Transport error: server returned 404: not found");
    }

    #[test]
    fn test_decode_has_no_status() {
        let err = CommentsError::Decode("expected a sequence".into());

        assert!(err.is_decode());
        assert_eq!(err.status(), None);
    }
}
