//! Typed failures for every backend call.
//!
//! The hosted backend answers with bare HTTP statuses and free-form bodies, so
//! classification is by status class only; the body is kept as the message.

use thiserror::Error;

/// Coarse classification callers branch on (retry, sign out, show message).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Timeout,
    Unauthorized,
    Validation,
    Server,
    Decode,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("request rejected ({status}): {message}")]
    Validation { status: u16, message: String },

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Unauthorized { status, message },
            400..=499 => Self::Validation { status, message },
            _ => Self::Server { status, message },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Timeout => ErrorKind::Timeout,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Server { .. } => ErrorKind::Server,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }

    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::Validation { status, .. }
            | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::from_status(status.as_u16(), e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(401, "").kind(), ErrorKind::Unauthorized);
        assert_eq!(ApiError::from_status(403, "").kind(), ErrorKind::Unauthorized);
        assert_eq!(ApiError::from_status(400, "").kind(), ErrorKind::Validation);
        assert_eq!(ApiError::from_status(404, "").kind(), ErrorKind::Validation);
        assert_eq!(ApiError::from_status(422, "").kind(), ErrorKind::Validation);
        assert_eq!(ApiError::from_status(500, "").kind(), ErrorKind::Server);
        assert_eq!(ApiError::from_status(503, "").kind(), ErrorKind::Server);
        // Redirects and other oddities are not success either
        assert_eq!(ApiError::from_status(302, "").kind(), ErrorKind::Server);
    }

    #[test]
    fn test_status_and_message_are_kept() {
        let err = ApiError::from_status(422, "email already taken");
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.to_string(), "request rejected (422): email already taken");

        assert_eq!(ApiError::Timeout.status(), None);
        assert!(ApiError::from_status(401, "bad token").is_unauthorized());
    }

    #[test]
    fn test_json_errors_are_decode_failures() {
        let err: ApiError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
