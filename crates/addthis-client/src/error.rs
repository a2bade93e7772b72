//! Client error types.

/// Errors that can occur when using the AddThis client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request path did not consist of exactly a metric and a dimension.
    #[error("Incorrect number of parameters are given. Expected {expected} but got {actual}")]
    Validation {
        /// Number of path segments required.
        expected: usize,
        /// Number of path segments supplied.
        actual: usize,
    },

    /// Server returned a status other than 200.
    #[error("{status} Error (code = '{code}', message='{message}', attachment='{attachment}')")]
    Api {
        /// HTTP status code.
        status: u16,
        /// AddThis error code.
        code: i64,
        /// Error message.
        message: String,
        /// Additional error data, `null` when the server sends none.
        attachment: serde_json::Value,
    },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status code of an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// AddThis error code of an API error.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Message of an API error.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Attachment of an API error.
    #[must_use]
    pub fn attachment(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Api { attachment, .. } => Some(attachment),
            _ => None,
        }
    }

    /// Whether the error was reported by the AddThis service.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Whether the error was caught locally before any request was sent.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
