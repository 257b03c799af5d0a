//! Errors produced by the API gateway.

use thiserror::Error;

use super::category::ErrorCategory;
use super::extract::extract_error_message;
use crate::traits::HttpError;

/// Failure of a single REST call.
///
/// Transport failures and server rejections are both surfaced; the
/// server's own message is carried through untouched.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A 2xx body could not be decoded into the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The configured base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build a server error from a raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Server {
            status,
            message: extract_error_message(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Network(_) => ErrorCategory::Network,
            ApiError::Server { status: 401 | 403, .. } => ErrorCategory::Auth,
            ApiError::Server { status: 404, .. } => ErrorCategory::NotFound,
            ApiError::Server { .. } | ApiError::Decode(_) => ErrorCategory::Server,
            ApiError::InvalidUrl(_) => ErrorCategory::Configuration,
        }
    }

    /// Text for the alert banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Network(message) => message.clone(),
            ApiError::Decode(_) => "The server sent a response the client could not read".to_string(),
            ApiError::InvalidUrl(url) => format!("Invalid server address: {}", url),
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status, message } => ApiError::from_response(status, &message),
            HttpError::InvalidUrl(url) => ApiError::InvalidUrl(url),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
