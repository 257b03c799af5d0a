//! Unified client error type.

use thiserror::Error;

use super::api::ApiError;
use super::category::ErrorCategory;
use super::validation::ValidationError;
use crate::traits::StorageError;

/// Any failure the application can surface to the user.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The operation needs a signed-in user and there is none.
    #[error("Session error: {0}")]
    Session(String),
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Api(err) => err.category(),
            ClientError::Validation(_) => ErrorCategory::Validation,
            ClientError::Storage(_) => ErrorCategory::System,
            ClientError::Session(_) => ErrorCategory::Auth,
        }
    }

    /// Text for the alert banner.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api(err) => err.user_message(),
            ClientError::Validation(err) => err.message.clone(),
            ClientError::Storage(err) => format!("Could not update the saved session: {}", err),
            ClientError::Session(message) => message.clone(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api(err) if err.is_unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passthrough() {
        let err: ClientError = ValidationError::new("endDate", "End date is required").into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.user_message(), "End date is required");
        assert_eq!(err.to_string(), "End date is required");
    }

    #[test]
    fn test_api_passthrough() {
        let err: ClientError = ApiError::from_response(401, r#"{"message":"Bad credentials"}"#).into();
        assert!(err.is_unauthorized());
        assert_eq!(err.category(), ErrorCategory::Auth);
        assert_eq!(err.user_message(), "Bad credentials");
    }

    #[test]
    fn test_storage_is_system() {
        let err: ClientError = StorageError::Io("read-only filesystem".into()).into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(err.user_message().contains("read-only filesystem"));
    }
}
