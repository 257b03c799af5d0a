//! The persisted half of a session.

use serde::{Deserialize, Serialize};

use crate::models::{AuthResponse, SessionUser};
use crate::traits::StorageError;

/// Token and user, persisted together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Deserialize)]
struct RawSession {
    token: Option<String>,
    user: Option<serde_json::Value>,
}

impl StoredSession {
    pub fn from_auth(response: &AuthResponse) -> Self {
        Self {
            token: response.access_token.clone(),
            user: response.session_user(),
        }
    }

    /// Parse a stored document.
    ///
    /// A missing or empty token or user yields `Ok(None)`. A document that is
    /// not JSON, or whose user does not parse, is [`StorageError::Malformed`].
    pub fn from_json(raw: &str) -> Result<Option<Self>, StorageError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let parsed: RawSession =
            serde_json::from_str(raw).map_err(|e| StorageError::Malformed(e.to_string()))?;

        let (token, user) = match (parsed.token, parsed.user) {
            (Some(token), Some(user)) if !token.is_empty() && !user.is_null() => (token, user),
            _ => return Ok(None),
        };
        let user: SessionUser =
            serde_json::from_value(user).map_err(|e| StorageError::Malformed(e.to_string()))?;

        Ok(Some(Self { token, user }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_complete_document() {
        let raw = r#"{"token":"t","user":{"id":1,"username":"admin","email":"a@x.io","role":"ADMIN"}}"#;
        let session = StoredSession::from_json(raw).unwrap().unwrap();
        assert_eq!(session.token, "t");
        assert_eq!(session.user.role, Role::Admin);
    }

    #[test]
    fn test_missing_half_is_absent() {
        assert_eq!(StoredSession::from_json(r#"{"token":"t"}"#).unwrap(), None);
        assert_eq!(
            StoredSession::from_json(r#"{"user":{"id":1,"username":"a","role":"ADMIN"}}"#).unwrap(),
            None
        );
        assert_eq!(StoredSession::from_json(r#"{"token":"","user":null}"#).unwrap(), None);
        assert_eq!(StoredSession::from_json("").unwrap(), None);
    }

    #[test]
    fn test_malformed_user_is_error() {
        let raw = r#"{"token":"t","user":"{not an object"}"#;
        assert!(matches!(
            StoredSession::from_json(raw),
            Err(StorageError::Malformed(_))
        ));
        assert!(matches!(
            StoredSession::from_json("{{{"),
            Err(StorageError::Malformed(_))
        ));
    }
}
