use super::field::{Field, FormState};
use crate::error::ValidationError;
use crate::models::LoginRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub state: FormState,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(vec![
                Field::text("username", "Username"),
                Field::password("password", "Password"),
            ]),
        }
    }

    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let username = self.state.text("username").trim();
        let password = self.state.text("password");
        if username.is_empty() {
            return Err(ValidationError::new("username", "Username is required"));
        }
        if password.is_empty() {
            return Err(ValidationError::new("password", "Password is required"));
        }
        Ok(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}
