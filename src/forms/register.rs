use super::field::{Field, FormState};
use crate::error::ValidationError;
use crate::helpers::{is_valid_email, password_problem};
use crate::models::RegisterRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub state: FormState,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(vec![
                Field::text("username", "Username"),
                Field::text("email", "Email"),
                Field::password("password", "Password"),
                Field::password("confirmPassword", "Confirm Password"),
            ]),
        }
    }

    /// All rules are checked locally; the confirmation never leaves the client.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let username = self.state.text("username").trim();
        let email = self.state.text("email").trim();
        let password = self.state.text("password");
        let confirm = self.state.text("confirmPassword");

        if username.chars().count() < 3 {
            return Err(ValidationError::new(
                "username",
                "Username must be at least 3 characters long",
            ));
        }
        if !is_valid_email(email) {
            return Err(ValidationError::new(
                "email",
                "Please enter a valid email address",
            ));
        }
        if let Some(problem) = password_problem(password) {
            return Err(ValidationError::new("password", problem));
        }
        if password != confirm {
            return Err(ValidationError::new(
                "confirmPassword",
                "Passwords do not match",
            ));
        }

        Ok(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}
