use std::sync::Arc;

use crate::api::ApiGateway;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, SessionUser};

/// `/auth` endpoints.
#[derive(Debug, Clone)]
pub struct AuthService {
    gateway: Arc<ApiGateway>,
}

impl AuthService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.gateway.post_json("auth/login", credentials).await
    }

    pub async fn register(&self, data: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.gateway.post_json("auth/register", data).await
    }

    /// Registers a user with the ADMIN role. The server decides who may call it.
    pub async fn register_admin(&self, data: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.gateway.post_json("auth/register/admin", data).await
    }

    pub async fn me(&self) -> Result<SessionUser, ApiError> {
        self.gateway.get_json("auth/me").await
    }

    pub async fn refresh(&self) -> Result<AuthResponse, ApiError> {
        self.gateway.post_empty("auth/refresh").await
    }
}
