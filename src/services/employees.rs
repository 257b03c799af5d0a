use std::sync::Arc;

use crate::api::ApiGateway;
use crate::error::ApiError;
use crate::models::{Employee, EmployeePayload};

/// `/employees` endpoints.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    gateway: Arc<ApiGateway>,
}

impl EmployeeService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn get_all(&self) -> Result<Vec<Employee>, ApiError> {
        self.gateway.get_json("employees").await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Employee, ApiError> {
        self.gateway.get_json(&format!("employees/{}", id)).await
    }

    /// The employee record linked to a login account.
    pub async fn get_by_user_id(&self, user_id: i64) -> Result<Employee, ApiError> {
        self.gateway
            .get_json(&format!("employees/user/{}", user_id))
            .await
    }

    pub async fn create(&self, payload: &EmployeePayload) -> Result<Employee, ApiError> {
        self.gateway.post_json("employees", payload).await
    }

    pub async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<Employee, ApiError> {
        self.gateway
            .put_json(&format!("employees/{}", id), payload)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("employees/{}", id)).await
    }
}
