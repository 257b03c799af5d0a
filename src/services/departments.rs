use std::sync::Arc;

use crate::api::ApiGateway;
use crate::error::ApiError;
use crate::models::{Department, DepartmentPayload};

#[derive(Debug, Clone)]
pub struct DepartmentService {
    gateway: Arc<ApiGateway>,
}

impl DepartmentService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn get_all(&self) -> Result<Vec<Department>, ApiError> {
        self.gateway.get_json("departments").await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Department, ApiError> {
        self.gateway.get_json(&format!("departments/{}", id)).await
    }

    pub async fn create(&self, payload: &DepartmentPayload) -> Result<Department, ApiError> {
        self.gateway.post_json("departments", payload).await
    }

    pub async fn update(&self, id: i64, payload: &DepartmentPayload) -> Result<Department, ApiError> {
        self.gateway
            .put_json(&format!("departments/{}", id), payload)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("departments/{}", id)).await
    }
}
