use std::sync::Arc;

use crate::api::ApiGateway;
use crate::error::ApiError;
use crate::models::{JobRole, JobRolePayload};

/// Job roles live under `/jobs` on the server.
#[derive(Debug, Clone)]
pub struct JobRoleService {
    gateway: Arc<ApiGateway>,
}

impl JobRoleService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn get_all(&self) -> Result<Vec<JobRole>, ApiError> {
        self.gateway.get_json("jobs").await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<JobRole, ApiError> {
        self.gateway.get_json(&format!("jobs/{}", id)).await
    }

    pub async fn create(&self, payload: &JobRolePayload) -> Result<JobRole, ApiError> {
        self.gateway.post_json("jobs", payload).await
    }

    pub async fn update(&self, id: i64, payload: &JobRolePayload) -> Result<JobRole, ApiError> {
        self.gateway.put_json(&format!("jobs/{}", id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("jobs/{}", id)).await
    }
}
