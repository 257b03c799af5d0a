use std::sync::Arc;

use crate::api::ApiGateway;
use crate::error::ApiError;
use crate::models::{LeaveRequest, LeaveStatus, NewLeaveRequest};

#[derive(Debug, Clone)]
pub struct LeaveService {
    gateway: Arc<ApiGateway>,
}

impl LeaveService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn get_all(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.gateway.get_json("leaves").await
    }

    pub async fn get_pending(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.gateway.get_json("leaves/pending").await
    }

    pub async fn get_by_employee(&self, employee_id: i64) -> Result<Vec<LeaveRequest>, ApiError> {
        self.gateway
            .get_json(&format!("leaves/employee/{}", employee_id))
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<LeaveRequest, ApiError> {
        self.gateway.get_json(&format!("leaves/{}", id)).await
    }

    pub async fn create(&self, request: &NewLeaveRequest) -> Result<LeaveRequest, ApiError> {
        self.gateway.post_json("leaves", request).await
    }

    /// Approve or reject a request on behalf of `processed_by` (an employee id).
    pub async fn update_status(
        &self,
        id: i64,
        status: LeaveStatus,
        processed_by: i64,
    ) -> Result<LeaveRequest, ApiError> {
        self.gateway
            .patch_json(
                &format!("leaves/{}/status", id),
                &[
                    ("status", status.as_str().to_string()),
                    ("processedBy", processed_by.to_string()),
                ],
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("leaves/{}", id)).await
    }
}
