use std::sync::Arc;

use crate::api::ApiGateway;
use crate::error::ApiError;
use crate::models::{NewPayroll, Payroll};

#[derive(Debug, Clone)]
pub struct PayrollService {
    gateway: Arc<ApiGateway>,
}

impl PayrollService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn get_all(&self) -> Result<Vec<Payroll>, ApiError> {
        self.gateway.get_json("payroll").await
    }

    pub async fn get_by_employee(&self, employee_id: i64) -> Result<Vec<Payroll>, ApiError> {
        self.gateway
            .get_json(&format!("payroll/employee/{}", employee_id))
            .await
    }

    pub async fn get_by_period(&self, month: u32, year: i32) -> Result<Vec<Payroll>, ApiError> {
        self.gateway
            .get_json_with_query(
                "payroll/period",
                &[("month", month.to_string()), ("year", year.to_string())],
            )
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Payroll, ApiError> {
        self.gateway.get_json(&format!("payroll/{}", id)).await
    }

    pub async fn create(&self, payroll: &NewPayroll) -> Result<Payroll, ApiError> {
        self.gateway.post_json("payroll", payroll).await
    }

    /// Moves a PENDING record to PROCESSED.
    pub async fn process(&self, id: i64) -> Result<Payroll, ApiError> {
        self.gateway
            .patch_json(&format!("payroll/{}/process", id), &[])
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("payroll/{}", id)).await
    }
}
