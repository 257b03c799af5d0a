use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{deserialize_amount, Identified};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayrollStatus {
    Pending,
    Processed,
    Paid,
    #[serde(other)]
    Unknown,
}

impl PayrollStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayrollStatus::Pending => "PENDING",
            PayrollStatus::Processed => "PROCESSED",
            PayrollStatus::Paid => "PAID",
            PayrollStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub payroll_id: i64,
    pub employee_id: i64,
    pub month: u32,
    pub year: i32,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub base_salary: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub allowances: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub deductions: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub net_salary: f64,
    pub status: PayrollStatus,
    pub generated_date: Option<NaiveDateTime>,
    pub processed_date: Option<NaiveDateTime>,
    pub ai_message: Option<String>,
}

impl Identified for Payroll {
    fn id(&self) -> i64 {
        self.payroll_id
    }
}

/// Body of `POST /payroll`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayroll {
    pub employee_id: i64,
    pub month: u32,
    pub year: i32,
    pub base_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payroll_parses_decimal_strings() {
        let json = r#"{
            "payrollId": 90, "employeeId": 7, "month": 3, "year": 2024,
            "baseSalary": "50000.00", "allowances": 2500, "deductions": 1200.5,
            "netSalary": 51299.5, "status": "PROCESSED",
            "generatedDate": "2024-03-28T18:00:00.123"
        }"#;
        let payroll: Payroll = serde_json::from_str(json).unwrap();
        assert_eq!(payroll.base_salary, 50000.0);
        assert_eq!(payroll.status, PayrollStatus::Processed);
        assert!(payroll.generated_date.is_some());
    }
}
