use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{deserialize_amount, Identified};

/// Job role fields some backend builds nest inside an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRoleSummary {
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub base_salary: f64,
}

/// An employee record as returned by `/employees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: i64,
    pub user_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
    pub job_id: Option<i64>,
    pub job_title: Option<String>,
    pub leave_balance: Option<i32>,
    pub job_role: Option<JobRoleSummary>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Balance shown to the user; the server is authoritative.
    pub fn displayed_leave_balance(&self) -> i32 {
        self.leave_balance.unwrap_or(0)
    }

    /// Base salary used to seed a new payroll record, if known.
    pub fn base_salary(&self) -> Option<f64> {
        self.job_role
            .as_ref()
            .map(|role| role.base_salary)
            .filter(|salary| *salary > 0.0)
    }
}

impl Identified for Employee {
    fn id(&self) -> i64 {
        self.employee_id
    }
}

/// Body of `POST /employees` and `PUT /employees/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub user_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub hire_date: NaiveDate,
    pub department_id: Option<i64>,
    pub job_id: Option<i64>,
    pub leave_balance: i32,
}
