//! Canned backend responses.

#![allow(dead_code)]

pub use paydesk::adapters::{MockHttpClient, MockResponse};
pub use paydesk::traits::Method;

use serde_json::{json, Value};

use super::url;

/// Fluent setup of a [`MockHttpClient`] against the test base URL.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// `method path` answers with `status` and a JSON body.
    pub fn with_json(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.client
            .set_response(method, &url(path), MockResponse::json(status, body));
        self
    }

    pub fn with_get(self, path: &str, body: Value) -> Self {
        self.with_json(Method::Get, path, 200, body)
    }

    /// Unmatched requests answer with `status` and a JSON body.
    pub fn with_default(self, status: u16, body: Value) -> Self {
        self.client
            .set_default_response(MockResponse::json(status, body));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn employee_json(id: i64, first: &str, last: &str, department: &str, balance: i32) -> Value {
    json!({
        "employeeId": id,
        "userId": id + 20,
        "firstName": first,
        "lastName": last,
        "email": format!("{}@example.com", first.to_lowercase()),
        "hireDate": "2021-06-01",
        "departmentName": department,
        "jobTitle": "Analyst",
        "leaveBalance": balance
    })
}

pub fn leave_json(id: i64, employee_id: i64, status: &str) -> Value {
    json!({
        "leaveId": id,
        "employeeId": employee_id,
        "leaveType": "CASUAL",
        "startDate": "2030-02-03",
        "endDate": "2030-02-04",
        "reason": "Family event",
        "status": status
    })
}

pub fn payroll_json(id: i64, employee_id: i64, month: u32, year: i32, status: &str) -> Value {
    json!({
        "payrollId": id,
        "employeeId": employee_id,
        "month": month,
        "year": year,
        "baseSalary": 50000,
        "allowances": 2500,
        "deductions": 1000,
        "netSalary": 51500,
        "status": status
    })
}

pub fn departments_json() -> Value {
    json!([
        {"departmentId": 1, "departmentName": "Human Resources", "description": "People ops"},
        {"departmentId": 2, "departmentName": "Finance & Accounting", "description": "Books and payroll"},
        {"departmentId": 3, "departmentName": "Engineering", "description": null}
    ])
}
