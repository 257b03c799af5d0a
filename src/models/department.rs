use serde::{Deserialize, Serialize};

use super::Identified;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub department_id: i64,
    pub department_name: String,
    pub description: Option<String>,
}

impl Identified for Department {
    fn id(&self) -> i64 {
        self.department_id
    }
}

/// Body of `POST /departments` and `PUT /departments/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPayload {
    pub department_name: String,
    pub description: String,
}
