use serde::{Deserialize, Serialize};

use super::{deserialize_amount, Identified};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRole {
    pub job_id: i64,
    pub job_title: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub base_salary: f64,
    pub description: Option<String>,
}

impl Identified for JobRole {
    fn id(&self) -> i64 {
        self.job_id
    }
}

/// Body of `POST /jobs` and `PUT /jobs/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRolePayload {
    pub job_title: String,
    pub base_salary: f64,
    pub description: String,
}
