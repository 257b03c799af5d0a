use super::field::{parse_amount, Field, FormState};
use crate::error::ValidationError;
use crate::models::{JobRole, JobRolePayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRoleForm {
    pub state: FormState,
    pub editing: Option<i64>,
}

impl JobRoleForm {
    pub fn create() -> Self {
        Self {
            state: FormState::new(vec![
                Field::text("jobTitle", "Job Title"),
                Field::text("baseSalary", "Base Salary").with_placeholder("0.00"),
                Field::text("description", "Description"),
            ]),
            editing: None,
        }
    }

    pub fn edit(role: &JobRole) -> Self {
        let mut form = Self::create();
        form.fill(role);
        form
    }

    pub fn fill(&mut self, role: &JobRole) {
        self.editing = Some(role.job_id);
        self.state.set_text("jobTitle", role.job_title.clone());
        self.state.set_text("baseSalary", format!("{:.2}", role.base_salary));
        self.state
            .set_text("description", role.description.clone().unwrap_or_default());
    }

    pub fn validate(&self) -> Result<JobRolePayload, ValidationError> {
        let title = self.state.text("jobTitle").trim();
        if title.is_empty() {
            return Err(ValidationError::new("jobTitle", "Job title is required"));
        }
        let base_salary = parse_amount(self.state.text("baseSalary"))
            .filter(|salary| *salary > 0.0)
            .ok_or_else(|| {
                ValidationError::new("baseSalary", "Base salary must be greater than 0")
            })?;
        Ok(JobRolePayload {
            job_title: title.to_string(),
            base_salary,
            description: self.state.text("description").trim().to_string(),
        })
    }
}
