use super::field::{Field, FormState};
use crate::error::ValidationError;
use crate::models::{Department, DepartmentPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentForm {
    pub state: FormState,
    /// Set when editing an existing department.
    pub editing: Option<i64>,
}

impl DepartmentForm {
    pub fn create() -> Self {
        Self {
            state: FormState::new(vec![
                Field::text("departmentName", "Department Name"),
                Field::text("description", "Description"),
            ]),
            editing: None,
        }
    }

    pub fn edit(department: &Department) -> Self {
        let mut form = Self::create();
        form.fill(department);
        form
    }

    pub fn fill(&mut self, department: &Department) {
        self.editing = Some(department.department_id);
        self.state
            .set_text("departmentName", department.department_name.clone());
        self.state
            .set_text("description", department.description.clone().unwrap_or_default());
    }

    pub fn validate(&self) -> Result<DepartmentPayload, ValidationError> {
        let name = self.state.text("departmentName").trim();
        if name.is_empty() {
            return Err(ValidationError::new(
                "departmentName",
                "Department name is required",
            ));
        }
        Ok(DepartmentPayload {
            department_name: name.to_string(),
            description: self.state.text("description").trim().to_string(),
        })
    }
}
