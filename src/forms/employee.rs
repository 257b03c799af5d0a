use super::field::{parse_date, Field, FormState, SelectField, SelectOption};
use crate::error::ValidationError;
use crate::helpers::is_valid_phone;
use crate::models::{Department, Employee, EmployeePayload, JobRole};

/// Leave balance given to new hires unless overridden.
pub const DEFAULT_LEAVE_BALANCE: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    pub state: FormState,
    pub editing: Option<i64>,
    /// Linked account of the record being edited; not editable.
    existing_user_id: Option<i64>,
}

impl EmployeeForm {
    pub fn create() -> Self {
        let mut fields = vec![Field::text("userId", "User ID")];
        fields.extend(Self::common_fields());
        Self {
            state: FormState::new(fields),
            editing: None,
            existing_user_id: None,
        }
    }

    pub fn edit(employee: &Employee) -> Self {
        let mut form = Self {
            state: FormState::new(Self::common_fields()),
            editing: None,
            existing_user_id: None,
        };
        form.fill(employee);
        form
    }

    fn common_fields() -> Vec<Field> {
        vec![
            Field::text("firstName", "First Name"),
            Field::text("lastName", "Last Name"),
            Field::date("dateOfBirth", "Date of Birth"),
            Field::text("phoneNumber", "Phone Number").with_placeholder("10 digits"),
            Field::text("address", "Address"),
            Field::date("hireDate", "Hire Date"),
            Field::select(
                "departmentId",
                "Department",
                SelectField::new(Vec::new()).optional(),
            ),
            Field::select("jobId", "Job Role", SelectField::new(Vec::new()).optional()),
            Field::text("leaveBalance", "Leave Balance")
                .with_text(DEFAULT_LEAVE_BALANCE.to_string()),
        ]
    }

    pub fn fill(&mut self, employee: &Employee) {
        self.editing = Some(employee.employee_id);
        self.existing_user_id = employee.user_id;
        let date = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
        self.state.set_text("firstName", employee.first_name.clone());
        self.state.set_text("lastName", employee.last_name.clone());
        self.state.set_text("dateOfBirth", date(employee.date_of_birth));
        self.state
            .set_text("phoneNumber", employee.phone_number.clone().unwrap_or_default());
        self.state
            .set_text("address", employee.address.clone().unwrap_or_default());
        self.state.set_text("hireDate", date(employee.hire_date));
        self.state.set_selected("departmentId", employee.department_id);
        self.state.set_selected("jobId", employee.job_id);
        let balance = employee
            .leave_balance
            .filter(|b| *b != 0)
            .unwrap_or(DEFAULT_LEAVE_BALANCE);
        self.state.set_text("leaveBalance", balance.to_string());
    }

    pub fn set_departments(&mut self, departments: &[Department]) {
        let options = departments
            .iter()
            .map(|d| SelectOption::new(d.department_id, d.department_name.clone()))
            .collect();
        self.state.set_options("departmentId", options);
    }

    pub fn set_job_roles(&mut self, roles: &[JobRole]) {
        let options = roles
            .iter()
            .map(|r| SelectOption::new(r.job_id, r.job_title.clone()))
            .collect();
        self.state.set_options("jobId", options);
    }

    pub fn validate(&self) -> Result<EmployeePayload, ValidationError> {
        let first_name = self.state.text("firstName").trim();
        let last_name = self.state.text("lastName").trim();
        let phone = self.state.text("phoneNumber").trim();

        if first_name.is_empty() {
            return Err(ValidationError::new("firstName", "First name is required"));
        }
        if last_name.is_empty() {
            return Err(ValidationError::new("lastName", "Last name is required"));
        }
        let hire_date = parse_date(self.state.text("hireDate"), "hireDate", "Hire date")?
            .ok_or_else(|| ValidationError::new("hireDate", "Hire date is required"))?;
        if !phone.is_empty() && !is_valid_phone(phone) {
            return Err(ValidationError::new(
                "phoneNumber",
                "Please enter a valid phone number",
            ));
        }

        let user_id = if self.editing.is_some() {
            self.existing_user_id
        } else {
            let raw = self.state.text("userId").trim();
            if raw.is_empty() {
                return Err(ValidationError::new("userId", "User ID is required"));
            }
            Some(raw.parse::<i64>().map_err(|_| {
                ValidationError::new("userId", "User ID must be a number")
            })?)
        };

        let date_of_birth =
            parse_date(self.state.text("dateOfBirth"), "dateOfBirth", "Date of birth")?;

        let balance_raw = self.state.text("leaveBalance").trim();
        let leave_balance = if balance_raw.is_empty() {
            DEFAULT_LEAVE_BALANCE
        } else {
            balance_raw
                .parse::<i32>()
                .ok()
                .filter(|b| *b >= 0)
                .ok_or_else(|| {
                    ValidationError::new("leaveBalance", "Leave balance must be a whole number")
                })?
        };

        let optional_text = |name: &str| {
            let value = self.state.text(name).trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Ok(EmployeePayload {
            user_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth,
            phone_number: optional_text("phoneNumber"),
            address: optional_text("address"),
            hire_date,
            department_id: self.state.selected("departmentId"),
            job_id: self.state.selected("jobId"),
            leave_balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled() -> EmployeeForm {
        let mut form = EmployeeForm::create();
        form.state.set_text("userId", "21");
        form.state.set_text("firstName", "Meera");
        form.state.set_text("lastName", "Iyer");
        form.state.set_text("hireDate", "2022-04-01");
        form
    }

    #[test]
    fn test_validation_order() {
        let mut form = EmployeeForm::create();
        assert_eq!(form.validate().unwrap_err().message, "First name is required");
        form.state.set_text("firstName", "Meera");
        assert_eq!(form.validate().unwrap_err().message, "Last name is required");
        form.state.set_text("lastName", "Iyer");
        assert_eq!(form.validate().unwrap_err().message, "Hire date is required");
        form.state.set_text("hireDate", "2022-04-01");
        form.state.set_text("phoneNumber", "12345");
        assert_eq!(
            form.validate().unwrap_err().message,
            "Please enter a valid phone number"
        );
        form.state.set_text("phoneNumber", "98765-43210");
        assert_eq!(form.validate().unwrap_err().message, "User ID is required");
    }

    #[test]
    fn test_defaults_and_selects() {
        let mut form = filled();
        form.set_departments(&[Department {
            department_id: 3,
            department_name: "Finance & Accounting".into(),
            description: None,
        }]);
        form.state.set_selected("departmentId", Some(3));

        let payload = form.validate().unwrap();
        assert_eq!(payload.user_id, Some(21));
        assert_eq!(payload.leave_balance, DEFAULT_LEAVE_BALANCE);
        assert_eq!(payload.department_id, Some(3));
        assert_eq!(payload.job_id, None);
        assert_eq!(payload.phone_number, None);
        assert_eq!(payload.hire_date, NaiveDate::from_ymd_opt(2022, 4, 1).unwrap());
    }

    #[test]
    fn test_edit_keeps_user_and_has_no_user_field() {
        let employee: Employee = serde_json::from_str(
            r#"{"employeeId":7,"userId":21,"firstName":"Meera","lastName":"Iyer",
                "hireDate":"2022-04-01","leaveBalance":12,"departmentId":3}"#,
        )
        .unwrap();
        let form = EmployeeForm::edit(&employee);
        assert!(!form.state.has_field("userId"));
        let payload = form.validate().unwrap();
        assert_eq!(payload.user_id, Some(21));
        assert_eq!(payload.leave_balance, 12);
    }
}
