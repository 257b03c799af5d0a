//! Leave request form.
//!
//! Checks run in a fixed order and the first failure wins:
//! employee selection (admins), balance (everyone else), start date,
//! end date, date order, reason.

use super::field::{parse_date, Field, FormState, SelectField, SelectOption};
use crate::error::ValidationError;
use crate::helpers::calculate_leave_days;
use crate::models::{Employee, LeaveType, NewLeaveRequest};
use crate::session::Capabilities;

/// Shown to a non-admin whose account has no employee record.
pub const PROFILE_NOT_FOUND: &str =
    "Employee profile not found. Please contact your administrator.";

/// Who is submitting and on whose behalf.
#[derive(Debug, Clone, Copy)]
pub struct LeaveApplicant<'a> {
    pub capabilities: Capabilities,
    /// The signed-in user's own employee record, if loaded.
    pub own_employee: Option<&'a Employee>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveForm {
    pub state: FormState,
}

fn leave_type_options() -> Vec<SelectOption> {
    LeaveType::SELECTABLE
        .iter()
        .enumerate()
        .map(|(i, t)| SelectOption::new(i as i64, t.as_str()))
        .collect()
}

impl LeaveForm {
    /// `for_others` adds the employee selector.
    pub fn new(for_others: bool) -> Self {
        let mut fields = Vec::new();
        if for_others {
            fields.push(Field::select(
                "employeeId",
                "Employee",
                SelectField::new(Vec::new()),
            ));
        }
        let mut leave_type = SelectField::new(leave_type_options());
        let default_index = LeaveType::SELECTABLE
            .iter()
            .position(|t| *t == LeaveType::default())
            .map(|i| i as i64);
        leave_type.select_value(default_index);
        fields.extend([
            Field::select("leaveType", "Leave Type", leave_type),
            Field::date("startDate", "Start Date"),
            Field::date("endDate", "End Date"),
            Field::text("reason", "Reason"),
        ]);
        Self {
            state: FormState::new(fields),
        }
    }

    pub fn set_employees(&mut self, employees: &[Employee]) {
        let options = employees
            .iter()
            .map(|e| {
                SelectOption::new(
                    e.employee_id,
                    format!("{} ({} days)", e.full_name(), e.displayed_leave_balance()),
                )
            })
            .collect();
        self.state.set_options("employeeId", options);
    }

    pub fn leave_type(&self) -> LeaveType {
        self.state
            .selected("leaveType")
            .and_then(|i| LeaveType::SELECTABLE.get(i as usize).copied())
            .unwrap_or_default()
    }

    /// Day count preview; unparsable or missing dates count as zero.
    pub fn leave_days(&self) -> i64 {
        let start = parse_date(self.state.text("startDate"), "startDate", "Start date")
            .ok()
            .flatten();
        let end = parse_date(self.state.text("endDate"), "endDate", "End date")
            .ok()
            .flatten();
        calculate_leave_days(start, end)
    }

    pub fn validate(&self, applicant: LeaveApplicant<'_>) -> Result<NewLeaveRequest, ValidationError> {
        let employee_id = if applicant.capabilities.apply_leave_for_others {
            self.state
                .selected("employeeId")
                .ok_or_else(|| ValidationError::new("employeeId", "Please select an employee"))?
        } else {
            let employee = applicant
                .own_employee
                .ok_or_else(|| ValidationError::new("employeeId", PROFILE_NOT_FOUND))?;
            if !applicant.capabilities.unlimited_leave_balance {
                let balance = employee.displayed_leave_balance();
                if self.leave_days() > i64::from(balance) {
                    return Err(ValidationError::new(
                        "endDate",
                        format!(
                            "Insufficient leave balance. You have {} days available.",
                            balance
                        ),
                    ));
                }
            }
            employee.employee_id
        };

        let start_date = parse_date(self.state.text("startDate"), "startDate", "Start date")?
            .ok_or_else(|| ValidationError::new("startDate", "Start date is required"))?;
        let end_date = parse_date(self.state.text("endDate"), "endDate", "End date")?
            .ok_or_else(|| ValidationError::new("endDate", "End date is required"))?;
        if end_date < start_date {
            return Err(ValidationError::new(
                "endDate",
                "End date must be after start date",
            ));
        }

        let reason = self.state.text("reason").trim();
        if reason.is_empty() {
            return Err(ValidationError::new("reason", "Reason is required"));
        }

        Ok(NewLeaveRequest {
            employee_id,
            leave_type: self.leave_type(),
            start_date,
            end_date,
            reason: reason.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn employee(balance: i32) -> Employee {
        serde_json::from_str(&format!(
            r#"{{"employeeId":7,"firstName":"Meera","lastName":"Iyer","leaveBalance":{}}}"#,
            balance
        ))
        .unwrap()
    }

    fn staff(employee: &Employee) -> LeaveApplicant<'_> {
        LeaveApplicant {
            capabilities: Capabilities::for_role(Role::Employee),
            own_employee: Some(employee),
        }
    }

    #[test]
    fn test_default_type_is_casual() {
        assert_eq!(LeaveForm::new(false).leave_type(), LeaveType::Casual);
    }

    #[test]
    fn test_admin_must_select_employee() {
        let form = LeaveForm::new(true);
        let admin = LeaveApplicant {
            capabilities: Capabilities::for_role(Role::Admin),
            own_employee: None,
        };
        assert_eq!(
            form.validate(admin).unwrap_err().message,
            "Please select an employee"
        );
    }

    #[test]
    fn test_balance_checked_before_dates() {
        let me = employee(2);
        let mut form = LeaveForm::new(false);
        form.state.set_text("startDate", "2024-03-04");
        form.state.set_text("endDate", "2024-03-06");
        assert_eq!(
            form.validate(staff(&me)).unwrap_err().message,
            "Insufficient leave balance. You have 2 days available."
        );
    }

    #[test]
    fn test_remaining_order() {
        let me = employee(10);
        let mut form = LeaveForm::new(false);
        assert_eq!(form.validate(staff(&me)).unwrap_err().message, "Start date is required");
        form.state.set_text("startDate", "2024-03-06");
        assert_eq!(form.validate(staff(&me)).unwrap_err().message, "End date is required");
        form.state.set_text("endDate", "2024-03-04");
        assert_eq!(
            form.validate(staff(&me)).unwrap_err().message,
            "End date must be after start date"
        );
        form.state.set_text("endDate", "2024-03-06");
        assert_eq!(form.validate(staff(&me)).unwrap_err().message, "Reason is required");
        form.state.set_text("reason", "Family event");
        let request = form.validate(staff(&me)).unwrap();
        assert_eq!(request.employee_id, 7);
        assert_eq!(form.leave_days(), 1);
    }

    #[test]
    fn test_missing_profile() {
        let form = LeaveForm::new(false);
        let orphan = LeaveApplicant {
            capabilities: Capabilities::none(),
            own_employee: None,
        };
        assert_eq!(form.validate(orphan).unwrap_err().message, PROFILE_NOT_FOUND);
    }
}
