use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use super::field::{parse_amount, Field, FormState, SelectField, SelectOption};
use crate::error::ValidationError;
use crate::helpers::{month_name, net_salary, selectable_years};
use crate::models::{Employee, NewPayroll};

#[derive(Debug, Clone, PartialEq)]
pub struct PayrollForm {
    pub state: FormState,
    /// Base salary by employee id, for seeding.
    salaries: HashMap<i64, f64>,
}

pub fn month_options() -> Vec<SelectOption> {
    (1..=12)
        .map(|m| SelectOption::new(m, month_name(m as u32)))
        .collect()
}

pub fn year_options(today: NaiveDate) -> Vec<SelectOption> {
    selectable_years(today)
        .into_iter()
        .map(|y| SelectOption::new(i64::from(y), y.to_string()))
        .collect()
}

impl PayrollForm {
    /// Period defaults to the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        let mut month = SelectField::new(month_options());
        month.select_value(Some(i64::from(today.month())));
        let mut year = SelectField::new(year_options(today));
        year.select_value(Some(i64::from(today.year())));

        Self {
            state: FormState::new(vec![
                Field::select("employeeId", "Employee", SelectField::new(Vec::new())),
                Field::select("month", "Month", month),
                Field::select("year", "Year", year),
                Field::text("baseSalary", "Base Salary").with_placeholder("0.00"),
                Field::text("allowances", "Allowances").with_text("0"),
                Field::text("deductions", "Deductions").with_text("0"),
            ]),
            salaries: HashMap::new(),
        }
    }

    pub fn set_employees(&mut self, employees: &[Employee]) {
        self.salaries = employees
            .iter()
            .filter_map(|e| e.base_salary().map(|s| (e.employee_id, s)))
            .collect();
        let options = employees
            .iter()
            .map(|e| {
                let title = e.job_title.as_deref().unwrap_or("No role");
                SelectOption::new(e.employee_id, format!("{} - {}", e.full_name(), title))
            })
            .collect();
        self.state.set_options("employeeId", options);
    }

    /// Seed base salary from the selected employee's job role, or clear it.
    pub fn on_employee_changed(&mut self) {
        let seeded = self
            .state
            .selected("employeeId")
            .and_then(|id| self.salaries.get(&id))
            .map(|salary| format!("{:.2}", salary))
            .unwrap_or_default();
        self.state.set_text("baseSalary", seeded);
    }

    /// Net salary preview; unparsable inputs count as zero.
    pub fn net_preview(&self) -> f64 {
        let amount = |name| parse_amount(self.state.text(name)).unwrap_or(0.0);
        net_salary(amount("baseSalary"), amount("allowances"), amount("deductions"))
    }

    pub fn validate(&self) -> Result<NewPayroll, ValidationError> {
        let employee_id = self
            .state
            .selected("employeeId")
            .ok_or_else(|| ValidationError::new("employeeId", "Please select an employee"))?;

        let base_salary = parse_amount(self.state.text("baseSalary"))
            .filter(|s| *s > 0.0)
            .ok_or_else(|| {
                ValidationError::new("baseSalary", "Base salary must be greater than 0")
            })?;

        let allowances = parse_amount(self.state.text("allowances"));
        let deductions = parse_amount(self.state.text("deductions"));
        let (allowances, deductions) = match (allowances, deductions) {
            (Some(a), Some(d)) if a >= 0.0 && d >= 0.0 => (a, d),
            (Some(a), _) if a < 0.0 => {
                return Err(ValidationError::new(
                    "allowances",
                    "Allowances and deductions cannot be negative",
                ))
            }
            (Some(_), Some(_)) => {
                return Err(ValidationError::new(
                    "deductions",
                    "Allowances and deductions cannot be negative",
                ))
            }
            (None, _) => {
                return Err(ValidationError::new("allowances", "Allowances must be a number"))
            }
            (Some(_), None) => {
                return Err(ValidationError::new("deductions", "Deductions must be a number"))
            }
        };

        let month = self
            .state
            .selected("month")
            .ok_or_else(|| ValidationError::new("month", "Please select a month"))?;
        let year = self
            .state
            .selected("year")
            .ok_or_else(|| ValidationError::new("year", "Please select a year"))?;

        Ok(NewPayroll {
            employee_id,
            month: month as u32,
            year: year as i32,
            base_salary,
            allowances,
            deductions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn roster() -> Vec<Employee> {
        serde_json::from_str(
            r#"[
                {"employeeId":1,"firstName":"Asha","lastName":"R","jobTitle":"Engineer",
                 "jobRole":{"jobId":2,"baseSalary":65000}},
                {"employeeId":2,"firstName":"Ravi","lastName":"K"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_period_defaults_to_today() {
        let form = PayrollForm::new(today());
        assert_eq!(form.state.selected("month"), Some(3));
        assert_eq!(form.state.selected("year"), Some(2024));
    }

    #[test]
    fn test_employee_selection_seeds_salary() {
        let mut form = PayrollForm::new(today());
        form.set_employees(&roster());
        form.state.set_selected("employeeId", Some(1));
        form.on_employee_changed();
        assert_eq!(form.state.text("baseSalary"), "65000.00");

        form.state.set_selected("employeeId", Some(2));
        form.on_employee_changed();
        assert_eq!(form.state.text("baseSalary"), "");
    }

    #[test]
    fn test_validation_and_preview() {
        let mut form = PayrollForm::new(today());
        form.set_employees(&roster());
        assert_eq!(form.validate().unwrap_err().message, "Please select an employee");

        form.state.set_selected("employeeId", Some(1));
        assert_eq!(
            form.validate().unwrap_err().message,
            "Base salary must be greater than 0"
        );

        form.state.set_text("baseSalary", "50000");
        form.state.set_text("deductions", "-1");
        assert_eq!(
            form.validate().unwrap_err().message,
            "Allowances and deductions cannot be negative"
        );

        form.state.set_text("allowances", "2500");
        form.state.set_text("deductions", "1200");
        assert_eq!(form.net_preview(), 51300.0);
        let payroll = form.validate().unwrap();
        assert_eq!(payroll.month, 3);
        assert_eq!(payroll.year, 2024);
        assert_eq!(payroll.allowances, 2500.0);
    }
}
