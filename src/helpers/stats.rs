//! Dashboard aggregations.

use chrono::{Duration, NaiveDateTime};

use crate::models::{Employee, LeaveRequest, LeaveStatus, Payroll};

/// Window for "recent" payroll runs.
pub const RECENT_PAYROLL_DAYS: i64 = 30;

/// How many leaves and payrolls the employee dashboard lists.
pub const DASHBOARD_RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminStats {
    pub total_employees: usize,
    pub pending_leaves: usize,
    pub recent_payrolls: usize,
    /// Employees with a positive leave balance.
    pub active_employees: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeStats {
    pub leave_balance: i32,
    pub pending_leaves: usize,
    pub recent_payrolls: usize,
    pub leaves_taken: usize,
}

/// Payrolls generated strictly after `now` minus 30 days.
pub fn recent_payroll_count(payrolls: &[Payroll], now: NaiveDateTime) -> usize {
    let cutoff = now - Duration::days(RECENT_PAYROLL_DAYS);
    payrolls
        .iter()
        .filter(|p| p.generated_date.is_some_and(|generated| generated > cutoff))
        .count()
}

pub fn count_with_status(leaves: &[LeaveRequest], status: LeaveStatus) -> usize {
    leaves.iter().filter(|l| l.status == status).count()
}

pub fn admin_stats(
    employees: &[Employee],
    pending_leaves: &[LeaveRequest],
    payrolls: &[Payroll],
    now: NaiveDateTime,
) -> AdminStats {
    AdminStats {
        total_employees: employees.len(),
        pending_leaves: pending_leaves.len(),
        recent_payrolls: recent_payroll_count(payrolls, now),
        active_employees: employees
            .iter()
            .filter(|e| e.leave_balance.unwrap_or(0) > 0)
            .count(),
    }
}

pub fn employee_stats(
    employee: &Employee,
    leaves: &[LeaveRequest],
    payrolls: &[Payroll],
    now: NaiveDateTime,
) -> EmployeeStats {
    EmployeeStats {
        leave_balance: employee.displayed_leave_balance(),
        pending_leaves: count_with_status(leaves, LeaveStatus::Pending),
        recent_payrolls: recent_payroll_count(payrolls, now),
        leaves_taken: count_with_status(leaves, LeaveStatus::Approved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveType, PayrollStatus};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 30)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn payroll(id: i64, days_ago: Option<i64>) -> Payroll {
        Payroll {
            payroll_id: id,
            employee_id: 1,
            month: 6,
            year: 2024,
            base_salary: 1000.0,
            allowances: 0.0,
            deductions: 0.0,
            net_salary: 1000.0,
            status: PayrollStatus::Pending,
            generated_date: days_ago.map(|d| now() - Duration::days(d)),
            processed_date: None,
            ai_message: None,
        }
    }

    fn leave(id: i64, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            leave_id: id,
            employee_id: 1,
            employee_name: None,
            leave_type: LeaveType::Sick,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            reason: None,
            status,
            applied_date: None,
            processed_date: None,
            processed_by: None,
            ai_message: None,
        }
    }

    #[test]
    fn test_recent_window_is_exclusive() {
        let payrolls = vec![
            payroll(1, Some(1)),
            payroll(2, Some(29)),
            payroll(3, Some(30)),
            payroll(4, Some(45)),
            payroll(5, None),
        ];
        assert_eq!(recent_payroll_count(&payrolls, now()), 2);
    }

    #[test]
    fn test_employee_stats() {
        let employee: Employee = serde_json::from_str(
            r#"{"employeeId":1,"firstName":"A","lastName":"B","leaveBalance":7}"#,
        )
        .unwrap();
        let leaves = vec![
            leave(1, LeaveStatus::Pending),
            leave(2, LeaveStatus::Approved),
            leave(3, LeaveStatus::Approved),
            leave(4, LeaveStatus::Rejected),
        ];
        let stats = employee_stats(&employee, &leaves, &[payroll(1, Some(2))], now());
        assert_eq!(
            stats,
            EmployeeStats {
                leave_balance: 7,
                pending_leaves: 1,
                recent_payrolls: 1,
                leaves_taken: 2,
            }
        );
    }

    #[test]
    fn test_admin_stats_counts_positive_balances() {
        let employees: Vec<Employee> = serde_json::from_str(
            r#"[
                {"employeeId":1,"firstName":"A","lastName":"B","leaveBalance":3},
                {"employeeId":2,"firstName":"C","lastName":"D","leaveBalance":0},
                {"employeeId":3,"firstName":"E","lastName":"F"}
            ]"#,
        )
        .unwrap();
        let stats = admin_stats(&employees, &[leave(1, LeaveStatus::Pending)], &[], now());
        assert_eq!(stats.total_employees, 3);
        assert_eq!(stats.pending_leaves, 1);
        assert_eq!(stats.recent_payrolls, 0);
        assert_eq!(stats.active_employees, 1);
    }
}
