//! Messages sent from spawned tasks back to the UI task.

use crate::error::ClientError;
use crate::models::{
    Department, Employee, JobRole, LeaveRequest, LeaveStatus, Payroll, SessionUser,
};
use crate::routes::Route;

/// Data fetched for one screen.
#[derive(Debug, Clone)]
pub enum Loaded {
    AdminDashboard {
        employees: Vec<Employee>,
        pending_leaves: Vec<LeaveRequest>,
        payrolls: Vec<Payroll>,
    },
    EmployeeDashboard {
        employee: Option<Employee>,
        leaves: Vec<LeaveRequest>,
        payrolls: Vec<Payroll>,
    },
    Employees(Vec<Employee>),
    EmployeeForm {
        departments: Vec<Department>,
        job_roles: Vec<JobRole>,
        /// Present when editing.
        employee: Option<Employee>,
    },
    EmployeeProfile {
        employee: Option<Employee>,
        leaves: Vec<LeaveRequest>,
        payrolls: Vec<Payroll>,
    },
    Departments(Vec<Department>),
    Department(Option<Department>),
    JobRoles(Vec<JobRole>),
    JobRole(Option<JobRole>),
    Leaves {
        leaves: Vec<LeaveRequest>,
        roster: Vec<Employee>,
    },
    LeaveForm {
        own_employee: Option<Employee>,
        roster: Vec<Employee>,
    },
    LeaveApproval {
        pending: Vec<LeaveRequest>,
        approver: Option<Employee>,
        roster: Vec<Employee>,
    },
    Payrolls {
        payrolls: Vec<Payroll>,
        roster: Vec<Employee>,
    },
    PayrollForm {
        employees: Vec<Employee>,
    },
    PayrollDetails {
        payroll: Option<Payroll>,
        employee: Option<Employee>,
    },
}

/// Result of a mutation that succeeded.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Record deleted; prune it from the current list.
    Deleted { id: i64, notice: &'static str },
    /// Record saved; go to `next` and announce it.
    Saved { next: Route, notice: &'static str },
    /// Leave approved or rejected; prune it from the approval queue.
    LeaveProcessed { id: i64, status: LeaveStatus },
    /// Payroll marked processed; reload the current screen.
    PayrollProcessed { id: i64 },
}

#[derive(Debug)]
pub enum AppMessage {
    Loaded {
        generation: u64,
        data: Box<Loaded>,
    },
    LoadFailed {
        generation: u64,
        error: ClientError,
    },
    Welcome {
        generation: u64,
        text: String,
    },
    ActionSucceeded {
        generation: u64,
        outcome: Outcome,
    },
    ActionFailed {
        generation: u64,
        error: ClientError,
    },
    SignedIn(SessionUser),
    AuthFailed(ClientError),
    SignedOut,
}
