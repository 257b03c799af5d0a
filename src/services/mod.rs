//! One method per REST endpoint, grouped by resource.
//!
//! Services only unwrap responses; any transformation happens in
//! `helpers` or the app layer.

pub mod auth;
pub mod departments;
pub mod employees;
pub mod job_roles;
pub mod leaves;
pub mod payroll;
pub mod welcome;

use std::sync::Arc;

use crate::api::ApiGateway;

pub use auth::AuthService;
pub use departments::DepartmentService;
pub use employees::EmployeeService;
pub use job_roles::JobRoleService;
pub use leaves::LeaveService;
pub use payroll::PayrollService;
pub use welcome::{fallback_greeting, WelcomeService};

/// All services sharing one gateway. Cheap to clone into spawned tasks.
#[derive(Debug, Clone)]
pub struct Services {
    pub gateway: Arc<ApiGateway>,
    pub auth: AuthService,
    pub employees: EmployeeService,
    pub departments: DepartmentService,
    pub job_roles: JobRoleService,
    pub leaves: LeaveService,
    pub payroll: PayrollService,
    pub welcome: WelcomeService,
}

impl Services {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            auth: AuthService::new(gateway.clone()),
            employees: EmployeeService::new(gateway.clone()),
            departments: DepartmentService::new(gateway.clone()),
            job_roles: JobRoleService::new(gateway.clone()),
            leaves: LeaveService::new(gateway.clone()),
            payroll: PayrollService::new(gateway.clone()),
            welcome: WelcomeService::new(gateway.clone()),
            gateway,
        }
    }
}
