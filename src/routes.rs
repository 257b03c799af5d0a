//! Screens, the protected-route guard, and the capability-gated menu.

use crate::session::Capabilities;

/// Every screen the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    /// Organisation dashboard.
    Dashboard,
    EmployeeDashboard,
    Employees,
    EmployeeNew,
    EmployeeEdit(i64),
    EmployeeProfile(i64),
    Departments,
    DepartmentNew,
    DepartmentEdit(i64),
    JobRoles,
    JobRoleNew,
    JobRoleEdit(i64),
    Leaves,
    LeaveNew,
    LeaveApproval,
    Payroll,
    PayrollNew,
    PayrollDetails(i64),
}

/// A capability gate on a route.
#[derive(Clone, Copy)]
enum Requirement {
    Public,
    SignedIn,
    Capability(fn(&Capabilities) -> bool),
}

impl Route {
    /// Login and Register; reachable only while signed out.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    fn requirement(&self) -> Requirement {
        use Requirement::*;
        match self {
            Route::Login | Route::Register => Public,
            Route::Dashboard => Capability(|c| c.uses_admin_dashboard()),
            Route::Employees
            | Route::EmployeeNew
            | Route::EmployeeEdit(_)
            | Route::EmployeeProfile(_) => Capability(|c| c.manage_employees),
            Route::Departments | Route::DepartmentNew | Route::DepartmentEdit(_) => {
                Capability(|c| c.manage_departments)
            }
            Route::JobRoles | Route::JobRoleNew | Route::JobRoleEdit(_) => {
                Capability(|c| c.manage_job_roles)
            }
            Route::LeaveApproval => Capability(|c| c.approve_leaves),
            Route::PayrollNew => Capability(|c| c.generate_payroll),
            Route::EmployeeDashboard
            | Route::Leaves
            | Route::LeaveNew
            | Route::Payroll
            | Route::PayrollDetails(_) => SignedIn,
        }
    }

    /// Screen title for the header bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign In",
            Route::Register => "Create Account",
            Route::Dashboard => "Admin Dashboard",
            Route::EmployeeDashboard => "My Dashboard",
            Route::Employees => "Employees",
            Route::EmployeeNew => "Add Employee",
            Route::EmployeeEdit(_) => "Edit Employee",
            Route::EmployeeProfile(_) => "Employee Profile",
            Route::Departments => "Departments",
            Route::DepartmentNew => "Add Department",
            Route::DepartmentEdit(_) => "Edit Department",
            Route::JobRoles => "Job Roles",
            Route::JobRoleNew => "Add Job Role",
            Route::JobRoleEdit(_) => "Edit Job Role",
            Route::Leaves => "Leave Management",
            Route::LeaveNew => "Apply for Leave",
            Route::LeaveApproval => "Leave Approval",
            Route::Payroll => "Payroll",
            Route::PayrollNew => "Generate Payroll",
            Route::PayrollDetails(_) => "Payroll Details",
        }
    }

    /// Where Esc leads from this screen.
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::EmployeeNew | Route::EmployeeEdit(_) | Route::EmployeeProfile(_) => {
                Some(Route::Employees)
            }
            Route::DepartmentNew | Route::DepartmentEdit(_) => Some(Route::Departments),
            Route::JobRoleNew | Route::JobRoleEdit(_) => Some(Route::JobRoles),
            Route::LeaveNew => Some(Route::Leaves),
            Route::PayrollNew | Route::PayrollDetails(_) => Some(Route::Payroll),
            Route::Register => Some(Route::Login),
            _ => None,
        }
    }
}

/// Home dashboard for a signed-in session.
pub fn home_for(capabilities: &Capabilities) -> Route {
    if capabilities.uses_admin_dashboard() {
        Route::Dashboard
    } else {
        Route::EmployeeDashboard
    }
}

/// Resolve the route actually shown for `requested`.
///
/// `capabilities` is `None` when there is no live session (absent or
/// expired token).
pub fn resolve(requested: Route, capabilities: Option<&Capabilities>) -> Route {
    match (capabilities, requested.requirement()) {
        (None, Requirement::Public) => requested,
        (None, _) => Route::Login,
        (Some(caps), Requirement::Public) => home_for(caps),
        (Some(_), Requirement::SignedIn) => requested,
        (Some(caps), Requirement::Capability(allowed)) => {
            if allowed(caps) {
                requested
            } else {
                home_for(caps)
            }
        }
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: Route,
}

/// Sidebar entries visible to the session, in display order.
pub fn menu_items(capabilities: &Capabilities) -> Vec<MenuItem> {
    let mut items = vec![MenuItem {
        label: "Dashboard",
        route: home_for(capabilities),
    }];
    if capabilities.manage_employees {
        items.push(MenuItem {
            label: "Employees",
            route: Route::Employees,
        });
    }
    if capabilities.manage_departments {
        items.push(MenuItem {
            label: "Departments",
            route: Route::Departments,
        });
    }
    if capabilities.manage_job_roles {
        items.push(MenuItem {
            label: "Job Roles",
            route: Route::JobRoles,
        });
    }
    items.push(MenuItem {
        label: "Leave Management",
        route: Route::Leaves,
    });
    if capabilities.approve_leaves {
        items.push(MenuItem {
            label: "Leave Approval",
            route: Route::LeaveApproval,
        });
    }
    items.push(MenuItem {
        label: "Payroll",
        route: Route::Payroll,
    });
    items
}
