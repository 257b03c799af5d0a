//! What the signed-in role may do.

use crate::models::Role;

/// Capability flags derived once from the session role.
///
/// Views and routes consult these instead of comparing role strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub manage_employees: bool,
    pub manage_departments: bool,
    pub manage_job_roles: bool,
    pub approve_leaves: bool,
    pub apply_leave_for_others: bool,
    pub view_all_leaves: bool,
    pub generate_payroll: bool,
    pub process_payroll: bool,
    pub view_all_payrolls: bool,
    /// Leave balance is not enforced client-side and shows as unbounded.
    pub unlimited_leave_balance: bool,
}

impl Capabilities {
    /// No capabilities; anonymous sessions and non-admin roles.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            manage_employees: true,
            manage_departments: true,
            manage_job_roles: true,
            approve_leaves: true,
            apply_leave_for_others: true,
            view_all_leaves: true,
            generate_payroll: true,
            process_payroll: true,
            view_all_payrolls: true,
            unlimited_leave_balance: true,
        }
    }

    pub fn for_role(role: Role) -> Self {
        if role.is_admin() {
            Self::all()
        } else {
            Self::none()
        }
    }

    /// Admin home is the organisation dashboard.
    pub fn uses_admin_dashboard(&self) -> bool {
        self.view_all_payrolls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_everything() {
        let caps = Capabilities::for_role(Role::Admin);
        assert_eq!(caps, Capabilities::all());
        assert!(caps.uses_admin_dashboard());
    }

    #[test]
    fn test_employee_and_unknown_have_nothing() {
        assert_eq!(Capabilities::for_role(Role::Employee), Capabilities::none());
        assert_eq!(Capabilities::for_role(Role::Unknown), Capabilities::none());
        assert!(!Capabilities::none().uses_admin_dashboard());
    }
}
