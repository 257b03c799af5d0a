//! Message handling for the App.

use chrono::Local;
use tracing::{debug, info, warn};

use super::keys::clamp_cursor;
use super::messages::{AppMessage, Loaded, Outcome};
use super::views::{name_index, Alert, ListView, ScreenStatus, View};
use super::App;
use crate::error::{ClientError, ErrorCategory};
use crate::forms::{DepartmentForm, EmployeeForm, JobRoleForm};
use crate::helpers::stats::DASHBOARD_RECENT_LIMIT;
use crate::helpers::{admin_stats, employee_stats};
use crate::models::LeaveStatus;
use crate::routes::Route;

pub const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

impl App {
    /// Apply a message from a spawned task.
    pub fn handle_message(&mut self, message: AppMessage) {
        self.mark_dirty();
        match message {
            AppMessage::Loaded { generation, data } => {
                if self.is_stale(generation, "load") {
                    return;
                }
                self.apply_loaded(*data);
            }
            AppMessage::LoadFailed { generation, error } => {
                if self.is_stale(generation, "load failure") {
                    return;
                }
                warn!("Loading {:?} failed: {}", self.screen.route, error);
                if error.is_unauthorized() {
                    self.expire_session();
                    return;
                }
                self.screen.status = ScreenStatus::Failed {
                    message: error.user_message(),
                    category: error.category(),
                };
                self.alert = Some(Alert::error(error.user_message()));
            }
            AppMessage::Welcome { generation, text } => {
                if self.is_stale(generation, "welcome message") {
                    return;
                }
                match &mut self.screen.view {
                    View::AdminDashboard(view) => view.welcome = Some(text),
                    View::EmployeeDashboard(view) => view.welcome = Some(text),
                    _ => {}
                }
            }
            AppMessage::ActionSucceeded {
                generation,
                outcome,
            } => {
                if self.is_stale(generation, "action result") {
                    return;
                }
                self.apply_outcome(outcome);
            }
            AppMessage::ActionFailed { generation, error } => {
                if self.is_stale(generation, "action failure") {
                    return;
                }
                warn!("Action on {:?} failed: {}", self.screen.route, error);
                if error.is_unauthorized() {
                    self.expire_session();
                    return;
                }
                self.fail_action(error);
            }
            AppMessage::SignedIn(user) => {
                info!("Session started for {} ({})", user.username, user.role);
                self.navigate(Route::Login);
            }
            AppMessage::AuthFailed(error) => {
                self.fail_action(error);
            }
            AppMessage::SignedOut => {
                self.navigate(Route::Login);
            }
        }
    }

    fn is_stale(&self, generation: u64, what: &str) -> bool {
        if self.scope.is_current(generation) {
            return false;
        }
        debug!(
            "Dropping stale {} from generation {} (current {})",
            what,
            generation,
            self.scope.generation()
        );
        true
    }

    /// The server refused the token: sign out and return to the login screen.
    fn expire_session(&mut self) {
        info!("Session rejected by the server; signing out");
        self.session.invalidate();
        let session = self.session.clone();
        tokio::spawn(async move {
            session.logout().await;
        });
        self.navigate(Route::Login);
        self.alert = Some(Alert::error(SESSION_EXPIRED));
    }

    /// Put a form back into an editable state and surface the error.
    fn fail_action(&mut self, error: ClientError) {
        if let Some(form) = self.form_state_mut() {
            form.submitting = false;
            if let ClientError::Validation(validation) = &error {
                form.fail(validation.clone());
                return;
            }
        }
        self.alert = Some(Alert::error(error.user_message()));
    }

    fn apply_loaded(&mut self, data: Loaded) {
        let now = Local::now().naive_local();
        let route = self.screen.route;
        let mut not_found = None;

        match (data, &mut self.screen.view) {
            (
                Loaded::AdminDashboard {
                    employees,
                    pending_leaves,
                    payrolls,
                },
                View::AdminDashboard(view),
            ) => {
                view.stats = admin_stats(&employees, &pending_leaves, &payrolls, now);
            }
            (
                Loaded::EmployeeDashboard {
                    employee,
                    leaves,
                    payrolls,
                },
                View::EmployeeDashboard(view),
            ) => {
                if let Some(employee) = &employee {
                    view.stats = employee_stats(employee, &leaves, &payrolls, now);
                }
                view.employee = employee;
                view.recent_leaves = leaves.into_iter().take(DASHBOARD_RECENT_LIMIT).collect();
                view.recent_payrolls = payrolls.into_iter().take(DASHBOARD_RECENT_LIMIT).collect();
            }
            (Loaded::Employees(employees), View::Employees(view)) => {
                view.list = ListView::new(employees);
            }
            (
                Loaded::EmployeeForm {
                    departments,
                    job_roles,
                    employee,
                },
                View::EmployeeForm(form),
            ) => {
                match (route, employee) {
                    (Route::EmployeeEdit(_), None) => not_found = Some("Employee not found"),
                    (_, Some(employee)) => *form = EmployeeForm::edit(&employee),
                    (_, None) => {}
                }
                form.set_departments(&departments);
                form.set_job_roles(&job_roles);
            }
            (
                Loaded::EmployeeProfile {
                    employee,
                    leaves,
                    payrolls,
                },
                View::EmployeeProfile(view),
            ) => {
                if employee.is_none() {
                    not_found = Some("Employee not found");
                }
                view.employee = employee;
                view.leaves = leaves;
                view.payrolls = payrolls;
            }
            (Loaded::Departments(departments), View::Departments(list)) => {
                *list = ListView::new(departments);
            }
            (Loaded::Department(department), View::DepartmentForm(form)) => match department {
                Some(department) => *form = DepartmentForm::edit(&department),
                None => not_found = Some("Department not found"),
            },
            (Loaded::JobRoles(roles), View::JobRoles(list)) => {
                *list = ListView::new(roles);
            }
            (Loaded::JobRole(role), View::JobRoleForm(form)) => match role {
                Some(role) => *form = JobRoleForm::edit(&role),
                None => not_found = Some("Job role not found"),
            },
            (Loaded::Leaves { leaves, roster }, View::Leaves(view)) => {
                view.list = ListView::new(leaves);
                view.names = name_index(&roster);
            }
            (
                Loaded::LeaveForm {
                    own_employee,
                    roster,
                },
                View::LeaveForm(view),
            ) => {
                view.form.set_employees(&roster);
                view.own_employee = own_employee;
            }
            (
                Loaded::LeaveApproval {
                    pending,
                    approver,
                    roster,
                },
                View::LeaveApproval(view),
            ) => {
                view.list = ListView::new(pending);
                view.approver = approver;
                view.names = name_index(&roster);
            }
            (Loaded::Payrolls { payrolls, roster }, View::Payrolls(view)) => {
                view.list = ListView::new(payrolls);
                view.names = name_index(&roster);
            }
            (Loaded::PayrollForm { employees }, View::PayrollForm(form)) => {
                form.set_employees(&employees);
            }
            (Loaded::PayrollDetails { payroll, employee }, View::PayrollDetails(view)) => {
                if payroll.is_none() {
                    not_found = Some("Payroll record not found");
                }
                view.payroll = payroll;
                view.employee = employee;
            }
            (_, _) => {
                debug!("Ignoring data that does not match {:?}", route);
                return;
            }
        }

        self.screen.status = match not_found {
            Some(message) => ScreenStatus::NotFound(message),
            None => ScreenStatus::Ready,
        };
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Deleted { id, notice } => {
                let removed = match &mut self.screen.view {
                    View::Employees(view) => view.list.remove(id),
                    View::Departments(list) => list.remove(id),
                    View::JobRoles(list) => list.remove(id),
                    View::Leaves(view) => view.list.remove(id),
                    _ => false,
                };
                if !removed {
                    debug!("Deleted record {} was not in the current list", id);
                }
                clamp_cursor(&mut self.screen.view);
                self.alert = Some(Alert::success(notice));
            }
            Outcome::Saved { next, notice } => {
                self.navigate(next);
                self.alert = Some(Alert::success(notice));
            }
            Outcome::LeaveProcessed { id, status } => {
                if let View::LeaveApproval(view) = &mut self.screen.view {
                    view.list.remove(id);
                }
                clamp_cursor(&mut self.screen.view);
                let verb = match status {
                    LeaveStatus::Approved => "approved",
                    LeaveStatus::Rejected => "rejected",
                    _ => "updated",
                };
                self.alert = Some(Alert::success(format!("Leave request {}", verb)));
            }
            Outcome::PayrollProcessed { id } => {
                info!("Payroll {} processed", id);
                self.reload();
                self.alert = Some(Alert::success("Payroll processed successfully"));
            }
        }
    }

    /// Category of the current failure, for choosing a recovery hint.
    pub fn failure_category(&self) -> Option<ErrorCategory> {
        match &self.screen.status {
            ScreenStatus::Failed { category, .. } => Some(*category),
            ScreenStatus::NotFound(_) => Some(ErrorCategory::NotFound),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::adapters::MockResponse;
    use crate::models::Role;
    use crate::traits::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_failure_sets_status_and_banner() {
        let (mut app, http) = app_with(Some(Role::Admin)).await;
        http.set_response(
            Method::Get,
            &url("departments"),
            MockResponse::json(503, json!({"message": "Service unavailable"})),
        );
        app.navigate(Route::Departments);
        settle(&mut app).await;
        assert_eq!(
            app.screen.status,
            ScreenStatus::Failed {
                message: "Service unavailable".to_string(),
                category: ErrorCategory::Server,
            }
        );
        assert_eq!(app.alert.as_ref().map(|a| a.message.as_str()), Some("Service unavailable"));
    }

    #[tokio::test]
    async fn test_missing_department_is_not_found() {
        let (mut app, http) = app_with(Some(Role::Admin)).await;
        http.set_response(Method::Get, &url("departments/9"), MockResponse::json(404, json!({})));
        app.navigate(Route::DepartmentEdit(9));
        settle(&mut app).await;
        assert_eq!(app.screen.status, ScreenStatus::NotFound("Department not found"));
        assert_eq!(app.failure_category(), Some(ErrorCategory::NotFound));
    }

    #[tokio::test]
    async fn test_edit_form_prefilled() {
        let (mut app, http) = app_with(Some(Role::Admin)).await;
        http.set_response(
            Method::Get,
            &url("jobs/2"),
            MockResponse::json(200, json!({"jobId": 2, "jobTitle": "Analyst", "baseSalary": 42000})),
        );
        app.navigate(Route::JobRoleEdit(2));
        settle(&mut app).await;
        match &app.screen.view {
            View::JobRoleForm(form) => {
                assert_eq!(form.editing, Some(2));
                assert_eq!(form.state.text("jobTitle"), "Analyst");
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_admin_dashboard_stats_and_welcome() {
        let (mut app, http) = app_with(Some(Role::Admin)).await;
        http.set_response(
            Method::Get,
            &url("employees"),
            MockResponse::json(
                200,
                json!([
                    {"employeeId": 1, "firstName": "A", "lastName": "B", "leaveBalance": 4},
                    {"employeeId": 2, "firstName": "C", "lastName": "D", "leaveBalance": 0}
                ]),
            ),
        );
        http.set_response(Method::Get, &url("leaves/pending"), MockResponse::json(200, json!([])));
        http.set_response(Method::Get, &url("payroll"), MockResponse::json(200, json!([])));
        http.set_response(
            Method::Get,
            &url("auth/welcome-message"),
            MockResponse::text(200, "Welcome back!"),
        );
        app.navigate(Route::Dashboard);
        pump(&mut app).await;
        pump(&mut app).await;
        match &app.screen.view {
            View::AdminDashboard(view) => {
                assert_eq!(view.stats.total_employees, 2);
                assert_eq!(view.stats.active_employees, 1);
                assert_eq!(view.welcome.as_deref(), Some("Welcome back!"));
            }
            other => panic!("unexpected view {:?}", other),
        }
    }
}
