//! Keyboard handling: build the input context, dispatch, execute.

use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::debug;

use super::views::View;
use super::App;
use crate::forms::FieldInput;
use crate::helpers::{selectable_years, EmployeeSortKey};
use crate::input::{Command, InputContext, InputMode};
use crate::models::LeaveStatus;
use crate::routes::{self, Route};

/// Number of rows the cursor can move over.
pub(super) fn row_count(view: &View) -> Option<usize> {
    match view {
        View::Employees(v) => Some(v.rows().len()),
        View::Departments(l) => Some(l.visible().len()),
        View::JobRoles(l) => Some(l.visible().len()),
        View::Leaves(v) => Some(v.rows().len()),
        View::LeaveApproval(v) => Some(v.list.visible().len()),
        View::Payrolls(v) => Some(v.rows().len()),
        _ => None,
    }
}

pub(super) fn cursor_mut(view: &mut View) -> Option<&mut usize> {
    match view {
        View::Employees(v) => Some(&mut v.list.selected),
        View::Departments(l) => Some(&mut l.selected),
        View::JobRoles(l) => Some(&mut l.selected),
        View::Leaves(v) => Some(&mut v.list.selected),
        View::LeaveApproval(v) => Some(&mut v.list.selected),
        View::Payrolls(v) => Some(&mut v.list.selected),
        _ => None,
    }
}

/// Keep the cursor on a visible row after rows disappear.
pub(super) fn clamp_cursor(view: &mut View) {
    let Some(len) = row_count(view) else {
        return;
    };
    if let Some(cursor) = cursor_mut(view) {
        *cursor = (*cursor).min(len.saturating_sub(1));
    }
}

/// The search box, its focus flag and the cursor of a searchable list.
fn search_mut(view: &mut View) -> Option<(&mut crate::forms::TextField, &mut bool, &mut usize)> {
    match view {
        View::Employees(v) => Some((&mut v.list.search, &mut v.list.searching, &mut v.list.selected)),
        View::Departments(l) => Some((&mut l.search, &mut l.searching, &mut l.selected)),
        View::JobRoles(l) => Some((&mut l.search, &mut l.searching, &mut l.selected)),
        View::Leaves(v) => Some((&mut v.list.search, &mut v.list.searching, &mut v.list.selected)),
        _ => None,
    }
}

impl App {
    pub fn build_input_context(&self) -> InputContext {
        let mode = if self.confirm.is_some() {
            InputMode::Confirm
        } else if self.form_state().is_some() {
            InputMode::Form
        } else if self.screen.view.captures_text() {
            InputMode::Search
        } else {
            InputMode::Browse
        };
        InputContext::new()
            .with_mode(mode)
            .with_menu_len(self.menu().len())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let context = self.build_input_context();
        if let Some(command) = self.registry.dispatch(key, &context) {
            self.execute_command(command);
        }
    }

    /// Run a command against the current screen. Returns false when the
    /// command does not apply here.
    pub fn execute_command(&mut self, command: Command) -> bool {
        if command.marks_dirty() {
            self.mark_dirty();
        }
        match command {
            Command::Quit => self.quit(),
            Command::Noop => {}
            Command::Logout => self.request_logout(),
            Command::Back => {
                if self.alert.take().is_none() {
                    self.back();
                }
            }
            Command::Reload => {
                if !self.screen.route.is_public() {
                    self.reload();
                }
            }
            Command::NextMenu | Command::PrevMenu => self.step_menu(command == Command::NextMenu),
            Command::JumpMenu(index) => match self.menu().get(index) {
                Some(item) => self.navigate(item.route),
                None => return false,
            },
            Command::MoveUp => match cursor_mut(&mut self.screen.view) {
                Some(cursor) => *cursor = cursor.saturating_sub(1),
                None => return false,
            },
            Command::MoveDown => {
                let Some(len) = row_count(&self.screen.view) else {
                    return false;
                };
                if let Some(cursor) = cursor_mut(&mut self.screen.view) {
                    if *cursor + 1 < len {
                        *cursor += 1;
                    }
                }
            }
            Command::Open | Command::Edit | Command::New => match self.target_route(command) {
                Some(route) => self.navigate(route),
                None => return false,
            },
            Command::Delete | Command::CancelLeave => self.request_delete(),
            Command::Approve => self.decide_leave(LeaveStatus::Approved),
            Command::Reject => self.decide_leave(LeaveStatus::Rejected),
            Command::Process => self.request_process_payroll(),
            Command::NextSort | Command::FlipSort => {
                let View::Employees(view) = &mut self.screen.view else {
                    return false;
                };
                let key = if command == Command::FlipSort {
                    view.sort.key
                } else {
                    let keys = EmployeeSortKey::ALL;
                    let at = keys.iter().position(|k| *k == view.sort.key).unwrap_or(0);
                    keys[(at + 1) % keys.len()]
                };
                view.sort = view.sort.toggle(key);
            }
            Command::CycleFilter => match &mut self.screen.view {
                View::Leaves(view) => view.cycle_status_filter(),
                _ => return false,
            },
            Command::CycleMonth => match &mut self.screen.view {
                View::Payrolls(view) => view.cycle_month(),
                _ => return false,
            },
            Command::CycleYear => match &mut self.screen.view {
                View::Payrolls(view) => view.cycle_year(&selectable_years(super::today())),
                _ => return false,
            },
            Command::StartSearch => match search_mut(&mut self.screen.view) {
                Some((_, searching, _)) => *searching = true,
                None => return false,
            },
            Command::EndSearch | Command::ClearSearch => {
                if let Some((search, searching, selected)) = search_mut(&mut self.screen.view) {
                    if command == Command::ClearSearch {
                        search.clear();
                        *selected = 0;
                    }
                    *searching = false;
                }
            }
            Command::SearchInput(input) => {
                if let Some((search, _, selected)) = search_mut(&mut self.screen.view) {
                    if search.apply(input) {
                        *selected = 0;
                    }
                }
            }
            Command::FocusNext => {
                if let Some(form) = self.form_state_mut() {
                    form.focus_next();
                }
            }
            Command::FocusPrev => {
                if let Some(form) = self.form_state_mut() {
                    form.focus_prev();
                }
            }
            Command::Submit => self.submit(),
            Command::Input(input) => self.edit_field(input),
            Command::SwitchAuthScreen => match self.screen.route {
                Route::Login => self.navigate(Route::Register),
                Route::Register => self.navigate(Route::Login),
                _ => return false,
            },
            Command::ConfirmYes => self.confirm_pending(),
            Command::ConfirmNo => self.cancel_confirm(),
        }
        true
    }

    fn step_menu(&mut self, forward: bool) {
        let menu = self.menu();
        if menu.is_empty() {
            return;
        }
        let next = match (self.active_menu_index(), forward) {
            (Some(i), true) => (i + 1) % menu.len(),
            (Some(i), false) => (i + menu.len() - 1) % menu.len(),
            (None, _) => 0,
        };
        self.navigate(menu[next].route);
    }

    fn edit_field(&mut self, input: FieldInput) {
        let Some(form) = self.form_state_mut() else {
            return;
        };
        if form.submitting {
            return;
        }
        let changed = form.handle_input(input);
        let on_employee = form.focused_name() == Some("employeeId");
        if changed && on_employee {
            if let View::PayrollForm(form) = &mut self.screen.view {
                form.on_employee_changed();
            }
        }
    }

    /// Where Open, Edit or New leads from the current screen, if the
    /// session may go there.
    fn target_route(&self, command: Command) -> Option<Route> {
        let route = match (&self.screen.view, command) {
            (View::Employees(view), Command::Open | Command::Edit) => {
                let employee = *view.rows().get(view.list.selected)?;
                if command == Command::Open {
                    Route::EmployeeProfile(employee.employee_id)
                } else {
                    Route::EmployeeEdit(employee.employee_id)
                }
            }
            (View::EmployeeProfile(view), Command::Edit) => {
                Route::EmployeeEdit(view.employee.as_ref()?.employee_id)
            }
            (View::Departments(list), Command::Open | Command::Edit) => {
                Route::DepartmentEdit(list.visible().get(list.selected)?.department_id)
            }
            (View::JobRoles(list), Command::Open | Command::Edit) => {
                Route::JobRoleEdit(list.visible().get(list.selected)?.job_id)
            }
            (View::Payrolls(view), Command::Open) => {
                Route::PayrollDetails(view.rows().get(view.list.selected)?.payroll_id)
            }
            (View::Employees(_), Command::New) => Route::EmployeeNew,
            (View::Departments(_), Command::New) => Route::DepartmentNew,
            (View::JobRoles(_), Command::New) => Route::JobRoleNew,
            (View::Leaves(_), Command::New) => Route::LeaveNew,
            (View::Payrolls(_), Command::New) => Route::PayrollNew,
            _ => return None,
        };
        let session = self.session.session()?;
        if routes::resolve(route, Some(&session.capabilities)) == route {
            Some(route)
        } else {
            debug!("{:?} is not available to this session", route);
            None
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
    use crossterm::event::{KeyCode, KeyModifiers};
    use serde_json::json;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn test_login_form_takes_letters() {
        let (mut app, _) = app_with(None).await;
        app.start();
        type_text(&mut app, "quinn");
        assert!(!app.should_quit);
        match &app.screen.view {
            View::Login(form) => assert_eq!(form.state.text("username"), "quinn"),
            other => panic!("unexpected view {:?}", other),
        }
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.screen.route, Route::Register);
    }

    #[tokio::test]
    async fn test_search_filters_and_esc_clears() {
        let (mut app, http) = app_with(Some(Role::Admin)).await;
        http.set_response(
            Method::Get,
            &url("departments"),
            MockResponse::json(
                200,
                json!([
                    {"departmentId": 1, "departmentName": "Finance & Accounting"},
                    {"departmentId": 2, "departmentName": "Engineering"}
                ]),
            ),
        );
        app.navigate(Route::Departments);
        settle(&mut app).await;

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "fin");
        assert_eq!(row_count(&app.screen.view), Some(1));
        press(&mut app, KeyCode::Esc);
        assert_eq!(row_count(&app.screen.view), Some(2));
        assert_eq!(app.build_input_context().mode, InputMode::Browse);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen.route, Route::DepartmentEdit(2));
    }

    #[tokio::test]
    async fn test_employee_cannot_open_admin_routes() {
        let (mut app, http) = app_with(Some(Role::Employee)).await;
        http.set_default_response(MockResponse::json(200, json!([])));
        app.navigate(Route::Payroll);
        settle(&mut app).await;
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen.route, Route::Payroll);
    }

    #[tokio::test]
    async fn test_confirm_dialog_owns_keys() {
        let (mut app, _) = app_with(Some(Role::Admin)).await;
        app.navigate(Route::DepartmentNew);
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.screen.route, Route::Departments);

        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(app.confirm.is_some());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('n'));
        assert!(app.confirm.is_none());
    }

    #[tokio::test]
    async fn test_menu_digits_and_tab() {
        let (mut app, http) = app_with(Some(Role::Admin)).await;
        http.set_default_response(MockResponse::json(200, json!([])));
        app.navigate(Route::Dashboard);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen.route, Route::Departments);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen.route, Route::JobRoles);
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.screen.route, Route::Departments);
    }
}
