//! Per-screen view state.
//!
//! A [`Screen`] pairs the resolved route with its load status and the
//! [`View`] the renderer draws. Views start empty and are filled when the
//! screen's load completes.

use std::collections::HashMap;

use crate::error::ErrorCategory;
use crate::forms::{
    DepartmentForm, EmployeeForm, JobRoleForm, LeaveForm, LoginForm, PayrollForm, RegisterForm,
    TextField,
};
use crate::helpers::{filter_by, AdminStats, EmployeeStats, Searchable, SortConfig};
use crate::models::{Employee, Identified, LeaveRequest, LeaveStatus, Payroll};
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenStatus {
    Loading,
    Ready,
    Failed {
        message: String,
        category: ErrorCategory,
    },
    /// The requested record does not exist.
    NotFound(&'static str),
}

/// A fetched collection with a search box and a cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub items: Vec<T>,
    pub search: TextField,
    /// Keys go to the search box while true.
    pub searching: bool,
    pub selected: usize,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search: TextField::new(),
            searching: false,
            selected: 0,
        }
    }
}

impl<T> ListView<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn search_term(&self) -> &str {
        self.search.content()
    }

    /// Keep the cursor inside a list of `len` visible rows.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

impl<T: Searchable> ListView<T> {
    /// Rows matching the search box, in fetch order.
    pub fn visible(&self) -> Vec<&T> {
        filter_by(&self.items, self.search_term())
    }
}

impl<T: Identified> ListView<T> {
    /// Drop a record after a successful delete. Returns false if absent.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        let len = self.items.len();
        self.clamp(len);
        removed
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeesView {
    pub list: ListView<Employee>,
    pub sort: SortConfig,
}

impl EmployeesView {
    /// Filtered then sorted rows.
    pub fn rows(&self) -> Vec<&Employee> {
        let mut rows = self.list.visible();
        self.sort.apply(&mut rows);
        rows
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeavesView {
    pub list: ListView<LeaveRequest>,
    pub status_filter: Option<LeaveStatus>,
    /// Employee names by id, admin only.
    pub names: HashMap<i64, String>,
}

impl LeavesView {
    pub fn rows(&self) -> Vec<&LeaveRequest> {
        self.list
            .visible()
            .into_iter()
            .filter(|leave| self.status_filter.map_or(true, |s| leave.status == s))
            .collect()
    }

    /// Cycle all → pending → approved → rejected → all.
    pub fn cycle_status_filter(&mut self) {
        let statuses = LeaveStatus::FILTERABLE;
        self.status_filter = match self.status_filter {
            None => Some(statuses[0]),
            Some(current) => statuses
                .iter()
                .position(|s| *s == current)
                .and_then(|i| statuses.get(i + 1))
                .copied(),
        };
        self.list.selected = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApprovalView {
    pub list: ListView<LeaveRequest>,
    /// The approver's own employee record, sent as `processedBy`.
    pub approver: Option<Employee>,
    pub names: HashMap<i64, String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PayrollsView {
    pub list: ListView<Payroll>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub names: HashMap<i64, String>,
}

impl PayrollsView {
    pub fn rows(&self) -> Vec<&Payroll> {
        self.list
            .items
            .iter()
            .filter(|p| self.month.map_or(true, |m| p.month == m))
            .filter(|p| self.year.map_or(true, |y| p.year == y))
            .collect()
    }

    /// Cycle the month filter through none, 1..=12.
    pub fn cycle_month(&mut self) {
        self.month = match self.month {
            None => Some(1),
            Some(12) => None,
            Some(m) => Some(m + 1),
        };
        self.list.selected = 0;
    }

    /// Cycle the year filter through none and `years`.
    pub fn cycle_year(&mut self, years: &[i32]) {
        self.year = match self.year {
            None => years.first().copied(),
            Some(current) => years
                .iter()
                .position(|y| *y == current)
                .and_then(|i| years.get(i + 1))
                .copied(),
        };
        self.list.selected = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminDashboardView {
    pub stats: AdminStats,
    pub welcome: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeDashboardView {
    pub employee: Option<Employee>,
    pub stats: EmployeeStats,
    pub recent_leaves: Vec<LeaveRequest>,
    pub recent_payrolls: Vec<Payroll>,
    pub welcome: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileView {
    pub employee: Option<Employee>,
    pub leaves: Vec<LeaveRequest>,
    pub payrolls: Vec<Payroll>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PayrollDetailsView {
    pub payroll: Option<Payroll>,
    pub employee: Option<Employee>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveFormView {
    pub form: LeaveForm,
    /// The applicant's own record; `None` for admins or a missing profile.
    pub own_employee: Option<Employee>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Login(LoginForm),
    Register(RegisterForm),
    AdminDashboard(AdminDashboardView),
    EmployeeDashboard(EmployeeDashboardView),
    Employees(EmployeesView),
    EmployeeForm(EmployeeForm),
    EmployeeProfile(ProfileView),
    Departments(ListView<crate::models::Department>),
    DepartmentForm(DepartmentForm),
    JobRoles(ListView<crate::models::JobRole>),
    JobRoleForm(JobRoleForm),
    Leaves(LeavesView),
    LeaveForm(LeaveFormView),
    LeaveApproval(ApprovalView),
    Payrolls(PayrollsView),
    PayrollForm(PayrollForm),
    PayrollDetails(PayrollDetailsView),
}

impl View {
    /// The empty view for a resolved route.
    pub fn for_route(route: Route, for_others: bool, today: chrono::NaiveDate) -> Self {
        match route {
            Route::Login => View::Login(LoginForm::new()),
            Route::Register => View::Register(RegisterForm::new()),
            Route::Dashboard => View::AdminDashboard(AdminDashboardView::default()),
            Route::EmployeeDashboard => View::EmployeeDashboard(EmployeeDashboardView::default()),
            Route::Employees => View::Employees(EmployeesView::default()),
            // Edit forms are rebuilt from the record once it loads.
            Route::EmployeeNew | Route::EmployeeEdit(_) => View::EmployeeForm(EmployeeForm::create()),
            Route::EmployeeProfile(_) => View::EmployeeProfile(ProfileView::default()),
            Route::Departments => View::Departments(ListView::default()),
            Route::DepartmentNew | Route::DepartmentEdit(_) => {
                View::DepartmentForm(DepartmentForm::create())
            }
            Route::JobRoles => View::JobRoles(ListView::default()),
            Route::JobRoleNew | Route::JobRoleEdit(_) => View::JobRoleForm(JobRoleForm::create()),
            Route::Leaves => View::Leaves(LeavesView::default()),
            Route::LeaveNew => View::LeaveForm(LeaveFormView {
                form: LeaveForm::new(for_others),
                own_employee: None,
            }),
            Route::LeaveApproval => View::LeaveApproval(ApprovalView::default()),
            Route::Payroll => View::Payrolls(PayrollsView::default()),
            Route::PayrollNew => View::PayrollForm(PayrollForm::new(today)),
            Route::PayrollDetails(_) => View::PayrollDetails(PayrollDetailsView::default()),
        }
    }

    /// True when typed characters belong to a text input.
    pub fn captures_text(&self) -> bool {
        match self {
            View::Login(_)
            | View::Register(_)
            | View::EmployeeForm(_)
            | View::DepartmentForm(_)
            | View::JobRoleForm(_)
            | View::LeaveForm(_)
            | View::PayrollForm(_) => true,
            View::Employees(v) => v.list.searching,
            View::Departments(l) => l.searching,
            View::JobRoles(l) => l.searching,
            View::Leaves(v) => v.list.searching,
            _ => false,
        }
    }
}

/// Map of employee id to full name.
pub fn name_index(employees: &[Employee]) -> HashMap<i64, String> {
    employees
        .iter()
        .map(|e| (e.employee_id, e.full_name()))
        .collect()
}

/// The resolved route, its load status, and its view.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub route: Route,
    pub status: ScreenStatus,
    pub view: View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Banner shown above the current screen until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Mutations that need a yes/no first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteEmployee(i64),
    DeleteDepartment(i64),
    DeleteJobRole(i64),
    CancelLeave(i64),
    ProcessPayroll(i64),
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
    pub prompt: String,
    pub action: PendingAction,
}
