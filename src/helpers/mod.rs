//! Pure functions behind the screens: formatting, filtering, and the
//! derived values (leave days, net salary, dashboard counts).

pub mod filter;
pub mod format;
pub mod leave;
pub mod payroll;
pub mod stats;
pub mod validate;

pub use filter::{filter_by, EmployeeSortKey, Searchable, SortConfig, SortDirection};
pub use format::{
    format_currency, format_date, format_date_time, format_optional_date,
    format_optional_date_time, month_name, period_label, selectable_years,
};
pub use leave::calculate_leave_days;
pub use payroll::net_salary;
pub use stats::{admin_stats, employee_stats, recent_payroll_count, AdminStats, EmployeeStats};
pub use validate::{is_valid_email, is_valid_phone, password_problem};
