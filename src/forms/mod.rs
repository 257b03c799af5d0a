//! Form state and local validation.
//!
//! Every form turns its fields into a typed request body or a
//! [`ValidationError`](crate::error::ValidationError) before anything is sent.

pub mod department;
pub mod employee;
pub mod field;
pub mod job_role;
pub mod leave;
pub mod login;
pub mod payroll;
pub mod register;

pub use department::DepartmentForm;
pub use employee::{EmployeeForm, DEFAULT_LEAVE_BALANCE};
pub use field::{Field, FieldInput, FieldValue, FormState, SelectField, SelectOption, TextField};
pub use job_role::JobRoleForm;
pub use leave::{LeaveApplicant, LeaveForm, PROFILE_NOT_FOUND};
pub use login::LoginForm;
pub use payroll::PayrollForm;
pub use register::RegisterForm;
