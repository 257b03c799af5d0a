//! Error types for the payroll client.
//!
//! - [`ApiError`]: a REST call failed (transport or non-2xx status)
//! - [`ValidationError`]: a form was rejected locally, nothing was sent
//! - [`ClientError`]: the union the application surfaces in its alert banner
//!
//! Every error maps to an [`ErrorCategory`] that decides the recovery hint
//! and whether a reload is offered.

pub mod api;
pub mod category;
pub mod client_error;
pub mod extract;
pub mod validation;

pub use api::ApiError;
pub use category::ErrorCategory;
pub use client_error::ClientError;
pub use extract::{extract_error_message, GENERIC_ERROR_MESSAGE};
pub use validation::ValidationError;

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
