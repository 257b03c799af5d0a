//! Trait seams for dependency injection.
//!
//! - [`HttpClient`] - REST transport (GET, POST, PUT, PATCH, DELETE)
//! - [`SessionStorage`] - persisted token and user

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, Method, Response};
pub use storage::{SessionStorage, StorageError};
