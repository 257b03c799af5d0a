//! Test doubles for the trait seams.
//!
//! - [`MockHttpClient`] - configurable responses, records every request
//! - [`InMemorySessionStorage`] - session storage without the filesystem

pub mod http;
pub mod storage;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use storage::InMemorySessionStorage;
