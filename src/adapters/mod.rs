//! Concrete implementations of the trait seams in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP over reqwest
//! - [`FileSessionStorage`] - session persisted as JSON on disk
//!
//! The [`mock`] submodule provides test doubles for both.

pub mod file_session;
pub mod mock;
pub mod reqwest_http;

pub use file_session::FileSessionStorage;
pub use mock::{InMemorySessionStorage, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
