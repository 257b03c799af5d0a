//! Session state shared by every view.

pub mod capabilities;
pub mod context;
pub mod store;

pub use capabilities::Capabilities;
pub use context::{Session, SessionContext, SessionState};
pub use store::StoredSession;
