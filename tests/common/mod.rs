//! Common test utilities for integration tests.
//!
//! Builds an [`App`] over the mock adapters, seeds a restored session, and
//! drives it with key presses the way the event loop does.
//!
//! # Example
//!
//! ```ignore
//! let (mut app, http) = TestAppBuilder::new().role(Role::Admin).build().await;
//! app.navigate(Route::Departments);
//! settle(&mut app).await;
//! ```

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use paydesk::adapters::InMemorySessionStorage;
use paydesk::api::ApiGateway;
use paydesk::app::{App, ScreenStatus};
use paydesk::models::{Role, SessionUser};
use paydesk::services::Services;
use paydesk::session::{SessionContext, StoredSession};
use std::sync::Arc;
use std::time::Duration;

pub const BASE: &str = "http://payroll.test/api/v1";

/// Absolute mock URL for an API path.
pub fn url(path: &str) -> String {
    format!("{}/{}", BASE, path)
}

/// A stored session for `role` with an opaque (never expiring) token.
pub fn stored_session(role: Role) -> StoredSession {
    StoredSession {
        token: "opaque-test-token".to_string(),
        user: SessionUser {
            id: 21,
            username: "meera".to_string(),
            email: "meera@example.com".to_string(),
            role,
        },
    }
}

/// An unsigned JWT whose `exp` claim is `exp` (Unix seconds).
#[allow(dead_code)]
pub fn jwt_expiring_at(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"meera","exp":{}}}"#, exp));
    format!("{}.{}.signature", header, payload)
}

/// Builder for test App instances.
#[derive(Default)]
pub struct TestAppBuilder {
    role: Option<Role>,
    token: Option<String>,
    http: Option<MockHttpClient>,
}

#[allow(dead_code)]
impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a session with this role; signed out when never called.
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Replace the stored opaque token, e.g. with [`jwt_expiring_at`].
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn http(mut self, http: MockHttpClient) -> Self {
        self.http = Some(http);
        self
    }

    pub async fn build(self) -> (App, MockHttpClient) {
        let http = self.http.unwrap_or_default();
        let gateway = Arc::new(ApiGateway::new(Arc::new(http.clone()), BASE));
        let storage = match self.role {
            Some(role) => {
                let mut stored = stored_session(role);
                if let Some(token) = self.token {
                    stored.token = token;
                }
                InMemorySessionStorage::with_session(&stored)
            }
            None => InMemorySessionStorage::new(),
        };
        let session = SessionContext::new(Arc::new(storage), gateway.clone());
        session.init().await;
        (App::new(Services::new(gateway), session), http)
    }
}

/// Deliver the next message from a spawned task.
pub async fn pump(app: &mut App) {
    let rx = app.message_rx.as_mut().expect("receiver taken");
    let message = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for a message")
        .expect("channel closed");
    app.handle_message(message);
}

/// Deliver messages until the screen is no longer loading.
pub async fn settle(app: &mut App) {
    while app.screen.status == ScreenStatus::Loading {
        pump(app).await;
    }
}

#[allow(dead_code)]
pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[allow(dead_code)]
pub fn press_ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

#[allow(dead_code)]
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
