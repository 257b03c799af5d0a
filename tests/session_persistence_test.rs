//! Session lifecycle against the on-disk store.
//!
//! Sign-in goes over wiremock; the session file lives in a temp dir.

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use paydesk::adapters::{FileSessionStorage, ReqwestHttpClient};
use paydesk::api::ApiGateway;
use paydesk::models::{LoginRequest, Role};
use paydesk::session::{SessionContext, SessionState};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn context(server_uri: &str, dir: &TempDir) -> (SessionContext, Arc<ApiGateway>) {
    let gateway = Arc::new(ApiGateway::new(
        Arc::new(ReqwestHttpClient::new()),
        format!("{}/api/v1", server_uri),
    ));
    let storage = Arc::new(FileSessionStorage::new(dir.path()));
    (SessionContext::new(storage, gateway.clone()), gateway)
}

fn jwt_expiring_at(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"ravi","exp":{}}}"#, exp));
    format!("{}.{}.sig", header, payload)
}

async fn mount_login(server: &MockServer, token: &str, role: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": token,
            "tokenType": "Bearer",
            "id": 5,
            "username": "ravi",
            "email": "ravi@example.com",
            "role": role
        })))
        .mount(server)
        .await;
}

fn credentials() -> LoginRequest {
    LoginRequest {
        username: "ravi".into(),
        password: "Secret#123".into(),
    }
}

#[tokio::test]
async fn test_login_persists_and_restores() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_login(&server, "opaque-token", "ADMIN").await;

    let (session, _) = context(&server.uri(), &dir);
    session.init().await;
    assert_eq!(session.state(), SessionState::Anonymous);

    let user = session.login(&credentials()).await.unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(dir.path().join("session.json").exists());

    // A fresh process sees the same session and sends its token.
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .and(header("Authorization", "Bearer opaque-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5, "username": "ravi", "email": "ravi@example.com", "role": "ADMIN"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (restored, gateway) = context(&server.uri(), &dir);
    restored.init().await;
    assert!(restored.is_authenticated());
    assert!(restored.capabilities().manage_employees);
    assert_eq!(gateway.token().as_deref(), Some("opaque-token"));
    assert_eq!(restored.current_user().await.unwrap().username, "ravi");
}

#[tokio::test]
async fn test_logout_removes_file() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_login(&server, "opaque-token", "EMPLOYEE").await;

    let (session, gateway) = context(&server.uri(), &dir);
    session.init().await;
    session.login(&credentials()).await.unwrap();
    session.logout().await;

    assert!(!session.is_authenticated());
    assert!(gateway.token().is_none());
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn test_expired_token_is_discarded_on_start() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let expired = jwt_expiring_at(chrono::Utc::now().timestamp() - 60);
    std::fs::write(
        dir.path().join("session.json"),
        json!({
            "token": expired,
            "user": {"id": 5, "username": "ravi", "email": "", "role": "EMPLOYEE"}
        })
        .to_string(),
    )
    .unwrap();

    let (session, _) = context(&server.uri(), &dir);
    session.init().await;
    assert_eq!(session.state(), SessionState::Anonymous);
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn test_unexpired_jwt_is_kept() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let token = jwt_expiring_at(chrono::Utc::now().timestamp() + 3600);
    mount_login(&server, &token, "EMPLOYEE").await;

    let (session, _) = context(&server.uri(), &dir);
    session.init().await;
    session.login(&credentials()).await.unwrap();

    let (restored, _) = context(&server.uri(), &dir);
    restored.init().await;
    assert!(restored.is_authenticated());
    assert!(!restored.capabilities().manage_employees);
}

#[tokio::test]
async fn test_malformed_file_is_discarded() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("session.json"), "{not json").unwrap();

    let (session, _) = context(&server.uri(), &dir);
    session.init().await;
    assert_eq!(session.state(), SessionState::Anonymous);
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn test_failed_login_stays_anonymous() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid username or password"})),
        )
        .mount(&server)
        .await;

    let (session, _) = context(&server.uri(), &dir);
    session.init().await;
    let err = session.login(&credentials()).await.unwrap_err();
    assert_eq!(err.user_message(), "Invalid username or password");
    assert!(err.is_unauthorized());
    assert!(!session.is_authenticated());
    assert!(!dir.path().join("session.json").exists());
}
