//! Applying for, approving and cancelling leave through the key bindings.

mod common;

use common::*;
use crossterm::event::KeyCode;
use paydesk::app::{AlertKind, View};
use paydesk::models::Role;
use paydesk::routes::Route;
use serde_json::json;

/// Employee 3 is linked to the signed-in user 21 and has `balance` days.
fn employee_backend(balance: i32) -> MockHttpClient {
    MockHttpConfig::new()
        .with_get("employees/user/21", employee_json(3, "Meera", "Iyer", "Engineering", balance))
        .with_get("leaves/employee/3", json!([leave_json(40, 3, "PENDING"), leave_json(41, 3, "APPROVED")]))
        .with_json(Method::Post, "leaves", 201, leave_json(42, 3, "PENDING"))
        .build()
}

fn fill_leave_form(app: &mut paydesk::app::App, start: &str, end: &str, reason: &str) {
    // Focus starts on the leave type select.
    press(app, KeyCode::Tab);
    type_text(app, start);
    press(app, KeyCode::Tab);
    type_text(app, end);
    press(app, KeyCode::Tab);
    type_text(app, reason);
}

#[tokio::test]
async fn test_employee_applies_within_balance() {
    let (mut app, http) = TestAppBuilder::new()
        .role(Role::Employee)
        .http(employee_backend(10))
        .build()
        .await;
    app.navigate(Route::LeaveNew);
    settle(&mut app).await;

    fill_leave_form(&mut app, "2030-02-03", "2030-02-05", "Family event");
    press(&mut app, KeyCode::Enter);
    pump(&mut app).await;
    settle(&mut app).await;

    let posts = http.requests_with(Method::Post);
    assert_eq!(posts.len(), 1);
    let body = posts[0].json().unwrap();
    assert_eq!(body["employeeId"], 3);
    assert_eq!(body["leaveType"], "CASUAL");
    assert_eq!(body["startDate"], "2030-02-03");
    assert_eq!(body["reason"], "Family event");

    assert_eq!(app.screen.route, Route::Leaves);
    let alert = app.alert.as_ref().unwrap();
    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(alert.message, "Leave request submitted successfully");
}

#[tokio::test]
async fn test_employee_over_balance_is_blocked_locally() {
    let (mut app, http) = TestAppBuilder::new()
        .role(Role::Employee)
        .http(employee_backend(2))
        .build()
        .await;
    app.navigate(Route::LeaveNew);
    settle(&mut app).await;

    fill_leave_form(&mut app, "2030-02-03", "2030-02-05", "Trip");
    press(&mut app, KeyCode::Enter);

    assert!(http.requests_with(Method::Post).is_empty());
    let form = app.form_state().unwrap();
    let error = form.error.as_ref().unwrap();
    assert_eq!(
        error.message,
        "Insufficient leave balance. You have 2 days available."
    );
    assert_eq!(form.focused_name(), Some("endDate"));
}

#[tokio::test]
async fn test_end_before_start_is_rejected() {
    let (mut app, http) = TestAppBuilder::new()
        .role(Role::Employee)
        .http(employee_backend(30))
        .build()
        .await;
    app.navigate(Route::LeaveNew);
    settle(&mut app).await;

    fill_leave_form(&mut app, "2030-02-05", "2030-02-03", "Trip");
    press(&mut app, KeyCode::Enter);

    assert!(http.requests_with(Method::Post).is_empty());
    assert_eq!(
        app.form_state().unwrap().error.as_ref().unwrap().message,
        "End date must be after start date"
    );
}

#[tokio::test]
async fn test_employee_cancels_pending_leave() {
    let http = employee_backend(10);
    http.set_response(Method::Delete, &url("leaves/40"), MockResponse::empty(204));
    let (mut app, http) = TestAppBuilder::new()
        .role(Role::Employee)
        .http(http)
        .build()
        .await;
    app.navigate(Route::Leaves);
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('c'));
    let confirm = app.confirm.as_ref().expect("confirm dialog");
    assert_eq!(confirm.prompt, "Are you sure you want to cancel this leave request?");
    press(&mut app, KeyCode::Char('y'));
    pump(&mut app).await;

    assert_eq!(http.requests_with(Method::Delete).len(), 1);
    match &app.screen.view {
        View::Leaves(view) => {
            assert_eq!(view.list.items.len(), 1);
            assert_eq!(view.list.items[0].leave_id, 41);
        }
        other => panic!("unexpected view {:?}", other),
    }
    assert_eq!(app.alert.as_ref().unwrap().message, "Leave request cancelled");
}

#[tokio::test]
async fn test_admin_approves_from_queue() {
    let http = MockHttpConfig::new()
        .with_get("leaves/pending", json!([leave_json(50, 3, "PENDING"), leave_json(51, 4, "PENDING")]))
        .with_get("employees/user/21", employee_json(1, "Asha", "Rao", "Human Resources", 20))
        .with_get(
            "employees",
            json!([
                employee_json(3, "Meera", "Iyer", "Engineering", 10),
                employee_json(4, "Ravi", "Kumar", "Finance & Accounting", 8)
            ]),
        )
        .with_json(Method::Patch, "leaves/51/status", 200, leave_json(51, 4, "APPROVED"))
        .build();
    let (mut app, http) = TestAppBuilder::new().role(Role::Admin).http(http).build().await;
    app.navigate(Route::LeaveApproval);
    settle(&mut app).await;

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('a'));
    pump(&mut app).await;

    let patches = http.requests_with(Method::Patch);
    assert_eq!(patches.len(), 1);
    assert!(patches[0].url.contains("leaves/51/status"));
    assert!(patches[0].url.contains("status=APPROVED"));
    assert!(patches[0].url.contains("processedBy=1"));
    match &app.screen.view {
        View::LeaveApproval(view) => {
            assert_eq!(view.list.items.len(), 1);
            assert_eq!(view.names.get(&3).map(String::as_str), Some("Meera Iyer"));
        }
        other => panic!("unexpected view {:?}", other),
    }
    assert_eq!(app.alert.as_ref().unwrap().message, "Leave request approved");
}
