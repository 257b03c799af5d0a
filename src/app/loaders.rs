//! Screen loads.
//!
//! [`load`] fetches everything a route needs in one pass. Collections a
//! screen cannot work without are fetched with `try_join!`; decorations
//! such as the name roster degrade to empty on failure.

use tokio::try_join;
use tracing::warn;

use super::messages::Loaded;
use crate::error::{ApiError, ClientResult};
use crate::models::Employee;
use crate::routes::Route;
use crate::services::Services;
use crate::session::Session;

/// Leaves and payrolls listed on an employee profile.
pub const PROFILE_HISTORY_LIMIT: usize = 5;

/// Turn a 404 into `None`.
fn found<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Keep the value or log and fall back to empty.
fn or_empty<T>(result: Result<Vec<T>, ApiError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!("Could not load {}: {}", what, e);
        Vec::new()
    })
}

async fn own_employee(services: &Services, session: &Session) -> Result<Option<Employee>, ApiError> {
    found(services.employees.get_by_user_id(session.user.id).await)
}

/// Whether `route` fetches anything on entry.
pub fn has_data(route: Route) -> bool {
    !matches!(
        route,
        Route::Login | Route::Register | Route::DepartmentNew | Route::JobRoleNew
    )
}

/// Fetch the data for `route`. `None` for screens with nothing to load.
pub async fn load(
    route: Route,
    services: &Services,
    session: &Session,
) -> ClientResult<Option<Loaded>> {
    let caps = session.capabilities;
    let loaded = match route {
        Route::Login | Route::Register => return Ok(None),

        Route::Dashboard => {
            let (employees, pending_leaves, payrolls) = try_join!(
                services.employees.get_all(),
                services.leaves.get_pending(),
                services.payroll.get_all(),
            )?;
            Loaded::AdminDashboard {
                employees,
                pending_leaves,
                payrolls,
            }
        }

        Route::EmployeeDashboard => match own_employee(services, session).await? {
            Some(employee) => {
                let (leaves, payrolls) = try_join!(
                    services.leaves.get_by_employee(employee.employee_id),
                    services.payroll.get_by_employee(employee.employee_id),
                )?;
                Loaded::EmployeeDashboard {
                    employee: Some(employee),
                    leaves,
                    payrolls,
                }
            }
            None => Loaded::EmployeeDashboard {
                employee: None,
                leaves: Vec::new(),
                payrolls: Vec::new(),
            },
        },

        Route::Employees => Loaded::Employees(services.employees.get_all().await?),

        Route::EmployeeNew => {
            let (departments, job_roles) =
                try_join!(services.departments.get_all(), services.job_roles.get_all())?;
            Loaded::EmployeeForm {
                departments,
                job_roles,
                employee: None,
            }
        }

        Route::EmployeeEdit(id) => {
            let (departments, job_roles, employee) = try_join!(
                services.departments.get_all(),
                services.job_roles.get_all(),
                async { found(services.employees.get_by_id(id).await) },
            )?;
            Loaded::EmployeeForm {
                departments,
                job_roles,
                employee,
            }
        }

        Route::EmployeeProfile(id) => match found(services.employees.get_by_id(id).await)? {
            Some(employee) => {
                let (leaves, payrolls) = tokio::join!(
                    services.leaves.get_by_employee(id),
                    services.payroll.get_by_employee(id),
                );
                let mut leaves = or_empty(leaves, "profile leaves");
                let mut payrolls = or_empty(payrolls, "profile payrolls");
                leaves.truncate(PROFILE_HISTORY_LIMIT);
                payrolls.truncate(PROFILE_HISTORY_LIMIT);
                Loaded::EmployeeProfile {
                    employee: Some(employee),
                    leaves,
                    payrolls,
                }
            }
            None => Loaded::EmployeeProfile {
                employee: None,
                leaves: Vec::new(),
                payrolls: Vec::new(),
            },
        },

        Route::Departments => Loaded::Departments(services.departments.get_all().await?),
        Route::DepartmentNew => return Ok(None),
        Route::DepartmentEdit(id) => {
            Loaded::Department(found(services.departments.get_by_id(id).await)?)
        }

        Route::JobRoles => Loaded::JobRoles(services.job_roles.get_all().await?),
        Route::JobRoleNew => return Ok(None),
        Route::JobRoleEdit(id) => Loaded::JobRole(found(services.job_roles.get_by_id(id).await)?),

        Route::Leaves if caps.view_all_leaves => {
            let (leaves, roster) =
                tokio::join!(services.leaves.get_all(), services.employees.get_all());
            Loaded::Leaves {
                leaves: leaves?,
                roster: or_empty(roster, "employee roster"),
            }
        }
        Route::Leaves => {
            let leaves = match own_employee(services, session).await? {
                Some(employee) => services.leaves.get_by_employee(employee.employee_id).await?,
                None => Vec::new(),
            };
            Loaded::Leaves {
                leaves,
                roster: Vec::new(),
            }
        }

        Route::LeaveNew if caps.apply_leave_for_others => Loaded::LeaveForm {
            own_employee: None,
            roster: services.employees.get_all().await?,
        },
        Route::LeaveNew => Loaded::LeaveForm {
            own_employee: own_employee(services, session).await?,
            roster: Vec::new(),
        },

        Route::LeaveApproval => {
            let (pending, approver, roster) = try_join!(
                services.leaves.get_pending(),
                own_employee(services, session),
                async {
                    Ok::<_, ApiError>(or_empty(
                        services.employees.get_all().await,
                        "employee roster",
                    ))
                },
            )?;
            Loaded::LeaveApproval {
                pending,
                approver,
                roster,
            }
        }

        Route::Payroll if caps.view_all_payrolls => {
            let (payrolls, roster) =
                tokio::join!(services.payroll.get_all(), services.employees.get_all());
            Loaded::Payrolls {
                payrolls: payrolls?,
                roster: or_empty(roster, "employee roster"),
            }
        }
        Route::Payroll => {
            let payrolls = match own_employee(services, session).await? {
                Some(employee) => {
                    services
                        .payroll
                        .get_by_employee(employee.employee_id)
                        .await?
                }
                None => Vec::new(),
            };
            Loaded::Payrolls {
                payrolls,
                roster: Vec::new(),
            }
        }

        Route::PayrollNew => Loaded::PayrollForm {
            employees: services.employees.get_all().await?,
        },

        Route::PayrollDetails(id) => match found(services.payroll.get_by_id(id).await)? {
            Some(payroll) => {
                let employee = found(services.employees.get_by_id(payroll.employee_id).await)
                    .unwrap_or_else(|e| {
                        warn!("Could not load payroll employee: {}", e);
                        None
                    });
                Loaded::PayrollDetails {
                    payroll: Some(payroll),
                    employee,
                }
            }
            None => Loaded::PayrollDetails {
                payroll: None,
                employee: None,
            },
        },
    };
    Ok(Some(loaded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::api::ApiGateway;
    use crate::models::{Role, SessionUser};
    use crate::session::Capabilities;
    use crate::traits::Method;
    use serde_json::json;
    use std::sync::Arc;

    const BASE: &str = "http://api.test/v1";

    fn setup() -> (MockHttpClient, Services) {
        let http = MockHttpClient::new();
        let gateway = Arc::new(ApiGateway::new(Arc::new(http.clone()), BASE));
        (http, Services::new(gateway))
    }

    fn session(role: Role) -> Session {
        Session {
            token: "opaque".to_string(),
            user: SessionUser {
                id: 21,
                username: "meera".to_string(),
                email: "meera@example.com".to_string(),
                role,
            },
            capabilities: Capabilities::for_role(role),
        }
    }

    fn employee_json(id: i64) -> serde_json::Value {
        json!({"employeeId": id, "userId": 21, "firstName": "Meera", "lastName": "Iyer", "leaveBalance": 12})
    }

    fn url(path: &str) -> String {
        format!("{}/{}", BASE, path)
    }

    #[tokio::test]
    async fn test_admin_dashboard_fetches_three_collections() {
        let (http, services) = setup();
        http.set_response(Method::Get, &url("employees"), MockResponse::json(200, json!([employee_json(7)])));
        http.set_response(Method::Get, &url("leaves/pending"), MockResponse::json(200, json!([])));
        http.set_response(Method::Get, &url("payroll"), MockResponse::json(200, json!([])));

        let loaded = load(Route::Dashboard, &services, &session(Role::Admin))
            .await
            .unwrap();
        match loaded {
            Some(Loaded::AdminDashboard { employees, .. }) => assert_eq!(employees.len(), 1),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(http.get_requests().len(), 3);
    }

    #[tokio::test]
    async fn test_joint_fetch_fails_as_a_whole() {
        let (http, services) = setup();
        http.set_response(Method::Get, &url("employees"), MockResponse::json(200, json!([])));
        http.set_response(Method::Get, &url("leaves/pending"), MockResponse::json(500, json!({"message": "boom"})));
        http.set_response(Method::Get, &url("payroll"), MockResponse::json(200, json!([])));

        let err = load(Route::Dashboard, &services, &session(Role::Admin))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "boom");
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_an_error() {
        let (http, services) = setup();
        http.set_response(Method::Get, &url("employees/user/21"), MockResponse::json(404, json!({"message": "Employee not found"})));

        let loaded = load(Route::LeaveNew, &services, &session(Role::Employee))
            .await
            .unwrap();
        match loaded {
            Some(Loaded::LeaveForm { own_employee, roster }) => {
                assert!(own_employee.is_none());
                assert!(roster.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_employee_sees_own_leaves() {
        let (http, services) = setup();
        http.set_response(Method::Get, &url("employees/user/21"), MockResponse::json(200, employee_json(7)));
        http.set_response(Method::Get, &url("leaves/employee/7"), MockResponse::json(200, json!([])));

        load(Route::Leaves, &services, &session(Role::Employee))
            .await
            .unwrap();
        let urls: Vec<String> = http.get_requests().into_iter().map(|r| r.url).collect();
        assert!(urls.contains(&url("leaves/employee/7")));
        assert!(!urls.contains(&url("leaves")));
    }

    #[tokio::test]
    async fn test_roster_failure_degrades() {
        let (http, services) = setup();
        http.set_response(Method::Get, &url("leaves"), MockResponse::json(200, json!([])));
        http.set_response(Method::Get, &url("employees"), MockResponse::json(500, json!({})));

        let loaded = load(Route::Leaves, &services, &session(Role::Admin))
            .await
            .unwrap();
        assert!(matches!(loaded, Some(Loaded::Leaves { roster, .. }) if roster.is_empty()));
    }

    #[tokio::test]
    async fn test_profile_history_truncated_and_tolerant() {
        let (http, services) = setup();
        http.set_response(Method::Get, &url("employees/7"), MockResponse::json(200, employee_json(7)));
        let payrolls: Vec<_> = (1..=8)
            .map(|i| json!({"payrollId": i, "employeeId": 7, "month": i, "year": 2024, "status": "PAID"}))
            .collect();
        http.set_response(Method::Get, &url("payroll/employee/7"), MockResponse::json(200, json!(payrolls)));
        http.set_response(Method::Get, &url("leaves/employee/7"), MockResponse::json(500, json!({})));

        let loaded = load(Route::EmployeeProfile(7), &services, &session(Role::Admin))
            .await
            .unwrap();
        match loaded {
            Some(Loaded::EmployeeProfile { employee, leaves, payrolls }) => {
                assert!(employee.is_some());
                assert!(leaves.is_empty());
                assert_eq!(payrolls.len(), PROFILE_HISTORY_LIMIT);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_payroll_details_not_found() {
        let (http, services) = setup();
        http.set_response(Method::Get, &url("payroll/99"), MockResponse::json(404, json!({})));
        let loaded = load(Route::PayrollDetails(99), &services, &session(Role::Admin))
            .await
            .unwrap();
        assert!(matches!(
            loaded,
            Some(Loaded::PayrollDetails { payroll: None, employee: None })
        ));
    }
}
