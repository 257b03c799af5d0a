//! Wire models mirrored from the payroll service.
//!
//! Every type here is a plain record. The backend speaks camelCase JSON and
//! upper-case enum strings; unknown enum strings fall back to an `Unknown`
//! variant so one odd row never fails a whole list.

mod auth;
mod department;
mod employee;
mod job_role;
mod leave;
mod payroll;
mod user;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use department::{Department, DepartmentPayload};
pub use employee::{Employee, EmployeePayload, JobRoleSummary};
pub use job_role::{JobRole, JobRolePayload};
pub use leave::{LeaveRequest, LeaveStatus, LeaveType, NewLeaveRequest};
pub use payroll::{NewPayroll, Payroll, PayrollStatus};
pub use user::{Role, SessionUser};

use serde::Deserializer;

/// Records that carry a server-assigned identifier.
///
/// Used by list screens to prune a row locally after a delete.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Deserialize a monetary amount sent either as a JSON number or a string.
///
/// The backend serializes `BigDecimal` as a number, but older builds and
/// some proxies send it quoted.
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or numeric string")
        }

        fn visit_f64<E>(self, value: f64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_u64<E>(self, value: u64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_str<E>(self, value: &str) -> Result<f64, E>
        where
            E: de::Error,
        {
            value.trim().parse::<f64>().map_err(de::Error::custom)
        }

        fn visit_unit<E>(self) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(0.0)
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "deserialize_amount")]
        amount: f64,
    }

    #[test]
    fn test_amount_from_number() {
        let w: Wrapper = serde_json::from_str(r#"{"amount": 52000.5}"#).unwrap();
        assert_eq!(w.amount, 52000.5);
    }

    #[test]
    fn test_amount_from_integer() {
        let w: Wrapper = serde_json::from_str(r#"{"amount": 40000}"#).unwrap();
        assert_eq!(w.amount, 40000.0);
    }

    #[test]
    fn test_amount_from_string() {
        let w: Wrapper = serde_json::from_str(r#"{"amount": "1250.75"}"#).unwrap();
        assert_eq!(w.amount, 1250.75);
    }

    #[test]
    fn test_amount_from_null() {
        let w: Wrapper = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        assert_eq!(w.amount, 0.0);
    }

    #[test]
    fn test_amount_rejects_garbage() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"amount": "lots"}"#);
        assert!(result.is_err());
    }
}
