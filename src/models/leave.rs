use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Identified;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveType {
    Sick,
    #[default]
    Casual,
    Paid,
    Unpaid,
    #[serde(other)]
    Unknown,
}

impl LeaveType {
    /// Types offered by the request form, in display order.
    pub const SELECTABLE: [LeaveType; 4] = [
        LeaveType::Sick,
        LeaveType::Casual,
        LeaveType::Paid,
        LeaveType::Unpaid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "SICK",
            LeaveType::Casual => "CASUAL",
            LeaveType::Paid => "PAID",
            LeaveType::Unpaid => "UNPAID",
            LeaveType::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl LeaveStatus {
    pub const FILTERABLE: [LeaveStatus; 3] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
            LeaveStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub leave_id: i64,
    pub employee_id: i64,
    pub employee_name: Option<String>,
    #[serde(default)]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub applied_date: Option<NaiveDateTime>,
    pub processed_date: Option<NaiveDateTime>,
    pub processed_by: Option<i64>,
    pub ai_message: Option<String>,
}

impl Identified for LeaveRequest {
    fn id(&self) -> i64 {
        self.leave_id
    }
}

/// Body of `POST /leaves`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveRequest {
    pub employee_id: i64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_request_parses() {
        let json = r#"{
            "leaveId": 31,
            "employeeId": 7,
            "leaveType": "SICK",
            "startDate": "2024-03-04",
            "endDate": "2024-03-06",
            "reason": "Flu",
            "status": "PENDING",
            "appliedDate": "2024-03-01T09:30:00"
        }"#;
        let leave: LeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(leave.leave_type, LeaveType::Sick);
        assert_eq!(leave.status, LeaveStatus::Pending);
        assert!(leave.applied_date.is_some());
        assert!(leave.processed_by.is_none());
    }

    #[test]
    fn test_unknown_status_and_type() {
        let json = r#"{
            "leaveId": 1, "employeeId": 1,
            "leaveType": "SABBATICAL",
            "startDate": "2024-03-04", "endDate": "2024-03-04",
            "status": "ESCALATED"
        }"#;
        let leave: LeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(leave.leave_type, LeaveType::Unknown);
        assert_eq!(leave.status, LeaveStatus::Unknown);
    }

    #[test]
    fn test_new_leave_request_wire_shape() {
        let body = NewLeaveRequest {
            employee_id: 7,
            leave_type: LeaveType::Casual,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            reason: "Family event".into(),
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["leaveType"], "CASUAL");
        assert_eq!(value["startDate"], "2024-05-01");
        assert_eq!(value["employeeId"], 7);
    }
}
