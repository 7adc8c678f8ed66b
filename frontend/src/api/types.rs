use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::utils::time::deserialize_calendar_date;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrUser {
    pub id: i64,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl HrUser {
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .or_else(|| self.username.clone())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| format!("HR #{}", self.id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterHrRequest {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: String,
    pub designation: String,
    pub salary: f64,
    pub is_working: bool,
    pub age: u32,
    pub gender: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Pending,
    Vacation,
    #[serde(other)]
    Unknown,
}

impl EmployeeStatus {
    pub fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
            EmployeeStatus::Pending => "Pending",
            EmployeeStatus::Vacation => "Vacation",
            EmployeeStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "bg-green-100 text-green-800",
            EmployeeStatus::Inactive => "bg-red-100 text-red-800",
            EmployeeStatus::Pending => "bg-yellow-100 text-yellow-800",
            EmployeeStatus::Vacation => "bg-blue-100 text-blue-800",
            EmployeeStatus::Unknown => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub age: u32,
    pub status: EmployeeStatus,
    pub email: String,
    pub gender: String,
    pub phone_number: String,
    pub salary: Option<f64>,
    pub department: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    #[serde(default)]
    pub emp_full_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
}

/// Partial attendance update. `Some(None)` clears a time on the server,
/// `None` leaves the field out of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<Option<String>>,
}

impl AttendanceUpdate {
    pub fn status(status: AttendanceStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn check_in(value: &str) -> Self {
        Self {
            check_in_time: Some(non_blank(value)),
            ..Self::default()
        }
    }

    pub fn check_out(value: &str) -> Self {
        Self {
            check_out_time: Some(non_blank(value)),
            ..Self::default()
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAttendanceForAll {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    pub id: i64,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub task_title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub assigned_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    #[serde(default)]
    pub emp_full_name: Option<String>,
    #[serde(default)]
    pub hr_full_name: Option<String>,
    #[serde(default)]
    pub employee: Option<PersonRef>,
    #[serde(default)]
    pub assigned_by: Option<PersonRef>,
}

impl Task {
    pub fn assignee_name(&self) -> String {
        self.emp_full_name
            .clone()
            .or_else(|| self.employee.as_ref().map(|e| e.full_name.clone()))
            .unwrap_or_else(|| "-".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub task_title: String,
    pub description: String,
    pub assigned_date: NaiveDate,
    pub due_date: NaiveDate,
    pub employee_id: i64,
    pub hr_id: i64,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub task_title: String,
    pub description: String,
    pub assigned_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

pub const NO_RESPONSE_MESSAGE: &str = "No response from server. Please check your connection.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNAUTHORIZED".to_string(),
            details: None,
        }
    }

    pub fn server(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// Builds the error for a non-2xx response from its raw body.
    ///
    /// `message` wins over `error`; an array `message` is joined with ", ".
    /// Anything else, including an empty or non-JSON body, yields `fallback`.
    pub fn from_error_body(status: u16, body: &str, fallback: &str) -> Self {
        let payload = serde_json::from_str::<Value>(body).ok();
        let mut error = match payload.as_ref().and_then(extract_message) {
            Some(ExtractedMessage::Joined(parts)) => {
                let mut error = Self::validation(parts.join(", "));
                error.details = Some(json!({ "errors": parts }));
                error
            }
            Some(ExtractedMessage::Single(message)) => Self::server(status, message),
            None => Self::server(status, fallback),
        };
        if status == 401 {
            error.code = "UNAUTHORIZED".to_string();
        }
        error
    }
}

enum ExtractedMessage {
    Single(String),
    Joined(Vec<String>),
}

fn extract_message(payload: &Value) -> Option<ExtractedMessage> {
    match payload.get("message") {
        Some(Value::Array(items)) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::to_string)
                .collect();
            if !parts.is_empty() {
                return Some(ExtractedMessage::Joined(parts));
            }
        }
        Some(Value::String(message)) if !message.trim().is_empty() => {
            return Some(ExtractedMessage::Single(message.clone()));
        }
        _ => {}
    }
    payload
        .get("error")
        .and_then(|v| v.as_str())
        .filter(|v| !v.trim().is_empty())
        .map(|v| ExtractedMessage::Single(v.to_string()))
}
