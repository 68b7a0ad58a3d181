use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

/// A single employee's time-off application and its review outcome.
///
/// Owner fields (`employee_id`, `employee_name`, `employee_email`) are
/// denormalized at creation time and never mutated afterwards. The manager
/// comment is absent until an approve/reject transition sets it; an empty
/// comment is stored as `None`, never `Some("")`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: Uuid,
    #[schema(example = "emp-1")]
    pub employee_id: String,
    #[schema(example = "Jane Doe")]
    pub employee_name: String,
    #[schema(example = "jane@company.com")]
    pub employee_email: String,
    pub leave_type: LeaveType,
    #[schema(example = "Family vacation abroad")]
    pub reason: String,
    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-09", value_type = String, format = "date")]
    pub end_date: NaiveDate,
    /// Chargeable business days in the inclusive date range
    #[schema(example = 5)]
    pub days: i32,
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn is_owned_by(&self, employee_id: &str) -> bool {
        self.employee_id == employee_id
    }

    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeave {
    pub leave_type: LeaveType,
    #[schema(example = "Family vacation abroad")]
    pub reason: String,
    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-09", value_type = String, format = "date")]
    pub end_date: NaiveDate,
}

/// Partial update; unset fields keep their prior values.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeave {
    pub leave_type: Option<LeaveType>,
    pub reason: Option<String>,
    #[schema(value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date")]
    pub end_date: Option<NaiveDate>,
}

impl UpdateLeave {
    pub fn is_empty(&self) -> bool {
        self.leave_type.is_none()
            && self.reason.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ApproveLeave {
    /// Optional; an empty comment is stored as absent
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RejectLeave {
    /// Required, at least 10 characters after trimming
    pub comment: String,
}
