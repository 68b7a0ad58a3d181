use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, prelude::FromRow};
use uuid::Uuid;

use crate::error::LeaveError;
use crate::model::leave::{LeaveRequest, LeaveStatus, LeaveType};
use crate::store::LeaveStore;

/// MySQL-backed leave store. Ids are stored as CHAR(36), enums as text.
#[derive(Clone)]
pub struct MySqlLeaveStore {
    pool: MySqlPool,
}

impl MySqlLeaveStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LeaveRow {
    id: String,
    employee_id: String,
    employee_name: String,
    employee_email: String,
    leave_type: String,
    reason: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: i32,
    status: String,
    manager_comment: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<LeaveRow> for LeaveRequest {
    type Error = LeaveError;

    fn try_from(row: LeaveRow) -> Result<Self, Self::Error> {
        Ok(LeaveRequest {
            id: Uuid::parse_str(&row.id).map_err(|e| LeaveError::infra("decode leave row", e))?,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            employee_email: row.employee_email,
            leave_type: LeaveType::from_str(&row.leave_type)
                .map_err(|e| LeaveError::infra("decode leave row", e))?,
            reason: row.reason,
            start_date: row.start_date,
            end_date: row.end_date,
            days: row.days,
            status: LeaveStatus::from_str(&row.status)
                .map_err(|e| LeaveError::infra("decode leave row", e))?,
            manager_comment: row.manager_comment,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_COLUMNS: &str = "id, employee_id, employee_name, employee_email, leave_type, reason, \
     start_date, end_date, days, status, manager_comment, created_at, updated_at";

impl LeaveStore for MySqlLeaveStore {
    async fn create(&self, leave: &LeaveRequest) -> Result<(), LeaveError> {
        sqlx::query(
            r#"
            INSERT INTO leave_requests
                (id, employee_id, employee_name, employee_email, leave_type, reason,
                 start_date, end_date, days, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(leave.id.to_string())
        .bind(&leave.employee_id)
        .bind(&leave.employee_name)
        .bind(&leave.employee_email)
        .bind(leave.leave_type.to_string())
        .bind(&leave.reason)
        .bind(leave.start_date)
        .bind(leave.end_date)
        .bind(leave.days)
        .bind(leave.status.to_string())
        .bind(leave.created_at)
        .bind(leave.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id = %leave.id, "Failed to insert leave request");
            LeaveError::infra("create leave request", e)
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<LeaveRequest, LeaveError> {
        let row = sqlx::query_as::<_, LeaveRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM leave_requests WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id = %id, "Failed to fetch leave request");
            LeaveError::infra("find leave request by id", e)
        })?;

        match row {
            Some(row) => row.try_into(),
            None => Err(LeaveError::NotFound),
        }
    }

    async fn find_by_owner(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, LeaveError> {
        let rows = sqlx::query_as::<_, LeaveRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM leave_requests WHERE employee_id = ? \
             ORDER BY created_at DESC"
        ))
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, employee_id, "Failed to fetch leave requests by owner");
            LeaveError::infra("find leave requests by owner", e)
        })?;

        rows.into_iter().map(LeaveRequest::try_from).collect()
    }

    async fn find_pending(&self) -> Result<Vec<LeaveRequest>, LeaveError> {
        let rows = sqlx::query_as::<_, LeaveRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM leave_requests WHERE status = ? \
             ORDER BY created_at ASC"
        ))
        .bind(LeaveStatus::Pending.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch pending leave requests");
            LeaveError::infra("find pending leave requests", e)
        })?;

        rows.into_iter().map(LeaveRequest::try_from).collect()
    }

    async fn update(&self, leave: &LeaveRequest) -> Result<(), LeaveError> {
        let result = sqlx::query(
            r#"
            UPDATE leave_requests
            SET leave_type = ?, reason = ?, start_date = ?, end_date = ?,
                days = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(leave.leave_type.to_string())
        .bind(&leave.reason)
        .bind(leave.start_date)
        .bind(leave.end_date)
        .bind(leave.days)
        .bind(leave.updated_at)
        .bind(leave.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id = %leave.id, "Failed to update leave request");
            LeaveError::infra("update leave request", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(LeaveError::NotFound);
        }

        Ok(())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: LeaveStatus,
        comment: Option<&str>,
    ) -> Result<(), LeaveError> {
        sqlx::query(
            r#"
            UPDATE leave_requests
            SET status = ?, manager_comment = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(status.to_string())
        .bind(comment)
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id = %id, status = %status, "Failed to update leave status");
            LeaveError::infra("update leave request status", e)
        })?;

        Ok(())
    }
}
