use chrono::Utc;
use uuid::Uuid;

use crate::calendar::business_days_between;
use crate::error::LeaveError;
use crate::model::leave::{CreateLeave, LeaveRequest, LeaveStatus, UpdateLeave};
use crate::store::LeaveStore;

const MIN_REASON_LEN: usize = 10;
const MIN_REJECT_COMMENT_LEN: usize = 10;

/// Lifecycle engine for leave requests.
///
/// Enforces the state machine (`pending` → `approved` | `rejected` |
/// `cancelled`, all terminal) and the field-update rules. For owner-gated
/// operations, ownership is checked before status: a non-owner gets
/// `Unauthorized` even on a terminal record.
#[derive(Clone)]
pub struct LeaveService<S> {
    store: S,
}

impl<S: LeaveStore> LeaveService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        req: CreateLeave,
        employee_id: &str,
        employee_name: &str,
        employee_email: &str,
    ) -> Result<LeaveRequest, LeaveError> {
        if req.reason.trim().len() < MIN_REASON_LEN {
            return Err(LeaveError::invalid(format!(
                "reason must be at least {MIN_REASON_LEN} characters"
            )));
        }

        let days = business_days_between(req.start_date, req.end_date);
        if days < 1 {
            return Err(LeaveError::invalid("invalid date range"));
        }

        let now = Utc::now();
        let leave = LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            employee_email: employee_email.to_string(),
            leave_type: req.leave_type,
            reason: req.reason,
            start_date: req.start_date,
            end_date: req.end_date,
            days,
            status: LeaveStatus::Pending,
            manager_comment: None,
            created_at: now,
            updated_at: now,
        };

        self.store.create(&leave).await?;

        Ok(leave)
    }

    pub async fn get(&self, id: Uuid) -> Result<LeaveRequest, LeaveError> {
        self.store.find_by_id(id).await
    }

    pub async fn list_by_owner(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, LeaveError> {
        self.store.find_by_owner(employee_id).await
    }

    pub async fn list_pending(&self) -> Result<Vec<LeaveRequest>, LeaveError> {
        self.store.find_pending().await
    }

    /// Updates a pending request's editable fields. Supplying no fields is
    /// a no-op returning the unchanged record, not an error.
    pub async fn update(
        &self,
        id: Uuid,
        employee_id: &str,
        req: UpdateLeave,
    ) -> Result<LeaveRequest, LeaveError> {
        let existing = self.store.find_by_id(id).await?;

        if !existing.is_owned_by(employee_id) {
            return Err(LeaveError::Unauthorized);
        }

        if !existing.is_pending() {
            return Err(LeaveError::InvalidStatusTransition(existing.status));
        }

        if req.is_empty() {
            return Ok(existing);
        }

        let dates_changed = req.start_date.is_some() || req.end_date.is_some();

        let mut updated = existing;
        if let Some(leave_type) = req.leave_type {
            updated.leave_type = leave_type;
        }
        if let Some(reason) = req.reason {
            if reason.trim().len() < MIN_REASON_LEN {
                return Err(LeaveError::invalid(format!(
                    "reason must be at least {MIN_REASON_LEN} characters"
                )));
            }
            updated.reason = reason;
        }
        if let Some(start_date) = req.start_date {
            updated.start_date = start_date;
        }
        if let Some(end_date) = req.end_date {
            updated.end_date = end_date;
        }

        if dates_changed {
            updated.days = business_days_between(updated.start_date, updated.end_date);
            if updated.days < 1 {
                return Err(LeaveError::invalid("invalid date range"));
            }
        }

        updated.updated_at = Utc::now();
        self.store.update(&updated).await?;

        Ok(updated)
    }

    pub async fn cancel(&self, id: Uuid, employee_id: &str) -> Result<(), LeaveError> {
        let existing = self.store.find_by_id(id).await?;

        if !existing.is_owned_by(employee_id) {
            return Err(LeaveError::Unauthorized);
        }

        if !existing.is_pending() {
            return Err(LeaveError::InvalidStatusTransition(existing.status));
        }

        // A cancellation never sets a comment
        self.store
            .update_status(id, LeaveStatus::Cancelled, None)
            .await
    }

    /// Approves a pending request. The comment is optional; an empty or
    /// whitespace-only comment is stored as absent.
    pub async fn approve(&self, id: Uuid, comment: &str) -> Result<LeaveRequest, LeaveError> {
        let existing = self.store.find_by_id(id).await?;

        if !existing.is_pending() {
            return Err(LeaveError::InvalidStatusTransition(existing.status));
        }

        let comment = comment.trim();
        let comment = (!comment.is_empty()).then_some(comment);

        self.store
            .update_status(id, LeaveStatus::Approved, comment)
            .await?;

        // Re-read so store-side defaults (timestamps) show in the result
        self.store.find_by_id(id).await
    }

    /// Rejects a pending request. The comment is mandatory and must be at
    /// least 10 characters after trimming.
    pub async fn reject(&self, id: Uuid, comment: &str) -> Result<LeaveRequest, LeaveError> {
        let comment = comment.trim();
        if comment.len() < MIN_REJECT_COMMENT_LEN {
            return Err(LeaveError::invalid(format!(
                "comment must be at least {MIN_REJECT_COMMENT_LEN} characters"
            )));
        }

        let existing = self.store.find_by_id(id).await?;

        if !existing.is_pending() {
            return Err(LeaveError::InvalidStatusTransition(existing.status));
        }

        self.store
            .update_status(id, LeaveStatus::Rejected, Some(comment))
            .await?;

        self.store.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::leave::LeaveType;
    use crate::store::memory::MemoryLeaveStore;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn service() -> LeaveService<MemoryLeaveStore> {
        LeaveService::new(MemoryLeaveStore::new())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Monday through Friday, a single full work week
    fn week_payload() -> CreateLeave {
        CreateLeave {
            leave_type: LeaveType::Annual,
            reason: "Family vacation abroad".to_string(),
            start_date: date(2026, 1, 5),
            end_date: date(2026, 1, 9),
        }
    }

    async fn create_for(svc: &LeaveService<MemoryLeaveStore>, employee_id: &str) -> LeaveRequest {
        svc.create(week_payload(), employee_id, "Jane Doe", "jane@company.com")
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn create_sets_pending_with_computed_days() {
        let svc = service();
        let leave = create_for(&svc, "emp-1").await;

        assert_eq!(leave.status, LeaveStatus::Pending);
        assert_eq!(leave.days, 5);
        assert!(leave.manager_comment.is_none());
        assert!(leave.is_owned_by("emp-1"));
        assert!(!leave.is_owned_by("emp-2"));
    }

    #[actix_web::test]
    async fn create_rejects_weekend_only_range() {
        let svc = service();
        let mut req = week_payload();
        req.start_date = date(2026, 1, 10); // Saturday
        req.end_date = date(2026, 1, 11); // Sunday

        let err = svc
            .create(req, "emp-1", "Jane Doe", "jane@company.com")
            .await
            .unwrap_err();
        assert!(matches!(err, LeaveError::InvalidRequest(_)));
    }

    #[actix_web::test]
    async fn create_rejects_inverted_range() {
        let svc = service();
        let mut req = week_payload();
        req.start_date = date(2026, 1, 9);
        req.end_date = date(2026, 1, 5);

        let err = svc
            .create(req, "emp-1", "Jane Doe", "jane@company.com")
            .await
            .unwrap_err();
        assert!(matches!(err, LeaveError::InvalidRequest(_)));
    }

    #[actix_web::test]
    async fn create_rejects_short_reason() {
        let svc = service();
        let mut req = week_payload();
        req.reason = "short".to_string();

        let err = svc
            .create(req, "emp-1", "Jane Doe", "jane@company.com")
            .await
            .unwrap_err();
        assert!(matches!(err, LeaveError::InvalidRequest(_)));
    }

    #[actix_web::test]
    async fn get_missing_is_not_found() {
        let svc = service();
        let err = svc.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, LeaveError::NotFound));
    }

    #[actix_web::test]
    async fn update_recomputes_days_when_dates_change() {
        let svc = service();
        let leave = create_for(&svc, "emp-1").await;

        let updated = svc
            .update(
                leave.id,
                "emp-1",
                UpdateLeave {
                    end_date: Some(date(2026, 1, 6)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.days, 2);
        assert_eq!(updated.status, LeaveStatus::Pending);
        assert_eq!(updated.employee_id, "emp-1");
        assert_eq!(updated.reason, leave.reason);
    }

    #[actix_web::test]
    async fn update_rejects_weekend_only_range() {
        let svc = service();
        let leave = create_for(&svc, "emp-1").await;

        let err = svc
            .update(
                leave.id,
                "emp-1",
                UpdateLeave {
                    start_date: Some(date(2026, 1, 10)),
                    end_date: Some(date(2026, 1, 11)),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, LeaveError::InvalidRequest(_)));
    }

    #[actix_web::test]
    async fn update_without_fields_is_a_noop() {
        let svc = service();
        let leave = create_for(&svc, "emp-1").await;

        let unchanged = svc
            .update(leave.id, "emp-1", UpdateLeave::default())
            .await
            .unwrap();

        assert_eq!(unchanged.updated_at, leave.updated_at);
        assert_eq!(unchanged.status, LeaveStatus::Pending);
    }

    #[actix_web::test]
    async fn update_by_non_owner_is_unauthorized() {
        let svc = service();
        let leave = create_for(&svc, "emp-1").await;

        let err = svc
            .update(leave.id, "emp-2", UpdateLeave::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LeaveError::Unauthorized));
    }

    #[actix_web::test]
    async fn ownership_is_checked_before_status() {
        let svc = service();
        let leave = create_for(&svc, "emp-1").await;
        svc.approve(leave.id, "").await.unwrap();

        // A non-owner on a terminal record gets Unauthorized, not a
        // status-transition error
        let err = svc
            .update(leave.id, "emp-2", UpdateLeave::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LeaveError::Unauthorized));

        let err = svc.cancel(leave.id, "emp-2").await.unwrap_err();
        assert!(matches!(err, LeaveError::Unauthorized));
    }

    #[actix_web::test]
    async fn cancel_marks_cancelled_without_comment() {
        let svc = service();
        let leave = create_for(&svc, "emp-1").await;

        svc.cancel(leave.id, "emp-1").await.unwrap();

        let cancelled = svc.get(leave.id).await.unwrap();
        assert_eq!(cancelled.status, LeaveStatus::Cancelled);
        assert!(cancelled.manager_comment.is_none());
    }

    #[actix_web::test]
    async fn approve_stores_comment_and_is_terminal() {
        let svc = service();
        let leave = create_for(&svc, "emp-1").await;

        let approved = svc.approve(leave.id, "Approved!").await.unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.manager_comment.as_deref(), Some("Approved!"));

        let err = svc.approve(leave.id, "again").await.unwrap_err();
        assert!(matches!(err, LeaveError::InvalidStatusTransition(_)));
    }

    #[actix_web::test]
    async fn approve_with_empty_comment_stores_absent() {
        let svc = service();
        let leave = create_for(&svc, "emp-1").await;

        let approved = svc.approve(leave.id, "   ").await.unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert!(approved.manager_comment.is_none());
    }

    #[actix_web::test]
    async fn reject_requires_comment_of_ten_chars_after_trim() {
        let svc = service();
        let leave = create_for(&svc, "emp-1").await;

        let err = svc.reject(leave.id, "  too short  ").await.unwrap_err();
        assert!(matches!(err, LeaveError::InvalidRequest(_)));

        let err = svc.reject(leave.id, "").await.unwrap_err();
        assert!(matches!(err, LeaveError::InvalidRequest(_)));

        let rejected = svc
            .reject(leave.id, "  Insufficient coverage that week  ")
            .await
            .unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(
            rejected.manager_comment.as_deref(),
            Some("Insufficient coverage that week")
        );
    }

    #[actix_web::test]
    async fn terminal_states_admit_no_transition() {
        let svc = service();

        let approved = create_for(&svc, "emp-1").await;
        svc.approve(approved.id, "").await.unwrap();
        let rejected = create_for(&svc, "emp-1").await;
        svc.reject(rejected.id, "Not enough notice given").await.unwrap();
        let cancelled = create_for(&svc, "emp-1").await;
        svc.cancel(cancelled.id, "emp-1").await.unwrap();

        for id in [approved.id, rejected.id, cancelled.id] {
            let err = svc
                .update(id, "emp-1", UpdateLeave::default())
                .await
                .unwrap_err();
            assert!(matches!(err, LeaveError::InvalidStatusTransition(_)));

            let err = svc.cancel(id, "emp-1").await.unwrap_err();
            assert!(matches!(err, LeaveError::InvalidStatusTransition(_)));

            let err = svc.approve(id, "").await.unwrap_err();
            assert!(matches!(err, LeaveError::InvalidStatusTransition(_)));

            let err = svc.reject(id, "Not enough notice given").await.unwrap_err();
            assert!(matches!(err, LeaveError::InvalidStatusTransition(_)));
        }
    }

    #[actix_web::test]
    async fn list_by_owner_is_newest_first() {
        let svc = service();
        let first = create_for(&svc, "emp-1").await;
        actix_web::rt::time::sleep(Duration::from_millis(5)).await;
        let second = create_for(&svc, "emp-1").await;
        create_for(&svc, "emp-2").await;

        let mine = svc.list_by_owner("emp-1").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].id, second.id);
        assert_eq!(mine[1].id, first.id);
    }

    #[actix_web::test]
    async fn pending_queue_is_fifo_and_excludes_settled() {
        let svc = service();
        let first = create_for(&svc, "emp-1").await;
        actix_web::rt::time::sleep(Duration::from_millis(5)).await;
        let second = create_for(&svc, "emp-2").await;
        actix_web::rt::time::sleep(Duration::from_millis(5)).await;
        let third = create_for(&svc, "emp-3").await;

        svc.approve(second.id, "").await.unwrap();

        let pending = svc.list_pending().await.unwrap();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].id, first.id);
        assert_eq!(pending[1].id, third.id);
    }
}
