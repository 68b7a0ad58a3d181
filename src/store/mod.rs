pub mod memory;
pub mod sql;

use uuid::Uuid;

use crate::error::LeaveError;
use crate::model::leave::{LeaveRequest, LeaveStatus};

/// Keyed persistence for leave requests.
///
/// Listing order is part of the contract: `find_by_owner` returns
/// most-recent-created first, `find_pending` oldest first (FIFO review
/// queue). Store failures surface as `LeaveError::Infrastructure` wrapped
/// with operation context; a missing record is `LeaveError::NotFound`.
#[allow(async_fn_in_trait)]
pub trait LeaveStore {
    async fn create(&self, leave: &LeaveRequest) -> Result<(), LeaveError>;

    async fn find_by_id(&self, id: Uuid) -> Result<LeaveRequest, LeaveError>;

    async fn find_by_owner(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, LeaveError>;

    async fn find_pending(&self) -> Result<Vec<LeaveRequest>, LeaveError>;

    async fn update(&self, leave: &LeaveRequest) -> Result<(), LeaveError>;

    async fn update_status(
        &self,
        id: Uuid,
        status: LeaveStatus,
        comment: Option<&str>,
    ) -> Result<(), LeaveError>;
}
