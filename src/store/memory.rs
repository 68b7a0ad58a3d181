use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::error::LeaveError;
use crate::model::leave::{LeaveRequest, LeaveStatus};
use crate::store::LeaveStore;

/// In-memory leave store with the same ordering guarantees as the SQL
/// store. Used by the test suite; also works as a standalone backend for
/// demos.
#[derive(Clone, Default)]
pub struct MemoryLeaveStore {
    inner: Arc<Mutex<HashMap<Uuid, LeaveRequest>>>,
}

impl MemoryLeaveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaveStore for MemoryLeaveStore {
    async fn create(&self, leave: &LeaveRequest) -> Result<(), LeaveError> {
        let mut leaves = self.inner.lock().unwrap();
        leaves.insert(leave.id, leave.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<LeaveRequest, LeaveError> {
        let leaves = self.inner.lock().unwrap();
        leaves.get(&id).cloned().ok_or(LeaveError::NotFound)
    }

    async fn find_by_owner(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, LeaveError> {
        let leaves = self.inner.lock().unwrap();
        let mut result: Vec<LeaveRequest> = leaves
            .values()
            .filter(|l| l.employee_id == employee_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn find_pending(&self) -> Result<Vec<LeaveRequest>, LeaveError> {
        let leaves = self.inner.lock().unwrap();
        let mut result: Vec<LeaveRequest> = leaves
            .values()
            .filter(|l| l.status == LeaveStatus::Pending)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(result)
    }

    async fn update(&self, leave: &LeaveRequest) -> Result<(), LeaveError> {
        let mut leaves = self.inner.lock().unwrap();
        if !leaves.contains_key(&leave.id) {
            return Err(LeaveError::NotFound);
        }
        leaves.insert(leave.id, leave.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: LeaveStatus,
        comment: Option<&str>,
    ) -> Result<(), LeaveError> {
        let mut leaves = self.inner.lock().unwrap();
        let leave = leaves.get_mut(&id).ok_or(LeaveError::NotFound)?;
        leave.status = status;
        leave.manager_comment = comment.map(str::to_string);
        leave.updated_at = Utc::now();
        Ok(())
    }
}
