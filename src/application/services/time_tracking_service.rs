use std::sync::Arc;

use crate::domain::entities::{WorkSession, WorkTimeEntry};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{StaffRepository, WorkSessionRepository};

/// Tracks how operators spend their shift, one status session at a time.
#[derive(Clone)]
pub struct TimeTrackingService {
    session_repo: Arc<dyn WorkSessionRepository>,
    staff_repo: Arc<dyn StaffRepository>,
}

impl TimeTrackingService {
    pub fn new(
        session_repo: Arc<dyn WorkSessionRepository>,
        staff_repo: Arc<dyn StaffRepository>,
    ) -> Self {
        Self {
            session_repo,
            staff_repo,
        }
    }

    /// Close the staff member's open session and start a new one with the
    /// given status.
    pub async fn switch_status(&self, staff_id: &str, status: &str) -> DomainResult<WorkSession> {
        if status.trim().is_empty() {
            return Err(DomainError::Validation("status is required".to_string()));
        }
        self.staff_repo
            .get_staff_by_id(staff_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Staff {} not found", staff_id)))?;

        self.session_repo.switch_status(staff_id, status).await
    }

    pub async fn report(
        &self,
        staff_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> DomainResult<Vec<WorkTimeEntry>> {
        self.session_repo.report(staff_id, start_date, end_date).await
    }
}
