use crate::domain::entities::{WorkSession, WorkTimeEntry};
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait WorkSessionRepository: Send + Sync {
    /// Close the staff member's open session (computing its duration) and
    /// open a new one with the given status, in one transaction.
    async fn switch_status(&self, staff_id: &str, status: &str) -> DomainResult<WorkSession>;

    async fn get_open_session(&self, staff_id: &str) -> DomainResult<Option<WorkSession>>;

    /// Minutes grouped by (date, status) over closed sessions in the
    /// inclusive date range.
    async fn report(
        &self,
        staff_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> DomainResult<Vec<WorkTimeEntry>>;
}
