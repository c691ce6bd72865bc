use crate::domain::entities::{FollowUpTask, TaskUpdate};
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create_task(&self, task: &FollowUpTask) -> DomainResult<()>;

    async fn get_task_by_id(&self, id: &str) -> DomainResult<Option<FollowUpTask>>;

    async fn list_tasks(
        &self,
        status: Option<&str>,
        assigned_to: Option<&str>,
    ) -> DomainResult<Vec<FollowUpTask>>;

    async fn update_task(&self, id: &str, update: &TaskUpdate) -> DomainResult<FollowUpTask>;
}
