use std::sync::Arc;

use crate::domain::entities::{CreateTaskRequest, FollowUpTask, TaskUpdate};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::TaskRepository;

#[derive(Clone)]
pub struct TaskService {
    task_repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(task_repo: Arc<dyn TaskRepository>) -> Self {
        Self { task_repo }
    }

    pub async fn create_task(&self, request: CreateTaskRequest) -> DomainResult<FollowUpTask> {
        if request.title.trim().is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        if request.created_by.trim().is_empty() {
            return Err(DomainError::Validation("created_by is required".to_string()));
        }

        let task = FollowUpTask::new(
            request.title,
            request.description,
            request.priority,
            request.created_by,
            request.assigned_to,
            request.due_date,
        );
        self.task_repo.create_task(&task).await?;
        Ok(task)
    }

    pub async fn get_task(&self, id: &str) -> DomainResult<FollowUpTask> {
        self.task_repo
            .get_task_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Task {} not found", id)))
    }

    pub async fn list_tasks(
        &self,
        status: Option<&str>,
        assigned_to: Option<&str>,
    ) -> DomainResult<Vec<FollowUpTask>> {
        self.task_repo.list_tasks(status, assigned_to).await
    }

    pub async fn update_task(&self, id: &str, update: TaskUpdate) -> DomainResult<FollowUpTask> {
        update.validate().map_err(DomainError::Validation)?;
        self.get_task(id).await?;
        self.task_repo.update_task(id, &update).await
    }
}
