use crate::domain::entities::{FollowUpTask, TaskUpdate};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::task_repository::TaskRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

const TASK_COLUMNS: &str = "id, title, description, priority, status, created_by, assigned_to, \
     due_date, resolution_comment, created_at, updated_at";

fn task_from_row(row: &sqlx::any::AnyRow) -> DomainResult<FollowUpTask> {
    Ok(FollowUpTask {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description").ok(),
        priority: row.try_get("priority")?,
        status: row.try_get("status")?,
        created_by: row.try_get("created_by")?,
        assigned_to: row.try_get("assigned_to").ok(),
        due_date: row.try_get("due_date").ok(),
        resolution_comment: row.try_get("resolution_comment").ok(),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl TaskRepository for Database {
    async fn create_task(&self, task: &FollowUpTask) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO follow_up_tasks (id, title, description, priority, status, created_by,
                                          assigned_to, due_date, resolution_comment,
                                          created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.priority)
        .bind(&task.status)
        .bind(&task.created_by)
        .bind(&task.assigned_to)
        .bind(&task.due_date)
        .bind(&task.resolution_comment)
        .bind(&task.created_at)
        .bind(&task.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_task_by_id(&self, id: &str) -> DomainResult<Option<FollowUpTask>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM follow_up_tasks WHERE id = ?",
            TASK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(task_from_row).transpose()
    }

    async fn list_tasks(
        &self,
        status: Option<&str>,
        assigned_to: Option<&str>,
    ) -> DomainResult<Vec<FollowUpTask>> {
        let rows = match (status, assigned_to) {
            (Some(status), Some(assignee)) => {
                sqlx::query(&format!(
                    "SELECT {} FROM follow_up_tasks WHERE status = ? AND assigned_to = ?
                     ORDER BY created_at DESC",
                    TASK_COLUMNS
                ))
                .bind(status)
                .bind(assignee)
                .fetch_all(&self.pool)
                .await?
            }
            (Some(status), None) => {
                sqlx::query(&format!(
                    "SELECT {} FROM follow_up_tasks WHERE status = ? ORDER BY created_at DESC",
                    TASK_COLUMNS
                ))
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            (None, Some(assignee)) => {
                sqlx::query(&format!(
                    "SELECT {} FROM follow_up_tasks WHERE assigned_to = ?
                     ORDER BY created_at DESC",
                    TASK_COLUMNS
                ))
                .bind(assignee)
                .fetch_all(&self.pool)
                .await?
            }
            (None, None) => {
                sqlx::query(&format!(
                    "SELECT {} FROM follow_up_tasks ORDER BY created_at DESC",
                    TASK_COLUMNS
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(task_from_row).collect()
    }

    async fn update_task(&self, id: &str, update: &TaskUpdate) -> DomainResult<FollowUpTask> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE follow_up_tasks
             SET status = COALESCE(?, status),
                 priority = COALESCE(?, priority),
                 assigned_to = COALESCE(?, assigned_to),
                 due_date = COALESCE(?, due_date),
                 resolution_comment = COALESCE(?, resolution_comment),
                 updated_at = ?
             WHERE id = ?",
        )
        .bind(&update.status)
        .bind(&update.priority)
        .bind(&update.assigned_to)
        .bind(&update.due_date)
        .bind(&update.resolution_comment)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("Task {} not found", id)));
        }

        self.get_task_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Store(format!("Task {} disappeared after update", id)))
    }
}
