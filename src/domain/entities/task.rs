use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Follow-up task raised from support work (e.g. a postponed chat that needs
/// engineering attention). Free-form priority/status strings, matching how
/// the directory treats staff roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUpTask {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    pub created_by: String,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
    pub resolution_comment: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl FollowUpTask {
    pub fn new(
        title: String,
        description: Option<String>,
        priority: String,
        created_by: String,
        assigned_to: Option<String>,
        due_date: Option<String>,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            priority,
            status: "open".to_string(),
            created_by,
            assigned_to,
            due_date,
            resolution_comment: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub created_by: String,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
}

fn default_priority() -> String {
    "medium".to_string()
}

/// Mutable task fields for partial update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskUpdate {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
    pub resolution_comment: Option<String>,
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if self.status.is_none()
            && self.priority.is_none()
            && self.assigned_to.is_none()
            && self.due_date.is_none()
            && self.resolution_comment.is_none()
        {
            return Err("No updatable fields supplied".to_string());
        }
        Ok(())
    }
}
