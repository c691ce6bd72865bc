use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A staff member. The lifecycle engine reads the on_line flag but never
/// writes it; presence changes arrive through the administrative surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub login: String,
    pub name: String,
    pub role: String,
    pub permissions: serde_json::Value,
    pub on_line: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Staff {
    pub fn new(login: String, name: String, role: String, permissions: serde_json::Value) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            login,
            name,
            role,
            permissions,
            on_line: false,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStaffRequest {
    pub login: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub permissions: Option<serde_json::Value>,
}

/// Mutable staff fields for administrative update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub permissions: Option<serde_json::Value>,
    pub on_line: Option<bool>,
}

impl StaffUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_none()
            && self.role.is_none()
            && self.permissions.is_none()
            && self.on_line.is_none()
        {
            return Err("No updatable fields supplied".to_string());
        }
        Ok(())
    }
}
