use std::sync::Arc;

use crate::domain::entities::{CreateStaffRequest, Staff, StaffUpdate};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::StaffRepository;

/// Thin administrative wrapper over the staff directory. Presence (on_line)
/// is written here, never by the lifecycle engine.
#[derive(Clone)]
pub struct StaffService {
    staff_repo: Arc<dyn StaffRepository>,
}

impl StaffService {
    pub fn new(staff_repo: Arc<dyn StaffRepository>) -> Self {
        Self { staff_repo }
    }

    pub async fn create_staff(&self, request: CreateStaffRequest) -> DomainResult<Staff> {
        if request.login.trim().is_empty() {
            return Err(DomainError::Validation("login is required".to_string()));
        }
        if request.name.trim().is_empty() {
            return Err(DomainError::Validation("name is required".to_string()));
        }
        if request.role.trim().is_empty() {
            return Err(DomainError::Validation("role is required".to_string()));
        }

        let staff = Staff::new(
            request.login,
            request.name,
            request.role,
            request.permissions.unwrap_or_else(|| serde_json::json!({})),
        );
        self.staff_repo.create_staff(&staff).await?;
        Ok(staff)
    }

    pub async fn get_staff(&self, id: &str) -> DomainResult<Staff> {
        self.staff_repo
            .get_staff_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Staff {} not found", id)))
    }

    pub async fn list_staff(&self) -> DomainResult<Vec<Staff>> {
        self.staff_repo.list_staff().await
    }

    pub async fn update_staff(&self, id: &str, update: StaffUpdate) -> DomainResult<Staff> {
        update.validate().map_err(DomainError::Validation)?;
        self.get_staff(id).await?;
        self.staff_repo.update_staff(id, &update).await
    }
}
