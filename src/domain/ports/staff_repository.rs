use crate::domain::entities::{Staff, StaffUpdate};
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait StaffRepository: Send + Sync {
    async fn create_staff(&self, staff: &Staff) -> DomainResult<()>;

    async fn get_staff_by_id(&self, id: &str) -> DomainResult<Option<Staff>>;

    async fn get_staff_by_login(&self, login: &str) -> DomainResult<Option<Staff>>;

    async fn list_staff(&self) -> DomainResult<Vec<Staff>>;

    /// Staff currently eligible for assignment (on_line = true).
    async fn list_online_staff(&self) -> DomainResult<Vec<Staff>>;

    async fn update_staff(&self, id: &str, update: &StaffUpdate) -> DomainResult<Staff>;
}
