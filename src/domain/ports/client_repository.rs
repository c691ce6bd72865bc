use crate::domain::entities::Client;
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait ClientRepository: Send + Sync {
    async fn get_client_by_phone(&self, phone: &str) -> DomainResult<Option<Client>>;

    async fn list_clients(&self) -> DomainResult<Vec<Client>>;
}
