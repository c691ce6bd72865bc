use crate::domain::entities::Message;
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait MessageRepository: Send + Sync {
    async fn append_message(&self, message: &Message) -> DomainResult<()>;

    /// Ordered by created_at ascending.
    async fn list_messages(&self, chat_id: &str) -> DomainResult<Vec<Message>>;
}
