use std::sync::Arc;

use crate::domain::entities::{AppendMessageRequest, Message};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{ChatRepository, MessageRepository};
use crate::shared::events::{EventBus, SystemEvent};

#[derive(Clone)]
pub struct MessageService {
    message_repo: Arc<dyn MessageRepository>,
    chat_repo: Arc<dyn ChatRepository>,
    event_bus: Arc<dyn EventBus>,
}

impl MessageService {
    pub fn new(
        message_repo: Arc<dyn MessageRepository>,
        chat_repo: Arc<dyn ChatRepository>,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            message_repo,
            chat_repo,
            event_bus,
        }
    }

    pub async fn append_message(&self, request: AppendMessageRequest) -> DomainResult<Message> {
        if request.sender_name.trim().is_empty() {
            return Err(DomainError::Validation("sender_name is required".to_string()));
        }
        if request.content.trim().is_empty() {
            return Err(DomainError::Validation("content is required".to_string()));
        }

        self.chat_repo
            .get_chat_by_id(&request.chat_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Chat {} not found", request.chat_id)))?;

        let message = Message::new(
            request.chat_id,
            request.sender_type,
            request.sender_name,
            request.sender_id,
            request.content,
        );
        self.message_repo.append_message(&message).await?;

        self.event_bus.publish(SystemEvent::MessageAppended {
            message_id: message.id.clone(),
            chat_id: message.chat_id.clone(),
            sender_type: message.sender_type,
            timestamp: message.created_at.clone(),
        });

        Ok(message)
    }

    pub async fn list_messages(&self, chat_id: &str) -> DomainResult<Vec<Message>> {
        self.message_repo.list_messages(chat_id).await
    }
}
