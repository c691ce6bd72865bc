use crate::domain::entities::{Message, SenderType};
use crate::domain::errors::DomainResult;
use crate::domain::ports::message_repository::MessageRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl MessageRepository for Database {
    async fn append_message(&self, message: &Message) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO messages (id, chat_id, sender_type, sender_name, sender_id, content, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&message.id)
        .bind(&message.chat_id)
        .bind(message.sender_type.to_string())
        .bind(&message.sender_name)
        .bind(&message.sender_id)
        .bind(&message.content)
        .bind(&message.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_messages(&self, chat_id: &str) -> DomainResult<Vec<Message>> {
        let rows = sqlx::query(
            "SELECT id, chat_id, sender_type, sender_name, sender_id, content, created_at
             FROM messages
             WHERE chat_id = ?
             ORDER BY created_at ASC",
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in rows {
            messages.push(Message {
                id: row.try_get("id")?,
                chat_id: row.try_get("chat_id")?,
                sender_type: SenderType::from(row.try_get::<String, _>("sender_type")?),
                sender_name: row.try_get("sender_name")?,
                sender_id: row.try_get("sender_id").ok(),
                content: row.try_get("content")?,
                created_at: row.try_get("created_at")?,
            });
        }
        Ok(messages)
    }
}
