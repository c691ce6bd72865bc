use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    Client,
    Operator,
}

impl fmt::Display for SenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenderType::Client => write!(f, "client"),
            SenderType::Operator => write!(f, "operator"),
        }
    }
}

impl From<String> for SenderType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "operator" => SenderType::Operator,
            _ => SenderType::Client,
        }
    }
}

/// A single chat message. Immutable once created; ordered by created_at
/// ascending within a chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub sender_type: SenderType,
    pub sender_name: String,
    pub sender_id: Option<String>,
    pub content: String,
    pub created_at: String,
}

impl Message {
    pub fn new(
        chat_id: String,
        sender_type: SenderType,
        sender_name: String,
        sender_id: Option<String>,
        content: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chat_id,
            sender_type,
            sender_name,
            sender_id,
            content,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppendMessageRequest {
    pub chat_id: String,
    pub sender_type: SenderType,
    pub sender_name: String,
    pub sender_id: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageAppendedResponse {
    pub message_id: String,
}
