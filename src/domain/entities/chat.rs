use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    Active,
    Qc,
    Closed,
}

impl fmt::Display for ChatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatStatus::Active => write!(f, "active"),
            ChatStatus::Qc => write!(f, "qc"),
            ChatStatus::Closed => write!(f, "closed"),
        }
    }
}

// Convert from string (for SQLx)
impl From<String> for ChatStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "qc" => ChatStatus::Qc,
            "closed" => ChatStatus::Closed,
            _ => ChatStatus::Active,
        }
    }
}

/// Resolution outcome, orthogonal to the lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    None,
    Resolved,
    Postponed,
    Escalated,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::None => write!(f, "none"),
            Resolution::Resolved => write!(f, "resolved"),
            Resolution::Postponed => write!(f, "postponed"),
            Resolution::Escalated => write!(f, "escalated"),
        }
    }
}

impl From<String> for Resolution {
    fn from(s: String) -> Self {
        match s.as_str() {
            "resolved" => Resolution::Resolved,
            "postponed" => Resolution::Postponed,
            "escalated" => Resolution::Escalated,
            _ => Resolution::None,
        }
    }
}

/// Quality-control disposition for a resolved chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QcStatus {
    Pending,
    Approved,
    Rejected,
    Closed,
}

impl fmt::Display for QcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QcStatus::Pending => write!(f, "pending"),
            QcStatus::Approved => write!(f, "approved"),
            QcStatus::Rejected => write!(f, "rejected"),
            QcStatus::Closed => write!(f, "closed"),
        }
    }
}

impl From<String> for QcStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "approved" => QcStatus::Approved,
            "rejected" => QcStatus::Rejected,
            "closed" => QcStatus::Closed,
            _ => QcStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_id: String,
    pub operator_id: Option<String>,
    pub session_id: Option<String>,
    pub status: ChatStatus,
    pub resolution: Resolution,
    pub resolution_comment: Option<String>,
    pub scheduled_for: Option<String>,
    pub handling_time: Option<i64>,
    pub qc_status: Option<QcStatus>,
    pub timer_expires_at: Option<String>, // ISO8601 string from DB
    pub timer_extended_count: i64,
    pub created_at: String,
    pub started_at: Option<String>,
    pub closed_at: Option<String>,
}

// Helper methods for timestamps (converting String <-> DateTime<Utc>)
impl Chat {
    pub fn started_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.started_at
            .as_ref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn timer_expires_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.timer_expires_at
            .as_ref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Record handed to the store for chat creation. The client upsert, the chat
/// row and the first message commit in one transaction.
#[derive(Debug, Clone)]
pub struct NewChat {
    pub id: String,
    pub client_name: String,
    pub client_phone: String,
    pub operator_id: Option<String>,
    pub session_id: String,
    pub first_message: String,
    pub created_at: String,
    pub timer_expires_at: String,
}

/// Administratively mutable chat fields. Exactly these two may be written
/// outside the specialized transitions; the store applies them without
/// timer or stats side effects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatUpdate {
    pub status: Option<ChatStatus>,
    pub operator_id: Option<String>,
}

impl ChatUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if self.status.is_none() && self.operator_id.is_none() {
            return Err("No updatable fields supplied".to_string());
        }
        Ok(())
    }
}

/// Outcome of a close transition, fully computed by the lifecycle engine
/// before any store call.
#[derive(Debug, Clone)]
pub struct CloseOutcome {
    pub resolution: Resolution,
    pub resolution_comment: Option<String>,
    pub scheduled_for: Option<String>,
    pub handling_time: i64,
    pub final_status: ChatStatus,
    pub closed_at: Option<String>,
    pub stat_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatSummary {
    pub id: String,
    pub client_name: String,
    pub client_phone: String,
    pub operator_id: Option<String>,
    pub operator_name: Option<String>,
    pub status: ChatStatus,
    pub resolution: Resolution,
    pub created_at: String,
    pub closed_at: Option<String>,
    pub message_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatDetail {
    #[serde(flatten)]
    pub chat: Chat,
    pub operator_name: Option<String>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateChatRequest {
    pub client_name: String,
    pub client_phone: String,
    pub message: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCreatedResponse {
    pub chat_id: String,
    pub operator_id: Option<String>,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimerExtendedResponse {
    pub chat_id: String,
    pub new_expiry: String,
    pub timer_extended_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EscalateChatRequest {
    pub target_operator_id: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseChatRequest {
    pub resolution: Resolution,
    pub comment: Option<String>,
    pub scheduled_for: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatClosedResponse {
    pub chat_id: String,
    pub final_status: ChatStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QcDispositionRequest {
    pub qc_status: QcStatus,
}
