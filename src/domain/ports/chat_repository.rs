use crate::domain::entities::{
    Chat, ChatStatus, ChatSummary, ChatUpdate, CloseOutcome, NewChat, QcStatus,
};
use crate::domain::errors::DomainResult;

/// Store contract for the chat lifecycle. The composite operations (create,
/// escalate, close) are transactional: the chat mutation and its associated
/// client/message/stats writes commit atomically or not at all.
#[async_trait::async_trait]
pub trait ChatRepository: Send + Sync {
    /// Upsert the client by phone, insert the chat and its first message.
    async fn create_chat(&self, record: &NewChat) -> DomainResult<Chat>;

    async fn get_chat_by_id(&self, id: &str) -> DomainResult<Option<Chat>>;

    async fn get_chat_by_session(&self, session_id: &str) -> DomainResult<Option<Chat>>;

    async fn list_chats(
        &self,
        status: ChatStatus,
        operator_id: Option<&str>,
    ) -> DomainResult<Vec<ChatSummary>>;

    /// Conditional on the chat still being active; zero rows affected
    /// surfaces as Conflict.
    async fn extend_chat_timer(&self, id: &str, new_expiry: &str) -> DomainResult<Chat>;

    async fn reassign_chat(
        &self,
        id: &str,
        operator_id: &str,
        new_expiry: &str,
    ) -> DomainResult<()>;

    /// Reassign to the target, tag the resolution as escalated and charge the
    /// pre-escalation operator's stats, all in one transaction. The charged
    /// operator is read from the chat row inside the transaction.
    async fn escalate_chat(
        &self,
        id: &str,
        target_operator_id: &str,
        comment: &str,
        handling_time: i64,
        new_expiry: &str,
        stat_date: &str,
    ) -> DomainResult<Chat>;

    /// Apply a close outcome and the matching stats increment in one
    /// transaction.
    async fn close_chat(&self, id: &str, outcome: &CloseOutcome) -> DomainResult<Chat>;

    /// Set the QC disposition; a Some(closed_at) also forces status = closed.
    async fn set_qc_status(
        &self,
        id: &str,
        qc_status: QcStatus,
        closed_at: Option<&str>,
    ) -> DomainResult<Chat>;

    /// Administrative field override; no timer or stats side effects.
    async fn update_chat_fields(&self, id: &str, update: &ChatUpdate) -> DomainResult<Chat>;
}
