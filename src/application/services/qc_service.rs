use std::sync::Arc;

use crate::application::services::chat_lifecycle::ChatLifecycleService;
use crate::domain::entities::{Chat, ChatStatus, ChatSummary, QcStatus};
use crate::domain::errors::DomainResult;
use crate::domain::ports::ChatRepository;

/// The quality-control queue: a logical view over chats with status = qc.
/// Dispositions go through the lifecycle engine, which owns the transition.
#[derive(Clone)]
pub struct QcService {
    chat_repo: Arc<dyn ChatRepository>,
    lifecycle: ChatLifecycleService,
}

impl QcService {
    pub fn new(chat_repo: Arc<dyn ChatRepository>, lifecycle: ChatLifecycleService) -> Self {
        Self {
            chat_repo,
            lifecycle,
        }
    }

    /// Resolved chats awaiting review, newest first.
    pub async fn list_queue(&self) -> DomainResult<Vec<ChatSummary>> {
        self.chat_repo.list_chats(ChatStatus::Qc, None).await
    }

    pub async fn dispose(&self, chat_id: &str, qc_status: QcStatus) -> DomainResult<Chat> {
        self.lifecycle.set_qc_status(chat_id, qc_status).await
    }
}
