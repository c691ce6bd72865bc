use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::services::operator_pool::OperatorPool;
use crate::domain::entities::{
    Chat, ChatClosedResponse, ChatCreatedResponse, ChatDetail, ChatStatus, ChatSummary,
    ChatUpdate, CloseChatRequest, CloseOutcome, CreateChatRequest, EscalateChatRequest, NewChat,
    QcStatus, Resolution, TimerExtendedResponse,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{ChatRepository, MessageRepository, StaffRepository};
use crate::shared::events::{EventBus, SystemEvent};

/// Handling window granted to a chat on creation and on every extension,
/// transfer and escalation.
pub const CHAT_TIMER_MINUTES: i64 = 15;

/// Owns all chat state transitions, timer bookkeeping and resolution
/// outcomes. Every multi-statement transition commits atomically through the
/// chat repository; this service never applies a partial transition.
#[derive(Clone)]
pub struct ChatLifecycleService {
    chat_repo: Arc<dyn ChatRepository>,
    message_repo: Arc<dyn MessageRepository>,
    staff_repo: Arc<dyn StaffRepository>,
    operator_pool: OperatorPool,
    event_bus: Arc<dyn EventBus>,
    timer_minutes: i64,
}

impl ChatLifecycleService {
    pub fn new(
        chat_repo: Arc<dyn ChatRepository>,
        message_repo: Arc<dyn MessageRepository>,
        staff_repo: Arc<dyn StaffRepository>,
        operator_pool: OperatorPool,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            chat_repo,
            message_repo,
            staff_repo,
            operator_pool,
            event_bus,
            timer_minutes: CHAT_TIMER_MINUTES,
        }
    }

    /// Create a chat for an incoming client request: upsert the client by
    /// phone, pick an operator from the pool (possibly none), start the
    /// handling timer and append the first client message.
    pub async fn create_chat(
        &self,
        request: CreateChatRequest,
    ) -> DomainResult<ChatCreatedResponse> {
        if request.client_name.trim().is_empty() {
            return Err(DomainError::Validation("client_name is required".to_string()));
        }
        if request.client_phone.trim().is_empty() {
            return Err(DomainError::Validation(
                "client_phone is required".to_string(),
            ));
        }
        if request.message.trim().is_empty() {
            return Err(DomainError::Validation("message is required".to_string()));
        }

        let operator_id = self.operator_pool.pick_available(None).await?;
        let session_id = request
            .session_id
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let now = Utc::now();
        let record = NewChat {
            id: Uuid::new_v4().to_string(),
            client_name: request.client_name,
            client_phone: request.client_phone,
            operator_id: operator_id.clone(),
            session_id: session_id.clone(),
            first_message: request.message,
            created_at: now.to_rfc3339(),
            timer_expires_at: (now + Duration::minutes(self.timer_minutes)).to_rfc3339(),
        };

        let chat = self.chat_repo.create_chat(&record).await?;

        self.event_bus.publish(SystemEvent::ChatCreated {
            chat_id: chat.id.clone(),
            operator_id: operator_id.clone(),
            timestamp: now.to_rfc3339(),
        });

        tracing::info!(
            "Chat {} created for {} (operator: {:?})",
            chat.id,
            chat.client_phone,
            operator_id
        );

        Ok(ChatCreatedResponse {
            chat_id: chat.id,
            operator_id,
            session_id,
        })
    }

    /// Grant the operator another handling window. Valid only while the chat
    /// is active; anything else is a conflict.
    pub async fn extend_timer(&self, chat_id: &str) -> DomainResult<TimerExtendedResponse> {
        let chat = self.require_chat(chat_id).await?;
        if chat.status != ChatStatus::Active {
            return Err(DomainError::Conflict(format!(
                "Chat {} is not active",
                chat_id
            )));
        }

        let new_expiry = (Utc::now() + Duration::minutes(self.timer_minutes)).to_rfc3339();
        let updated = self.chat_repo.extend_chat_timer(chat_id, &new_expiry).await?;

        Ok(TimerExtendedResponse {
            chat_id: updated.id,
            new_expiry,
            timer_extended_count: updated.timer_extended_count,
        })
    }

    /// Hand the chat to a different on-line operator. The chat is left
    /// unchanged when the pool has nobody else to offer.
    pub async fn transfer(&self, chat_id: &str) -> DomainResult<Chat> {
        let chat = self.require_chat(chat_id).await?;
        if chat.status != ChatStatus::Active {
            return Err(DomainError::Conflict(format!(
                "Chat {} is not active",
                chat_id
            )));
        }

        let next = self
            .operator_pool
            .pick_available(chat.operator_id.as_deref())
            .await?
            .ok_or(DomainError::NoOperatorAvailable)?;

        let new_expiry = (Utc::now() + Duration::minutes(self.timer_minutes)).to_rfc3339();
        self.chat_repo
            .reassign_chat(chat_id, &next, &new_expiry)
            .await?;

        self.event_bus.publish(SystemEvent::ChatTransferred {
            chat_id: chat_id.to_string(),
            from_operator_id: chat.operator_id.clone(),
            to_operator_id: next.clone(),
            timestamp: Utc::now().to_rfc3339(),
        });

        tracing::info!(
            "Chat {} transferred from {:?} to {}",
            chat_id,
            chat.operator_id,
            next
        );

        self.refreshed(chat_id).await
    }

    /// Reassign to an explicitly chosen operator and tag the chat escalated.
    /// The handling time is settled here and the departing operator is the
    /// one charged in the day's stats.
    pub async fn escalate(
        &self,
        chat_id: &str,
        request: EscalateChatRequest,
    ) -> DomainResult<Chat> {
        let chat = self.require_chat(chat_id).await?;
        if chat.status == ChatStatus::Closed {
            return Err(DomainError::Conflict(format!(
                "Chat {} is already closed",
                chat_id
            )));
        }

        let target = request
            .target_operator_id
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                DomainError::Validation("target_operator_id is required".to_string())
            })?;

        self.staff_repo
            .get_staff_by_id(&target)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Operator {} not found", target)))?;

        let now = Utc::now();
        let handling_time = handling_time_seconds(chat.started_at_datetime(), now);
        let comment = request.comment.unwrap_or_default();
        let new_expiry = (now + Duration::minutes(self.timer_minutes)).to_rfc3339();
        let stat_date = now.date_naive().to_string();

        let mut attempt = 0;
        let updated = loop {
            match self
                .chat_repo
                .escalate_chat(
                    chat_id,
                    &target,
                    &comment,
                    handling_time,
                    &new_expiry,
                    &stat_date,
                )
                .await
            {
                Ok(chat) => break chat,
                Err(DomainError::Conflict(msg)) if attempt == 0 => {
                    attempt += 1;
                    tracing::info!("Conflict escalating chat {}, retrying once: {}", chat_id, msg);
                }
                Err(e) => return Err(e),
            }
        };

        self.event_bus.publish(SystemEvent::ChatEscalated {
            chat_id: chat_id.to_string(),
            from_operator_id: chat.operator_id.clone(),
            to_operator_id: target.clone(),
            timestamp: now.to_rfc3339(),
        });

        tracing::info!(
            "Chat {} escalated from {:?} to {} after {}s",
            chat_id,
            chat.operator_id,
            target,
            handling_time
        );

        Ok(updated)
    }

    /// Close an active chat with an outcome. Resolved chats route to quality
    /// control; every other resolution closes the chat directly.
    pub async fn close(
        &self,
        chat_id: &str,
        request: CloseChatRequest,
    ) -> DomainResult<ChatClosedResponse> {
        if request.resolution == Resolution::Escalated {
            return Err(DomainError::Validation(
                "Escalation goes through the escalate operation".to_string(),
            ));
        }

        let chat = self.require_chat(chat_id).await?;
        if chat.status != ChatStatus::Active {
            return Err(DomainError::Conflict(format!(
                "Chat {} is not active",
                chat_id
            )));
        }

        let now = Utc::now();
        let handling_time = handling_time_seconds(chat.started_at_datetime(), now);
        let final_status = match request.resolution {
            Resolution::Resolved => ChatStatus::Qc,
            _ => ChatStatus::Closed,
        };
        let closed_at = match final_status {
            ChatStatus::Closed => Some(now.to_rfc3339()),
            _ => None,
        };

        let outcome = CloseOutcome {
            resolution: request.resolution,
            resolution_comment: request.comment,
            scheduled_for: request.scheduled_for,
            handling_time,
            final_status,
            closed_at,
            stat_date: now.date_naive().to_string(),
        };

        let mut attempt = 0;
        let updated = loop {
            match self.chat_repo.close_chat(chat_id, &outcome).await {
                Ok(chat) => break chat,
                Err(DomainError::Conflict(msg)) if attempt == 0 => {
                    attempt += 1;
                    tracing::info!("Conflict closing chat {}, retrying once: {}", chat_id, msg);
                }
                Err(e) => return Err(e),
            }
        };

        self.event_bus.publish(SystemEvent::ChatClosed {
            chat_id: chat_id.to_string(),
            resolution: outcome.resolution,
            final_status: updated.status,
            timestamp: now.to_rfc3339(),
        });

        tracing::info!(
            "Chat {} closed as {} (final status: {}, {}s handled)",
            chat_id,
            outcome.resolution,
            updated.status,
            handling_time
        );

        Ok(ChatClosedResponse {
            chat_id: updated.id,
            final_status: updated.status,
        })
    }

    /// Record the reviewer's disposition for a chat sitting in quality
    /// control. A closed disposition is the final exit from the queue.
    pub async fn set_qc_status(&self, chat_id: &str, qc_status: QcStatus) -> DomainResult<Chat> {
        let chat = self.require_chat(chat_id).await?;
        if chat.status != ChatStatus::Qc {
            return Err(DomainError::Conflict(format!(
                "Chat {} is not awaiting quality control",
                chat_id
            )));
        }

        let closed_at = match qc_status {
            QcStatus::Closed => Some(Utc::now().to_rfc3339()),
            _ => None,
        };
        let updated = self
            .chat_repo
            .set_qc_status(chat_id, qc_status, closed_at.as_deref())
            .await?;

        self.event_bus.publish(SystemEvent::ChatQcReviewed {
            chat_id: chat_id.to_string(),
            qc_status,
            timestamp: Utc::now().to_rfc3339(),
        });

        Ok(updated)
    }

    /// Administrative override of operator and/or status. No timer or stats
    /// side effects; closed_at is kept consistent with the status.
    pub async fn update_chat(&self, chat_id: &str, update: ChatUpdate) -> DomainResult<Chat> {
        update.validate().map_err(DomainError::Validation)?;
        self.require_chat(chat_id).await?;
        self.chat_repo.update_chat_fields(chat_id, &update).await
    }

    pub async fn get_chat(&self, chat_id: &str) -> DomainResult<ChatDetail> {
        let chat = self.require_chat(chat_id).await?;
        self.detail(chat).await
    }

    pub async fn get_chat_by_session(&self, session_id: &str) -> DomainResult<ChatDetail> {
        let chat = self
            .chat_repo
            .get_chat_by_session(session_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Chat for session {} not found", session_id))
            })?;
        self.detail(chat).await
    }

    pub async fn list_chats(
        &self,
        status: ChatStatus,
        operator_id: Option<&str>,
    ) -> DomainResult<Vec<ChatSummary>> {
        self.chat_repo.list_chats(status, operator_id).await
    }

    async fn detail(&self, chat: Chat) -> DomainResult<ChatDetail> {
        let operator_name = match &chat.operator_id {
            Some(id) => self.staff_repo.get_staff_by_id(id).await?.map(|s| s.name),
            None => None,
        };
        let messages = self.message_repo.list_messages(&chat.id).await?;
        Ok(ChatDetail {
            chat,
            operator_name,
            messages,
        })
    }

    async fn require_chat(&self, chat_id: &str) -> DomainResult<Chat> {
        self.chat_repo
            .get_chat_by_id(chat_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Chat {} not found", chat_id)))
    }

    async fn refreshed(&self, chat_id: &str) -> DomainResult<Chat> {
        self.chat_repo
            .get_chat_by_id(chat_id)
            .await?
            .ok_or_else(|| {
                DomainError::Store(format!("Chat {} disappeared after update", chat_id))
            })
    }
}

/// Whole seconds between chat start and its terminal transition, never
/// negative. An absent start degrades to zero rather than erroring.
fn handling_time_seconds(started_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match started_at {
        Some(started) => (now - started).num_seconds().max(0),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handling_time_truncates_to_whole_seconds() {
        let started = Utc::now();
        let now = started + Duration::milliseconds(90_500);
        assert_eq!(handling_time_seconds(Some(started), now), 90);
    }

    #[test]
    fn handling_time_never_negative() {
        let started = Utc::now();
        let now = started - Duration::seconds(5);
        assert_eq!(handling_time_seconds(Some(started), now), 0);
    }

    #[test]
    fn missing_start_degrades_to_zero() {
        assert_eq!(handling_time_seconds(None, Utc::now()), 0);
    }
}
