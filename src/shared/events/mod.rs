use crate::domain::entities::{ChatStatus, QcStatus, Resolution, SenderType};
use tokio::sync::broadcast;

/// Lifecycle events published by the services.
#[derive(Debug, Clone)]
pub enum SystemEvent {
    ChatCreated {
        chat_id: String,
        operator_id: Option<String>,
        timestamp: String, // ISO 8601
    },
    ChatTransferred {
        chat_id: String,
        from_operator_id: Option<String>,
        to_operator_id: String,
        timestamp: String, // ISO 8601
    },
    ChatEscalated {
        chat_id: String,
        from_operator_id: Option<String>,
        to_operator_id: String,
        timestamp: String, // ISO 8601
    },
    ChatClosed {
        chat_id: String,
        resolution: Resolution,
        final_status: ChatStatus,
        timestamp: String, // ISO 8601
    },
    ChatQcReviewed {
        chat_id: String,
        qc_status: QcStatus,
        timestamp: String, // ISO 8601
    },
    MessageAppended {
        message_id: String,
        chat_id: String,
        sender_type: SenderType,
        timestamp: String, // ISO 8601
    },
}

use futures::Stream;
use std::pin::Pin;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;

/// Event bus for publishing and subscribing to system events. Delivery is
/// best-effort: publishing with no live subscribers is not an error.
pub trait EventBus: Send + Sync {
    fn publish(&self, event: SystemEvent);

    fn subscribe(
        &self,
    ) -> Pin<Box<dyn Stream<Item = Result<SystemEvent, BroadcastStreamRecvError>> + Send>>;
}

/// Local in-memory implementation of EventBus
#[derive(Clone)]
pub struct LocalEventBus {
    tx: broadcast::Sender<SystemEvent>,
}

impl LocalEventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }
}

impl EventBus for LocalEventBus {
    fn publish(&self, event: SystemEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("No subscribers for system event");
        }
    }

    fn subscribe(
        &self,
    ) -> Pin<Box<dyn Stream<Item = Result<SystemEvent, BroadcastStreamRecvError>> + Send>> {
        Box::pin(BroadcastStream::new(self.tx.subscribe()))
    }
}
