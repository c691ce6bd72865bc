pub mod error;

pub use error::{ApiError, ApiResult};

use crate::application::services::{
    ChatLifecycleService, MessageService, QcService, RatingService, StaffService, StatsService,
    TaskService, TimeTrackingService,
};
use crate::shared::events::EventBus;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lifecycle_service: ChatLifecycleService,
    pub message_service: MessageService,
    pub qc_service: QcService,
    pub stats_service: StatsService,
    pub staff_service: StaffService,
    pub rating_service: RatingService,
    pub task_service: TaskService,
    pub time_tracking_service: TimeTrackingService,
    pub event_bus: Arc<dyn EventBus>,
}
