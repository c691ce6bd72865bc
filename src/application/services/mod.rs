pub mod chat_lifecycle;
pub mod message_service;
pub mod operator_pool;
pub mod qc_service;
pub mod rating_service;
pub mod staff_service;
pub mod stats_service;
pub mod task_service;
pub mod time_tracking_service;

pub use chat_lifecycle::ChatLifecycleService;
pub use message_service::MessageService;
pub use operator_pool::{OperatorPool, RandomSelection, SelectionStrategy};
pub use qc_service::QcService;
pub use rating_service::RatingService;
pub use staff_service::StaffService;
pub use stats_service::StatsService;
pub use task_service::TaskService;
pub use time_tracking_service::TimeTrackingService;
