use crate::application::services::{
    ChatLifecycleService, MessageService, OperatorPool, QcService, RatingService, StaffService,
    StatsService, TaskService, TimeTrackingService,
};
use crate::config::Config;
use crate::domain::entities::Staff;
use crate::domain::ports::{
    ChatRepository, MessageRepository, RatingRepository, StaffRepository, StatsRepository,
    TaskRepository, WorkSessionRepository,
};
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use crate::shared::events::{EventBus, LocalEventBus};
use futures::StreamExt;
use std::sync::Arc;

/// Ensure the administrative staff account exists. Created off-line; an
/// admin goes on line through the presence surface like everyone else.
pub async fn initialize_admin(db: &Database, config: &Config) -> anyhow::Result<()> {
    let staff_repo: &dyn StaffRepository = db;
    if staff_repo
        .get_staff_by_login(&config.admin_login)
        .await?
        .is_some()
    {
        tracing::debug!("Admin account {} already present", config.admin_login);
        return Ok(());
    }

    let admin = Staff::new(
        config.admin_login.clone(),
        config.admin_name.clone(),
        "admin".to_string(),
        serde_json::json!({ "chats": { "closed": true }, "staff": { "manage": true } }),
    );
    staff_repo.create_staff(&admin).await?;
    tracing::info!("Admin account {} created", config.admin_login);
    Ok(())
}

pub async fn build_app_state(db: Database, _config: &Config) -> anyhow::Result<AppState> {
    // Event bus for lifecycle events
    let event_bus: Arc<dyn EventBus> = Arc::new(LocalEventBus::new(100));

    // Audit listener: every lifecycle event lands in the log
    let mut events = event_bus.subscribe();
    tokio::spawn(async move {
        while let Some(event) = events.next().await {
            match event {
                Ok(event) => tracing::info!(?event, "system event"),
                Err(lagged) => tracing::warn!("Audit listener lagged: {}", lagged),
            }
        }
    });

    let chat_repo: Arc<dyn ChatRepository> = Arc::new(db.clone());
    let message_repo: Arc<dyn MessageRepository> = Arc::new(db.clone());
    let staff_repo: Arc<dyn StaffRepository> = Arc::new(db.clone());
    let stats_repo: Arc<dyn StatsRepository> = Arc::new(db.clone());
    let rating_repo: Arc<dyn RatingRepository> = Arc::new(db.clone());
    let task_repo: Arc<dyn TaskRepository> = Arc::new(db.clone());
    let session_repo: Arc<dyn WorkSessionRepository> = Arc::new(db.clone());

    let operator_pool = OperatorPool::new(staff_repo.clone());

    let lifecycle_service = ChatLifecycleService::new(
        chat_repo.clone(),
        message_repo.clone(),
        staff_repo.clone(),
        operator_pool,
        event_bus.clone(),
    );
    let message_service =
        MessageService::new(message_repo.clone(), chat_repo.clone(), event_bus.clone());
    let qc_service = QcService::new(chat_repo.clone(), lifecycle_service.clone());
    let stats_service = StatsService::new(stats_repo);
    let staff_service = StaffService::new(staff_repo.clone());
    let rating_service = RatingService::new(rating_repo, chat_repo.clone());
    let task_service = TaskService::new(task_repo);
    let time_tracking_service = TimeTrackingService::new(session_repo, staff_repo);

    Ok(AppState {
        lifecycle_service,
        message_service,
        qc_service,
        stats_service,
        staff_service,
        rating_service,
        task_service,
        time_tracking_service,
        event_bus,
    })
}
