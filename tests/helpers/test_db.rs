use chatdesk::application::services::{
    ChatLifecycleService, MessageService, OperatorPool, QcService, RatingService, StaffService,
    StatsService, TaskService, TimeTrackingService,
};
use chatdesk::domain::entities::Staff;
use chatdesk::domain::ports::{
    ChatRepository, MessageRepository, RatingRepository, StaffRepository, StatsRepository,
    TaskRepository, WorkSessionRepository,
};
use chatdesk::infrastructure::persistence::Database;
use chatdesk::shared::events::{EventBus, LocalEventBus};
use std::sync::Arc;
use uuid::Uuid;

pub async fn setup_test_db() -> Database {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // File-based SQLite, unique per test for parallel execution
    let temp_file = std::env::temp_dir().join(format!("chatdesk_test_{}.db", Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.display());

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    db
}

/// The full service graph over one database, wired the way bootstrap does it.
pub struct Services {
    pub lifecycle: ChatLifecycleService,
    pub messages: MessageService,
    pub qc: QcService,
    pub stats: StatsService,
    pub staff: StaffService,
    pub ratings: RatingService,
    pub tasks: TaskService,
    pub time_tracking: TimeTrackingService,
    pub event_bus: Arc<dyn EventBus>,
}

pub fn build_services(db: &Database) -> Services {
    let event_bus: Arc<dyn EventBus> = Arc::new(LocalEventBus::new(32));

    let chat_repo: Arc<dyn ChatRepository> = Arc::new(db.clone());
    let message_repo: Arc<dyn MessageRepository> = Arc::new(db.clone());
    let staff_repo: Arc<dyn StaffRepository> = Arc::new(db.clone());
    let stats_repo: Arc<dyn StatsRepository> = Arc::new(db.clone());
    let rating_repo: Arc<dyn RatingRepository> = Arc::new(db.clone());
    let task_repo: Arc<dyn TaskRepository> = Arc::new(db.clone());
    let session_repo: Arc<dyn WorkSessionRepository> = Arc::new(db.clone());

    let operator_pool = OperatorPool::new(staff_repo.clone());
    let lifecycle = ChatLifecycleService::new(
        chat_repo.clone(),
        message_repo.clone(),
        staff_repo.clone(),
        operator_pool,
        event_bus.clone(),
    );

    Services {
        messages: MessageService::new(message_repo, chat_repo.clone(), event_bus.clone()),
        qc: QcService::new(chat_repo.clone(), lifecycle.clone()),
        stats: StatsService::new(stats_repo),
        staff: StaffService::new(staff_repo.clone()),
        ratings: RatingService::new(rating_repo, chat_repo),
        tasks: TaskService::new(task_repo),
        time_tracking: TimeTrackingService::new(session_repo, staff_repo),
        lifecycle,
        event_bus,
    }
}

/// Insert a staff member directly through the repository.
pub async fn create_operator(db: &Database, name: &str, on_line: bool) -> Staff {
    let staff_repo: &dyn StaffRepository = db;
    let mut staff = Staff::new(
        format!("{}-{}", name.to_lowercase(), Uuid::new_v4()),
        name.to_string(),
        "operator".to_string(),
        serde_json::json!({ "chats": { "closed": false } }),
    );
    staff.on_line = on_line;
    staff_repo
        .create_staff(&staff)
        .await
        .expect("Failed to create staff");
    staff
}

pub fn create_chat_request(
    name: &str,
    phone: &str,
    message: &str,
) -> chatdesk::domain::entities::CreateChatRequest {
    chatdesk::domain::entities::CreateChatRequest {
        client_name: name.to_string(),
        client_phone: phone.to_string(),
        message: message.to_string(),
        session_id: None,
    }
}
