use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Chat lifecycle
        .route("/api/chats", post(controllers::chats::create_chat))
        .route("/api/chats", get(controllers::chats::list_chats))
        .route("/api/chats/:id", get(controllers::chats::get_chat))
        .route("/api/chats/:id", patch(controllers::chats::update_chat))
        .route(
            "/api/chats/session/:session_id",
            get(controllers::chats::get_chat_by_session),
        )
        .route(
            "/api/chats/:id/extend",
            post(controllers::chats::extend_timer),
        )
        .route(
            "/api/chats/:id/transfer",
            post(controllers::chats::transfer_chat),
        )
        .route(
            "/api/chats/:id/escalate",
            post(controllers::chats::escalate_chat),
        )
        .route("/api/chats/:id/close", post(controllers::chats::close_chat))
        // Quality control
        .route("/api/qc/chats", get(controllers::qc::list_qc_queue))
        .route("/api/qc/chats/:id", post(controllers::qc::dispose_chat))
        // Messages
        .route("/api/messages", post(controllers::messages::append_message))
        .route("/api/messages", get(controllers::messages::list_messages))
        // Staff directory
        .route("/api/staff", post(controllers::staff::create_staff))
        .route("/api/staff", get(controllers::staff::list_staff))
        .route("/api/staff/:id", get(controllers::staff::get_staff))
        .route("/api/staff/:id", patch(controllers::staff::update_staff))
        // Operator stats
        .route("/api/stats", get(controllers::stats::get_stats))
        // Ratings
        .route("/api/ratings", post(controllers::ratings::rate_chat))
        .route("/api/ratings", get(controllers::ratings::list_ratings))
        // Follow-up tasks
        .route("/api/tasks", post(controllers::tasks::create_task))
        .route("/api/tasks", get(controllers::tasks::list_tasks))
        .route("/api/tasks/:id", get(controllers::tasks::get_task))
        .route("/api/tasks/:id", patch(controllers::tasks::update_task))
        // Time tracking
        .route(
            "/api/time-tracking",
            post(controllers::time_tracking::switch_status),
        )
        .route(
            "/api/time-tracking",
            get(controllers::time_tracking::work_time_report),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
