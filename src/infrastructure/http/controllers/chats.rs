use crate::domain::entities::{
    ChatStatus, ChatUpdate, CloseChatRequest, CreateChatRequest, EscalateChatRequest,
};
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

/// Open a new client chat; the first message rides along.
pub async fn create_chat(
    State(state): State<AppState>,
    Json(request): Json<CreateChatRequest>,
) -> ApiResult<impl IntoResponse> {
    let created = state.lifecycle_service.create_chat(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Deserialize)]
pub struct ListChatsParams {
    #[serde(default = "default_status")]
    pub status: ChatStatus,
    pub operator_id: Option<String>,
}

fn default_status() -> ChatStatus {
    ChatStatus::Active
}

pub async fn list_chats(
    State(state): State<AppState>,
    Query(params): Query<ListChatsParams>,
) -> ApiResult<impl IntoResponse> {
    let chats = state
        .lifecycle_service
        .list_chats(params.status, params.operator_id.as_deref())
        .await?;
    Ok(Json(chats))
}

pub async fn get_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let detail = state.lifecycle_service.get_chat(&id).await?;
    Ok(Json(detail))
}

pub async fn get_chat_by_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let detail = state
        .lifecycle_service
        .get_chat_by_session(&session_id)
        .await?;
    Ok(Json(detail))
}

/// Administrative field override (status and/or operator).
pub async fn update_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ChatUpdate>,
) -> ApiResult<impl IntoResponse> {
    let chat = state.lifecycle_service.update_chat(&id, update).await?;
    Ok(Json(chat))
}

pub async fn extend_timer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let extended = state.lifecycle_service.extend_timer(&id).await?;
    Ok(Json(extended))
}

pub async fn transfer_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let chat = state.lifecycle_service.transfer(&id).await?;
    Ok(Json(chat))
}

pub async fn escalate_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<EscalateChatRequest>,
) -> ApiResult<impl IntoResponse> {
    let chat = state.lifecycle_service.escalate(&id, request).await?;
    Ok(Json(chat))
}

pub async fn close_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CloseChatRequest>,
) -> ApiResult<impl IntoResponse> {
    let closed = state.lifecycle_service.close(&id, request).await?;
    Ok(Json(closed))
}
