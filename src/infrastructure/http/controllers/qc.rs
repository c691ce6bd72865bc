use crate::domain::entities::QcDispositionRequest;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// Resolved chats awaiting quality review.
pub async fn list_qc_queue(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let chats = state.qc_service.list_queue().await?;
    Ok(Json(chats))
}

pub async fn dispose_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<QcDispositionRequest>,
) -> ApiResult<impl IntoResponse> {
    let chat = state.qc_service.dispose(&id, request.qc_status).await?;
    Ok(Json(chat))
}
