use crate::domain::entities::{AppendMessageRequest, MessageAppendedResponse};
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

pub async fn append_message(
    State(state): State<AppState>,
    Json(request): Json<AppendMessageRequest>,
) -> ApiResult<impl IntoResponse> {
    let message = state.message_service.append_message(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageAppendedResponse {
            message_id: message.id,
        }),
    ))
}

#[derive(Deserialize)]
pub struct ListMessagesParams {
    pub chat_id: String,
}

pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<ListMessagesParams>,
) -> ApiResult<impl IntoResponse> {
    let messages = state.message_service.list_messages(&params.chat_id).await?;
    Ok(Json(messages))
}
