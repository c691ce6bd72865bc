use crate::domain::entities::RateChatRequest;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

pub async fn rate_chat(
    State(state): State<AppState>,
    Json(request): Json<RateChatRequest>,
) -> ApiResult<impl IntoResponse> {
    let rating = state.rating_service.rate_chat(request).await?;
    Ok((StatusCode::CREATED, Json(rating)))
}

#[derive(Deserialize)]
pub struct ListRatingsParams {
    pub chat_id: Option<String>,
    pub operator_id: Option<String>,
}

pub async fn list_ratings(
    State(state): State<AppState>,
    Query(params): Query<ListRatingsParams>,
) -> ApiResult<impl IntoResponse> {
    if let Some(chat_id) = params.chat_id {
        let rating = state.rating_service.for_chat(&chat_id).await?;
        return Ok(Json(serde_json::json!(rating)));
    }
    if let Some(operator_id) = params.operator_id {
        let ratings = state.rating_service.for_operator(&operator_id).await?;
        return Ok(Json(serde_json::json!(ratings)));
    }
    let ratings = state.rating_service.all().await?;
    Ok(Json(serde_json::json!(ratings)))
}
