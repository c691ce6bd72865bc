use crate::infrastructure::http::middleware::{ApiError, ApiResult, AppState};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct StatsParams {
    pub operator_id: Option<String>,
    pub date: Option<String>,
}

/// Per-operator daily counters. operator_id + date narrows to a single row;
/// either one alone lists that operator's history or that day's board.
pub async fn get_stats(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> ApiResult<impl IntoResponse> {
    match (params.operator_id, params.date) {
        (Some(operator_id), Some(date)) => {
            let stats = state.stats_service.get(&operator_id, &date).await?;
            Ok(Json(serde_json::json!(stats)))
        }
        (Some(operator_id), None) => {
            let stats = state.stats_service.for_operator(&operator_id).await?;
            Ok(Json(serde_json::json!(stats)))
        }
        (None, Some(date)) => {
            let stats = state.stats_service.for_date(&date).await?;
            Ok(Json(serde_json::json!(stats)))
        }
        (None, None) => Err(ApiError::BadRequest(
            "operator_id or date is required".to_string(),
        )),
    }
}
