use crate::domain::entities::SwitchStatusRequest;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

pub async fn switch_status(
    State(state): State<AppState>,
    Json(request): Json<SwitchStatusRequest>,
) -> ApiResult<impl IntoResponse> {
    let session = state
        .time_tracking_service
        .switch_status(&request.staff_id, &request.status)
        .await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[derive(Deserialize)]
pub struct ReportParams {
    pub staff_id: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Minutes per (date, status). Without a range, reports today only.
pub async fn work_time_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> ApiResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive().to_string();
    let start = params.start_date.unwrap_or_else(|| today.clone());
    let end = params.end_date.unwrap_or(today);

    let entries = state
        .time_tracking_service
        .report(&params.staff_id, &start, &end)
        .await?;
    Ok(Json(entries))
}
