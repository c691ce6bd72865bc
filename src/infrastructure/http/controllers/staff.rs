use crate::domain::entities::{CreateStaffRequest, StaffUpdate};
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn create_staff(
    State(state): State<AppState>,
    Json(request): Json<CreateStaffRequest>,
) -> ApiResult<impl IntoResponse> {
    let staff = state.staff_service.create_staff(request).await?;
    Ok((StatusCode::CREATED, Json(staff)))
}

pub async fn list_staff(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let staff = state.staff_service.list_staff().await?;
    Ok(Json(staff))
}

pub async fn get_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let staff = state.staff_service.get_staff(&id).await?;
    Ok(Json(staff))
}

pub async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<StaffUpdate>,
) -> ApiResult<impl IntoResponse> {
    let staff = state.staff_service.update_staff(&id, update).await?;
    Ok(Json(staff))
}
