use crate::domain::entities::{CreateTaskRequest, TaskUpdate};
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<impl IntoResponse> {
    let task = state.task_service.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let task = state.task_service.get_task(&id).await?;
    Ok(Json(task))
}

#[derive(Deserialize)]
pub struct ListTasksParams {
    pub status: Option<String>,
    pub assigned_to: Option<String>,
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<ListTasksParams>,
) -> ApiResult<impl IntoResponse> {
    let tasks = state
        .task_service
        .list_tasks(params.status.as_deref(), params.assigned_to.as_deref())
        .await?;
    Ok(Json(tasks))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<TaskUpdate>,
) -> ApiResult<impl IntoResponse> {
    let task = state.task_service.update_task(&id, update).await?;
    Ok(Json(task))
}
