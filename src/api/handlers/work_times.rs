//! Handlers for the work-time resource.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::work_time::{WorkTimeItem, WorkTimeWrite};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all work-time fractions.
///
/// # Endpoint
///
/// `GET /api/work-times`
pub async fn work_time_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkTimeItem>>, AppError> {
    let entries = state.work_times.list().await?;

    Ok(Json(entries.into_iter().map(WorkTimeItem::from).collect()))
}

/// Retrieves one fraction by id.
///
/// # Endpoint
///
/// `GET /api/work-times/{id}`
pub async fn retrieve_work_time_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<WorkTimeItem>, AppError> {
    let entry = state.work_times.get(id).await?;

    Ok(Json(entry.into()))
}

/// Creates a new fraction.
///
/// # Endpoint
///
/// `POST /api/work-times`
///
/// # Errors
///
/// Returns 400 if the value is not finite.
/// Returns 409 if the value already exists.
pub async fn create_work_time_handler(
    State(state): State<AppState>,
    Json(payload): Json<WorkTimeWrite>,
) -> Result<(StatusCode, Json<WorkTimeItem>), AppError> {
    let entry = state.work_times.create(payload.name).await?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// Replaces an existing fraction.
///
/// # Endpoint
///
/// `PUT /api/work-times/{id}`
pub async fn update_work_time_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<WorkTimeWrite>,
) -> Result<Json<WorkTimeItem>, AppError> {
    let entry = state.work_times.update(id, payload.name).await?;

    Ok(Json(entry.into()))
}

/// Deletes a fraction.
///
/// # Endpoint
///
/// `DELETE /api/work-times/{id}`
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
/// Returns 409 if a professor still references it.
pub async fn delete_work_time_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.work_times.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
