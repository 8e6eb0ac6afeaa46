//! Handlers for the professor-activity association resource.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::activity::{ActivityRecordItem, ActivityRecordWriteRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all activity records in expanded form.
///
/// # Endpoint
///
/// `GET /api/professor-activities`
pub async fn activity_record_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityRecordItem>>, AppError> {
    let details = state.activity_records.list().await?;

    Ok(Json(
        details.into_iter().map(ActivityRecordItem::from).collect(),
    ))
}

/// Retrieves one activity record in expanded form.
///
/// # Endpoint
///
/// `GET /api/professor-activities/{id}`
pub async fn retrieve_activity_record_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ActivityRecordItem>, AppError> {
    let detail = state.activity_records.get(id).await?;

    Ok(Json(detail.into()))
}

/// Creates an activity record.
///
/// # Endpoint
///
/// `POST /api/professor-activities`
///
/// # Request Body
///
/// ```json
/// {
///   "professor": 1,
///   "activity": { "name": "Curator" },
///   "description": "First-year group"
/// }
/// ```
///
/// The activity is an embedded object resolved by its unique name — unlike
/// the discipline association, which takes a bare id.
///
/// # Errors
///
/// Returns 400 if the professor id or activity name is unknown.
/// Returns 409 if the (professor, activity) pair already exists.
pub async fn create_activity_record_handler(
    State(state): State<AppState>,
    Json(payload): Json<ActivityRecordWriteRequest>,
) -> Result<(StatusCode, Json<ActivityRecordItem>), AppError> {
    let detail = state
        .activity_records
        .create(payload.professor, &payload.activity.name, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(detail.into())))
}

/// Fully replaces an activity record.
///
/// # Endpoint
///
/// `PUT /api/professor-activities/{id}`
pub async fn update_activity_record_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ActivityRecordWriteRequest>,
) -> Result<Json<ActivityRecordItem>, AppError> {
    let detail = state
        .activity_records
        .update(
            id,
            payload.professor,
            &payload.activity.name,
            payload.description,
        )
        .await?;

    Ok(Json(detail.into()))
}

/// Deletes an activity record.
///
/// # Endpoint
///
/// `DELETE /api/professor-activities/{id}`
pub async fn delete_activity_record_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.activity_records.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
