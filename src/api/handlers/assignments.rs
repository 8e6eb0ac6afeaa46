//! Handlers for the professor-discipline association resource.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::assignment::{AssignmentItem, AssignmentWriteRequest};
use crate::domain::entities::NewTeachingAssignment;
use crate::error::AppError;
use crate::state::AppState;

fn to_new(payload: AssignmentWriteRequest) -> NewTeachingAssignment {
    NewTeachingAssignment {
        professor_id: payload.professor,
        discipline_id: payload.discipline,
        teaching_type_id: payload.teaching_type,
    }
}

/// Lists all assignments in expanded form.
///
/// # Endpoint
///
/// `GET /api/professor-disciplines`
pub async fn assignment_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssignmentItem>>, AppError> {
    let details = state.assignments.list().await?;

    Ok(Json(details.into_iter().map(AssignmentItem::from).collect()))
}

/// Retrieves one assignment in expanded form.
///
/// # Endpoint
///
/// `GET /api/professor-disciplines/{id}`
pub async fn retrieve_assignment_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<AssignmentItem>, AppError> {
    let detail = state.assignments.get(id).await?;

    Ok(Json(detail.into()))
}

/// Creates an assignment.
///
/// # Endpoint
///
/// `POST /api/professor-disciplines`
///
/// Writes carry bare ids; reads return the expanded objects and never echo
/// the raw ids back.
///
/// # Errors
///
/// Returns 400 if a referenced id is unknown.
/// Returns 409 if the (professor, discipline, teaching type) triple
/// already exists.
pub async fn create_assignment_handler(
    State(state): State<AppState>,
    Json(payload): Json<AssignmentWriteRequest>,
) -> Result<(StatusCode, Json<AssignmentItem>), AppError> {
    let detail = state.assignments.create(to_new(payload)).await?;

    Ok((StatusCode::CREATED, Json(detail.into())))
}

/// Fully replaces an assignment.
///
/// # Endpoint
///
/// `PUT /api/professor-disciplines/{id}`
pub async fn update_assignment_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<AssignmentWriteRequest>,
) -> Result<Json<AssignmentItem>, AppError> {
    let detail = state.assignments.update(id, to_new(payload)).await?;

    Ok(Json(detail.into()))
}

/// Deletes an assignment.
///
/// # Endpoint
///
/// `DELETE /api/professor-disciplines/{id}`
pub async fn delete_assignment_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.assignments.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
