//! Handlers for the professor resource.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::professor::{ProfessorResponse, ProfessorWriteRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all professors in expanded form.
///
/// # Endpoint
///
/// `GET /api/professors`
pub async fn professor_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfessorResponse>>, AppError> {
    let details = state.professors.list().await?;

    Ok(Json(
        details.into_iter().map(ProfessorResponse::from).collect(),
    ))
}

/// Retrieves one professor with references, disciplines and activities
/// expanded.
///
/// # Endpoint
///
/// `GET /api/professors/{id}`
///
/// # Errors
///
/// Returns 404 if the professor does not exist.
pub async fn retrieve_professor_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProfessorResponse>, AppError> {
    let detail = state.professors.get(id).await?;

    Ok(Json(detail.into()))
}

/// Creates a professor.
///
/// # Endpoint
///
/// `POST /api/professors`
///
/// # Request Body
///
/// ```json
/// {
///   "first_name": "Jane",
///   "last_name": "Doe",
///   "birth_date": "1980-01-01",
///   "email": "jane@x.edu",
///   "phone_number": "12345678901",
///   "position": 1,
///   "work_time": 2
/// }
/// ```
///
/// Reference fields are bare ids; the response expands them to objects.
///
/// # Errors
///
/// Returns 400 if a field fails validation or a referenced id is unknown.
/// Returns 409 if the email or phone number is already taken.
pub async fn create_professor_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProfessorWriteRequest>,
) -> Result<(StatusCode, Json<ProfessorResponse>), AppError> {
    payload.validate()?;

    let detail = state.professors.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(detail.into())))
}

/// Fully replaces a professor.
///
/// # Endpoint
///
/// `PUT /api/professors/{id}`
///
/// # Errors
///
/// Returns 400 if a field fails validation or a referenced id is unknown.
/// Returns 404 if the professor does not exist.
/// Returns 409 if the email or phone number is already taken.
pub async fn update_professor_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ProfessorWriteRequest>,
) -> Result<Json<ProfessorResponse>, AppError> {
    payload.validate()?;

    let detail = state.professors.update(id, payload.into()).await?;

    Ok(Json(detail.into()))
}

/// Deletes a professor.
///
/// # Endpoint
///
/// `DELETE /api/professors/{id}`
///
/// # Errors
///
/// Returns 404 if the professor does not exist.
/// Returns 409 if assignments or activity records still reference the
/// professor.
pub async fn delete_professor_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.professors.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
