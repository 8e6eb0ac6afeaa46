//! Discipline detail handler.
//!
//! Disciplines use the shared lookup handlers for everything except
//! retrieve, which additionally embeds the discipline's teaching
//! assignments so a discipline page can show who teaches it in which mode.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::lookups::DisciplineDetailResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves a discipline together with its expanded assignments.
///
/// # Endpoint
///
/// `GET /api/disciplines/{id}`
///
/// # Errors
///
/// Returns 404 if the discipline does not exist.
pub async fn retrieve_discipline_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DisciplineDetailResponse>, AppError> {
    let entry = state.disciplines.get(id).await?;
    let assignments = state.assignments.list_for_discipline(id).await?;

    Ok(Json(DisciplineDetailResponse::new(entry, assignments)))
}
