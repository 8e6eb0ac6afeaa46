//! Generic CRUD handlers for the reference (lookup) resources.
//!
//! Six resources share the same handler bodies; a marker type per resource
//! selects its service instance and wire types at the route table. This
//! replaces what would otherwise be six copies of the same five handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::api::dto::lookups::{LookupWrite, NameWrite, NamedItem, OfficeItem, OfficeWrite};
use crate::application::services::LookupService;
use crate::domain::entities::LookupEntry;
use crate::error::AppError;
use crate::state::AppState;

/// Binds a lookup resource to its service instance and wire types.
pub trait LookupResource: Send + Sync + 'static {
    type Item: Serialize + From<LookupEntry> + Send + 'static;
    type Write: DeserializeOwned + LookupWrite + Send + 'static;

    fn service(state: &AppState) -> &LookupService;
}

pub struct Offices;
impl LookupResource for Offices {
    type Item = OfficeItem;
    type Write = OfficeWrite;

    fn service(state: &AppState) -> &LookupService {
        &state.offices
    }
}

pub struct Degrees;
impl LookupResource for Degrees {
    type Item = NamedItem;
    type Write = NameWrite;

    fn service(state: &AppState) -> &LookupService {
        &state.degrees
    }
}

pub struct Positions;
impl LookupResource for Positions {
    type Item = NamedItem;
    type Write = NameWrite;

    fn service(state: &AppState) -> &LookupService {
        &state.positions
    }
}

pub struct Disciplines;
impl LookupResource for Disciplines {
    type Item = NamedItem;
    type Write = NameWrite;

    fn service(state: &AppState) -> &LookupService {
        &state.disciplines
    }
}

pub struct TeachingTypes;
impl LookupResource for TeachingTypes {
    type Item = NamedItem;
    type Write = NameWrite;

    fn service(state: &AppState) -> &LookupService {
        &state.teaching_types
    }
}

pub struct Activities;
impl LookupResource for Activities {
    type Item = NamedItem;
    type Write = NameWrite;

    fn service(state: &AppState) -> &LookupService {
        &state.activities
    }
}

/// Lists all entries of a lookup resource.
///
/// # Endpoint
///
/// `GET /api/{resource}`
pub async fn list_lookup_handler<R: LookupResource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::Item>>, AppError> {
    let entries = R::service(&state).list().await?;

    Ok(Json(entries.into_iter().map(R::Item::from).collect()))
}

/// Retrieves one entry by id.
///
/// # Endpoint
///
/// `GET /api/{resource}/{id}`
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
pub async fn retrieve_lookup_handler<R: LookupResource>(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<R::Item>, AppError> {
    let entry = R::service(&state).get(id).await?;

    Ok(Json(R::Item::from(entry)))
}

/// Creates a new entry.
///
/// # Endpoint
///
/// `POST /api/{resource}`
///
/// # Errors
///
/// Returns 400 if the value is empty or too long.
/// Returns 409 if the value already exists.
pub async fn create_lookup_handler<R: LookupResource>(
    State(state): State<AppState>,
    Json(payload): Json<R::Write>,
) -> Result<(StatusCode, Json<R::Item>), AppError> {
    let entry = R::service(&state).create(payload.into_value()).await?;

    Ok((StatusCode::CREATED, Json(R::Item::from(entry))))
}

/// Replaces the value of an existing entry.
///
/// # Endpoint
///
/// `PUT /api/{resource}/{id}`
///
/// # Errors
///
/// Returns 400 if the value is empty or too long.
/// Returns 404 if the entry does not exist.
/// Returns 409 if another entry already holds the value.
pub async fn update_lookup_handler<R: LookupResource>(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<R::Write>,
) -> Result<Json<R::Item>, AppError> {
    let entry = R::service(&state).update(id, payload.into_value()).await?;

    Ok(Json(R::Item::from(entry)))
}

/// Deletes an entry.
///
/// # Endpoint
///
/// `DELETE /api/{resource}/{id}`
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
/// Returns 409 if the entry is still referenced (restrict delete policy).
pub async fn delete_lookup_handler<R: LookupResource>(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    R::service(&state).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
