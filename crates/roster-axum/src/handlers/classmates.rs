//! Classmate handlers - CRUD and batch upsert over the roster.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::error::HttpError;
use crate::state::AppState;
use roster_core::utils::validation::parse_new_person;
use roster_core::{BatchSummary, Person};

/// Confirmation body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// List all classmates.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Person>>, HttpError> {
    Ok(Json(state.roster.list().await?))
}

/// Get a single classmate by ID.
///
/// A non-integer ID matches no classmate and is answered with 404.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Person>, HttpError> {
    let Path(id) = id?;
    Ok(Json(state.roster.get(id).await?))
}

/// Add a new classmate; the store assigns the ID.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>), HttpError> {
    let Json(body) = payload?;
    let person = parse_new_person(&body)?;
    Ok((StatusCode::CREATED, Json(state.roster.create(person).await?)))
}

/// Overwrite an existing classmate.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Person>, HttpError> {
    let Path(id) = id?;
    let Json(body) = payload?;
    let person = parse_new_person(&body)?;
    Ok(Json(state.roster.update(id, person).await?))
}

/// Remove a classmate.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, HttpError> {
    let Path(id) = id?;
    state.roster.delete(id).await?;
    Ok(Json(DeleteResponse {
        message: "deleted".to_string(),
    }))
}

/// Upsert an array of classmates keyed by their IDs.
///
/// Only a body that is not a JSON array is rejected; per-entry problems
/// and storage failures are reported inside the summary.
pub async fn batch(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BatchSummary>, HttpError> {
    let Json(body) = payload?;
    Ok(Json(state.roster.batch_upsert(&body).await?))
}
