//! Request handlers for the HTTP routes.

use crate::error::ApiError;
use crate::SharedVocabulary;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use meshview_core::RelationshipView;
use meshview_graph::VocabularyStats;
use serde::Serialize;
use tracing::debug;

/// Handles `GET /get/{key}`.
///
/// A key that can't be decoded (e.g. invalid UTF-8) can't name an entry,
/// so it gets the same 404 as any other unknown key.
pub async fn handle_get(
    State(vocab): State<SharedVocabulary>,
    key: Result<Path<String>, PathRejection>,
) -> Result<Json<RelationshipView>, ApiError> {
    let Path(key) = key.map_err(|rejection| {
        debug!("Undecodable key: {}", rejection);
        ApiError::NotFound
    })?;

    debug!("Lookup: {}", key);
    Ok(Json(vocab.resolve(&key)?))
}

#[derive(Serialize)]
pub struct HealthResult {
    status: &'static str,
}

/// Handles `GET /health`.
pub async fn handle_health() -> Json<HealthResult> {
    Json(HealthResult { status: "ok" })
}

/// Handles `GET /stats`.
pub async fn handle_stats(State(vocab): State<SharedVocabulary>) -> Json<VocabularyStats> {
    Json(vocab.stats())
}
