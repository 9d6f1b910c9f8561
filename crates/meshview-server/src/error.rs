//! Server and API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use meshview_graph::LookupError;
use serde::Serialize;
use std::net::SocketAddr;
use thiserror::Error;
use tracing::{debug, warn};

/// Message returned to clients for every failed lookup.
pub const NOT_FOUND_MESSAGE: &str = "MeSH ID not found";

/// Errors that stop the server itself.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match &err {
            LookupError::NotFound { key } => debug!("No relationships for {}", key),
            // Clients see a plain 404; the data defect only shows up in logs.
            LookupError::MissingMetadata { .. } => warn!("{}", err),
        }
        ApiError::NotFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: NOT_FOUND_MESSAGE,
                }),
            )
                .into_response(),
        }
    }
}
