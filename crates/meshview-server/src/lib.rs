//! Meshview Server - HTTP surface for vocabulary lookups
//!
//! This crate serves the relationship view of a vocabulary over HTTP so
//! browser clients can walk the hierarchy one node at a time.
//!
//! Routes:
//! - `GET /get/{key}` - central entry plus immediate children and parents
//! - `GET /health` - liveness probe
//! - `GET /stats` - vocabulary statistics
//!
//! Cross-origin requests are allowed from anywhere.

use meshview_graph::Vocabulary;
use std::sync::Arc;

/// Vocabulary shared across request handlers. Read-only after startup.
pub type SharedVocabulary = Arc<Vocabulary>;

mod error;
mod handlers;
mod server;

pub use error::{ApiError, ServerError, NOT_FOUND_MESSAGE};
pub use server::{MeshServer, ServerConfig, DEFAULT_PORT};
