//! HTTP server implementation.
//!
//! Builds the router and binds it to a listener.

use crate::error::ServerError;
use crate::handlers::{handle_get, handle_health, handle_stats};
use crate::SharedVocabulary;
use axum::routing::get;
use axum::Router;
use meshview_graph::Vocabulary;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Default port, matching what browser clients expect.
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
        }
    }
}

/// The Meshview HTTP server.
pub struct MeshServer {
    config: ServerConfig,
    vocab: SharedVocabulary,
}

impl MeshServer {
    /// Creates a new server over the given vocabulary.
    pub fn new(vocab: Vocabulary, config: ServerConfig) -> Self {
        Self {
            config,
            vocab: Arc::new(vocab),
        }
    }

    /// Builds the application router.
    pub fn router(&self) -> Router {
        router(self.vocab.clone())
    }

    /// Binds the configured address without serving yet.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        TcpListener::bind(self.config.addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.config.addr,
                source,
            })
    }

    /// Serves requests on an already bound listener until Ctrl+C.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), ServerError> {
        info!("Meshview server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }

    /// Binds and runs the server until Ctrl+C.
    pub async fn run(&self) -> Result<(), ServerError> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }
}

pub(crate) fn router(vocab: SharedVocabulary) -> Router {
    Router::new()
        .route("/get/:key", get(handle_get))
        .route("/health", get(handle_health))
        .route("/stats", get(handle_stats))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(vocab)
}

async fn shutdown_signal() {
    // If the handler can't be installed, keep serving until the process is killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
