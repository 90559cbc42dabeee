//! quizcraft-server — the HTTP boundary.
//!
//! Exposes three operations over a thin axum router: generate a test for
//! a topic, submit answers for grading, and a health probe. All real
//! work happens in `quizcraft-core`; handlers translate between JSON and
//! the core engines.

pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

pub use error::{ApiError, ServerError};
pub use state::AppState;

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate-test", post(routes::generate_test))
        .route("/submit-test", post(routes::submit_test))
        .route("/health", get(routes::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve requests until the process exits.
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    tracing::info!(%addr, "quizcraft server listening");

    axum::serve(listener, app(state))
        .await
        .map_err(ServerError::Io)
}
