//! Server error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use quizcraft_core::error::{EmbeddingError, ScoringError};

/// Errors that abort server startup.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address.
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The listener failed while serving.
    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-request errors returned to the caller as JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Submission referenced a session with no live test.
    #[error("Generate a test first")]
    NoCurrentTest,

    /// The submission failed validation or could not be scored.
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// The embedding backend failed while generating a test.
    #[error("embedding backend error: {0}")]
    Embedding(#[from] EmbeddingError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NoCurrentTest => StatusCode::CONFLICT,
            ApiError::Scoring(_) => StatusCode::BAD_REQUEST,
            ApiError::Embedding(e) => {
                tracing::error!(error = %e, "embedding backend failure during request");
                StatusCode::BAD_GATEWAY
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
