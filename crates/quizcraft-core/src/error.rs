//! Error types for the core engines.
//!
//! `EmbeddingError` is defined here rather than in `quizcraft-providers`
//! so the engines can classify failures (fatal at ingestion, recoverable
//! at request time) without string matching.

use thiserror::Error;

/// Errors that can occur when calling an embedding backend.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The API returned a 429 rate limit response.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The requested embedding model was not found.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The backend returned a malformed or empty payload.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl EmbeddingError {
    /// Returns `true` if this error is permanent and should not be retried.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            EmbeddingError::AuthenticationFailed(_) | EmbeddingError::ModelNotFound(_)
        )
    }
}

/// Errors that can occur during question synthesis.
#[derive(Debug, Error)]
pub enum SynthError {
    /// The keyword pool does not hold enough distinct candidates that
    /// differ from the correct answer. Without this check, sampling
    /// distractors from the pool could never terminate.
    #[error("insufficient distractor pool: needed {needed}, only {available} distinct candidates")]
    InsufficientDistractorPool { needed: usize, available: usize },
}

/// Errors that can occur when grading a submission.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Scoring an empty test would divide by zero.
    #[error("cannot score an empty test")]
    EmptyTest,

    /// The number of submitted answers does not match the test length.
    #[error("answer count mismatch: test has {expected} questions, got {got} answers")]
    AnswerCountMismatch { expected: usize, got: usize },
}
