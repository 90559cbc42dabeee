//! Request handlers for the three exposed operations.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quizcraft_core::model::{SubmissionResult, Test};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /generate-test`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateTestRequest {
    /// Topic to retrieve context for.
    pub topic: String,
    /// Requested question count; the generated test may be shorter when
    /// the corpus is thin.
    pub total_questions: usize,
}

/// Response body for `POST /generate-test`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateTestResponse {
    /// Session holding this test; submit answers against it.
    pub session_id: Uuid,
    /// The generated questions, in grading order.
    pub questions: Test,
}

/// Generate a balanced test and store it in a fresh session.
pub async fn generate_test(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateTestRequest>,
) -> Result<Json<GenerateTestResponse>, ApiError> {
    // ThreadRng is not Send, so it cannot live across the await below.
    let mut rng = StdRng::from_entropy();
    let test = state
        .assembler
        .generate_balanced_test(
            &state.book.store,
            &request.topic,
            request.total_questions,
            &mut rng,
        )
        .await?;

    let session_id = state.sessions.insert(test.clone());

    Ok(Json(GenerateTestResponse {
        session_id,
        questions: test,
    }))
}

/// Request body for `POST /submit-test`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitTestRequest {
    /// Session returned by generate-test. Absent or unknown ids mean
    /// there is no test to grade.
    #[serde(default)]
    pub session_id: Option<Uuid>,
    /// Answers paired positionally with the test's questions.
    pub answers: Vec<String>,
}

/// Grade a submission against its session's test.
pub async fn submit_test(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitTestRequest>,
) -> Result<Json<SubmissionResult>, ApiError> {
    let session_id = request.session_id.ok_or(ApiError::NoCurrentTest)?;
    let test = state
        .sessions
        .get(session_id)
        .ok_or(ApiError::NoCurrentTest)?;

    let result = state.scoring.submit_test(&test, &request.answers).await?;
    Ok(Json(result))
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Human-readable status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: i64,
    /// Identifier of the served book.
    pub book_id: String,
}

/// Health probe.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "quizcraft api running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        book_id: state.book.metadata.book_id.clone(),
    })
}
