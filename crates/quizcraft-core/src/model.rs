//! Core data model types for quizcraft.
//!
//! These are the fundamental types the rest of the system uses to
//! represent books, generated questions, and graded submissions.

use serde::{Deserialize, Serialize};

use crate::store::VectorStore;

/// Identifying metadata for an ingested book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookMetadata {
    /// Stable identifier for the book (e.g. "OS_001").
    pub book_id: String,
    /// Human-readable title.
    pub title: String,
    /// Subject area the book belongs to.
    #[serde(default)]
    pub subject: String,
}

/// An ingested source document with its sentence-level embedding index.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug)]
pub struct Book {
    /// Identifying metadata.
    pub metadata: BookMetadata,
    /// Sentence embeddings for retrieval.
    pub store: VectorStore,
}

/// A single generated question.
///
/// The `type` tag on the wire is `"mcq"` or `"descriptive"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Question {
    /// Multiple-choice: four options, exactly one correct.
    Mcq {
        question: String,
        options: Vec<String>,
        correct_answer: String,
    },
    /// Free-text question graded by semantic similarity against a
    /// templated reference answer.
    Descriptive { question: String, answer: String },
}

impl Question {
    /// The question text shown to the learner.
    pub fn question_text(&self) -> &str {
        match self {
            Question::Mcq { question, .. } => question,
            Question::Descriptive { question, .. } => question,
        }
    }

    /// Maximum score a learner can earn on this question.
    pub fn max_score(&self) -> u32 {
        match self {
            Question::Mcq { .. } => crate::scoring::MCQ_MAX_SCORE,
            Question::Descriptive { .. } => crate::scoring::DESCRIPTIVE_MAX_SCORE,
        }
    }
}

/// An ordered sequence of questions.
///
/// Order is significant: scoring pairs submitted answers with questions
/// by position.
pub type Test = Vec<Question>;

/// Per-question grading outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionScore {
    /// The question text that was graded.
    pub question: String,
    /// Points earned.
    pub score: u32,
    /// Points available.
    pub max_score: u32,
    /// Set when grading this question failed and it was scored 0
    /// instead of aborting the whole submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The graded result of a submitted test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Overall score as a percentage in [0, 100], rounded to two
    /// decimal places.
    pub percentage: f64,
    /// Per-question breakdown, in test order.
    pub results: Vec<QuestionScore>,
}
