//! Scoring engine: per-question grading and submission aggregation.
//!
//! MCQs are graded by exact, case-sensitive string equality. Descriptive
//! answers are graded by cosine similarity between the learner's answer
//! and the reference answer, scaled to a 0–10 integer. A grading failure
//! on one descriptive question (embedding backend down, malformed input)
//! scores that question 0 and records the error instead of aborting the
//! whole submission.

use std::sync::Arc;

use crate::error::{EmbeddingError, ScoringError};
use crate::model::{Question, QuestionScore, SubmissionResult};
use crate::store::cosine_similarity;
use crate::traits::EmbeddingProvider;

/// Points available for a multiple-choice question.
pub const MCQ_MAX_SCORE: u32 = 1;
/// Points available for a descriptive question.
pub const DESCRIPTIVE_MAX_SCORE: u32 = 10;

/// Map a cosine similarity to a 0–10 integer score.
///
/// Scaled by 10, rounded to nearest, clamped; negative similarities
/// clamp to 0.
pub fn similarity_to_score(similarity: f32) -> u32 {
    (f64::from(similarity) * 10.0).round().clamp(0.0, 10.0) as u32
}

/// Grades submissions against a test.
pub struct ScoringEngine {
    embedder: Arc<dyn EmbeddingProvider>,
}

impl ScoringEngine {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { embedder }
    }

    /// Grade `answers` against `test`, pairing by position.
    ///
    /// The answer count must equal the question count; a mismatch is a
    /// validation error rather than silent truncation, and an empty test
    /// cannot be scored at all.
    pub async fn submit_test(
        &self,
        test: &[Question],
        answers: &[String],
    ) -> Result<SubmissionResult, ScoringError> {
        if test.is_empty() {
            return Err(ScoringError::EmptyTest);
        }
        if answers.len() != test.len() {
            return Err(ScoringError::AnswerCountMismatch {
                expected: test.len(),
                got: answers.len(),
            });
        }

        let mut total: u32 = 0;
        let mut max_total: u32 = 0;
        let mut results = Vec::with_capacity(test.len());

        for (question, answer) in test.iter().zip(answers) {
            let (score, error) = match question {
                Question::Mcq { correct_answer, .. } => {
                    let score = u32::from(answer == correct_answer);
                    (score, None)
                }
                Question::Descriptive { answer: reference, .. } => {
                    match self.grade_descriptive(answer, reference).await {
                        Ok(score) => (score, None),
                        Err(e) => {
                            tracing::warn!(
                                question = question.question_text(),
                                error = %e,
                                "descriptive grading failed, scoring 0"
                            );
                            (0, Some(e.to_string()))
                        }
                    }
                }
            };

            let max_score = question.max_score();
            total += score;
            max_total += max_score;
            results.push(QuestionScore {
                question: question.question_text().to_string(),
                score,
                max_score,
                error,
            });
        }

        let percentage = round2(f64::from(total) / f64::from(max_total) * 100.0);

        Ok(SubmissionResult {
            percentage,
            results,
        })
    }

    async fn grade_descriptive(
        &self,
        answer: &str,
        reference: &str,
    ) -> Result<u32, EmbeddingError> {
        let answer_embedding = self.embedder.embed(answer).await?;
        let reference_embedding = self.embedder.embed(reference).await?;
        let similarity = cosine_similarity(&answer_embedding, &reference_embedding);
        Ok(similarity_to_score(similarity))
    }
}

/// Round to two decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
