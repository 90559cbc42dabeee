//! Test assembler: difficulty split, retrieval sizing, and balanced
//! test construction.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EmbeddingError;
use crate::model::Test;
use crate::retrieval::retrieve;
use crate::store::VectorStore;
use crate::synth::{generate_descriptive, generate_mcqs};
use crate::traits::{EmbeddingProvider, KeywordExtractor};

/// Smallest context retrieval, in sentences.
pub const MIN_RETRIEVAL_SIZE: usize = 40;
/// Largest context retrieval, in sentences.
pub const MAX_RETRIEVAL_SIZE: usize = 120;

/// Allocation of a question budget across difficulty buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySplit {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

/// Split `total` questions into easy/medium/hard buckets.
///
/// The hard bucket is the remainder against `floor(0.8 * total)` rather
/// than `floor(0.2 * total)`; the two differ for some totals, and the
/// remainder form is deliberate.
pub fn difficulty_split(total: usize) -> DifficultySplit {
    let easy = (total as f64 * 0.4) as usize;
    let medium = (total as f64 * 0.4) as usize;
    let hard = total - (total as f64 * 0.8) as usize;
    DifficultySplit { easy, medium, hard }
}

/// How many sentences to retrieve as context for a test of
/// `question_count` questions: twice the count, clamped to
/// [[`MIN_RETRIEVAL_SIZE`], [`MAX_RETRIEVAL_SIZE`]].
pub fn retrieval_size(question_count: usize) -> usize {
    (question_count * 2).clamp(MIN_RETRIEVAL_SIZE, MAX_RETRIEVAL_SIZE)
}

/// Assembles balanced tests from a vector store.
///
/// Difficulty is not modeled independently of question format: the easy
/// bucket becomes multiple-choice questions and the medium + hard
/// buckets become descriptive questions, all synthesized from one
/// retrieved context.
pub struct TestAssembler {
    embedder: Arc<dyn EmbeddingProvider>,
    tagger: Arc<dyn KeywordExtractor>,
}

impl TestAssembler {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, tagger: Arc<dyn KeywordExtractor>) -> Self {
        Self { embedder, tagger }
    }

    /// Generate a difficulty-balanced test about `topic`.
    ///
    /// The result may be shorter than `total_questions` when the corpus
    /// or its keyword pool is too thin; callers must treat a short test
    /// as valid.
    pub async fn generate_balanced_test(
        &self,
        store: &VectorStore,
        topic: &str,
        total_questions: usize,
        rng: &mut impl Rng,
    ) -> Result<Test, EmbeddingError> {
        let split = difficulty_split(total_questions);
        let k = retrieval_size(total_questions);

        let sentences = retrieve(store, self.embedder.as_ref(), topic, k).await?;
        let context = sentences.join(" ");

        let mut test = generate_mcqs(self.tagger.as_ref(), &context, split.easy, rng);
        test.extend(generate_descriptive(
            self.tagger.as_ref(),
            &context,
            split.medium + split.hard,
        ));

        tracing::info!(
            topic,
            requested = total_questions,
            generated = test.len(),
            context_sentences = sentences.len(),
            "test assembled"
        );

        Ok(test)
    }
}
