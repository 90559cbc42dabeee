//! Core trait definitions for the embedding and NLP collaborators.
//!
//! These traits are implemented by the `quizcraft-providers` crate.
//! Both services are loaded once at startup and treated as stateless,
//! side-effect-free, and safe to share behind an `Arc`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EmbeddingError;

// ---------------------------------------------------------------------------
// Embedding provider trait
// ---------------------------------------------------------------------------

/// Trait for backends that map text to fixed-dimension vectors.
///
/// Implementations must be deterministic for a fixed model version:
/// the same input yields the same vector across calls.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Human-readable backend name (e.g. "openai").
    fn name(&self) -> &str;

    /// Dimension of every vector this backend produces.
    fn dimension(&self) -> usize;

    /// Embed a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embed a batch of texts, preserving input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

// ---------------------------------------------------------------------------
// Keyword extractor trait
// ---------------------------------------------------------------------------

/// Coarse part-of-speech classes the synthesizer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosTag {
    Noun,
    Verb,
    ProperNoun,
    Other,
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PosTag::Noun => write!(f, "noun"),
            PosTag::Verb => write!(f, "verb"),
            PosTag::ProperNoun => write!(f, "propn"),
            PosTag::Other => write!(f, "other"),
        }
    }
}

/// A token with the linguistic annotations keyword extraction needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The token text as it appeared in the input.
    pub text: String,
    /// Coarse part-of-speech tag.
    pub pos: PosTag,
    /// Whether the token consists entirely of letters.
    pub is_alpha: bool,
    /// Whether the token is a stop word.
    pub is_stop: bool,
}

/// Trait for tokenizing and tagging raw text.
pub trait KeywordExtractor: Send + Sync {
    /// Human-readable extractor name.
    fn name(&self) -> &str;

    /// Tokenize `text` and annotate each token.
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}
