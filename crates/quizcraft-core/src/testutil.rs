//! Shared test doubles for the core engine tests.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use crate::error::EmbeddingError;
use crate::traits::{EmbeddingProvider, KeywordExtractor, PosTag, TaggedToken};

/// Deterministic in-process embedder: fixed vectors for registered
/// texts, a hash-derived unit vector otherwise.
pub struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    dimension: usize,
}

impl StubEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            vectors: HashMap::new(),
            dimension,
        }
    }

    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        if let Some(v) = self.vectors.get(text) {
            return v.clone();
        }
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut seed = hasher.finish();
        let mut v = Vec::with_capacity(self.dimension);
        for _ in 0..self.dimension {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            v.push(((seed >> 33) as f32 / u32::MAX as f32) - 0.5);
        }
        v
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbedder {
    fn name(&self) -> &str {
        "stub"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.vector_for(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|t| self.vector_for(t)).collect())
    }
}

/// Embedder that always fails, for error-path tests.
pub struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    fn name(&self) -> &str {
        "failing"
    }

    fn dimension(&self) -> usize {
        2
    }

    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::NetworkError("connection refused".into()))
    }

    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Err(EmbeddingError::NetworkError("connection refused".into()))
    }
}

/// Whitespace tokenizer that tags every alphabetic token as a noun,
/// except for a configurable stop list.
pub struct StubTagger {
    stops: Vec<String>,
}

impl StubTagger {
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    pub fn with_stops(stops: &[&str]) -> Self {
        Self {
            stops: stops.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl KeywordExtractor for StubTagger {
    fn name(&self) -> &str {
        "stub"
    }

    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        text.split_whitespace()
            .map(|raw| {
                let token = raw.trim_matches(|c: char| !c.is_alphanumeric());
                TaggedToken {
                    text: token.to_string(),
                    pos: PosTag::Noun,
                    is_alpha: !token.is_empty() && token.chars().all(char::is_alphabetic),
                    is_stop: self.stops.iter().any(|s| s.eq_ignore_ascii_case(token)),
                }
            })
            .collect()
    }
}
