//! Mock embedding backend for testing and offline runs.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use quizcraft_core::error::EmbeddingError;
use quizcraft_core::traits::EmbeddingProvider;

/// A deterministic in-process embedder.
///
/// Registered texts map to fixed vectors; everything else gets a vector
/// derived from a hash of the text, so identical inputs always embed
/// identically — enough for exercising retrieval and scoring without a
/// backend.
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    dimension: usize,
    call_count: AtomicU32,
}

impl MockEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            vectors: HashMap::new(),
            dimension,
            call_count: AtomicU32::new(0),
        }
    }

    /// Register a fixed vector for a specific text.
    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    /// Number of embed calls made (batch items count individually).
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
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
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            v.push(((seed >> 33) as f32 / u32::MAX as f32) - 0.5);
        }
        v
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbedder {
    fn name(&self) -> &str {
        "mock"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(self.vector_for(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.call_count
            .fetch_add(texts.len() as u32, Ordering::Relaxed);
        Ok(texts.iter().map(|t| self.vector_for(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registered_vector_wins() {
        let embedder = MockEmbedder::new(2).with_vector("kernel", vec![1.0, 0.0]);
        assert_eq!(embedder.embed("kernel").await.unwrap(), vec![1.0, 0.0]);
    }

    #[tokio::test]
    async fn fallback_is_deterministic() {
        let embedder = MockEmbedder::new(8);
        let first = embedder.embed("unregistered text").await.unwrap();
        let second = embedder.embed("unregistered text").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }

    #[tokio::test]
    async fn distinct_texts_get_distinct_vectors() {
        let embedder = MockEmbedder::new(8);
        let a = embedder.embed("one").await.unwrap();
        let b = embedder.embed("two").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn counts_calls() {
        let embedder = MockEmbedder::new(2);
        embedder.embed("a").await.unwrap();
        embedder
            .embed_batch(&["b".to_string(), "c".to_string()])
            .await
            .unwrap();
        assert_eq!(embedder.call_count(), 3);
    }
}
