//! Sentence-level vector store with two interchangeable search paths.
//!
//! The store is write-once: it is built from a document's full text at
//! ingestion and never mutated afterwards, so `sentences[i]` and
//! `embeddings[i]` stay positionally aligned for the process lifetime.
//!
//! Search is a construction-time choice between two exact scans:
//! brute-force cosine similarity (no index) and a flat L2 index built
//! once over the embedding set. The two paths rank by different metrics
//! (angular vs. euclidean over the same vectors), so their results agree
//! in spirit but are not guaranteed bit-identical; both break ties by
//! ascending corpus position so repeated identical queries return
//! identical results.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EmbeddingError;
use crate::traits::EmbeddingProvider;

/// Segments shorter than this (after trimming) are discarded at build
/// time: headers, page numbers, and fragment noise.
pub const MIN_SENTENCE_CHARS: usize = 30;

/// Which nearest-neighbor search path a store uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchBackend {
    /// Rank every sentence by cosine similarity at query time.
    BruteForceCosine,
    /// Build a flat L2 index once and scan it by squared distance.
    FlatL2,
}

impl Default for SearchBackend {
    fn default() -> Self {
        SearchBackend::BruteForceCosine
    }
}

impl fmt::Display for SearchBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBackend::BruteForceCosine => write!(f, "brute-force-cosine"),
            SearchBackend::FlatL2 => write!(f, "flat-l2"),
        }
    }
}

impl FromStr for SearchBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brute-force-cosine" | "cosine" => Ok(SearchBackend::BruteForceCosine),
            "flat-l2" | "l2" => Ok(SearchBackend::FlatL2),
            other => Err(format!("unknown search backend: {other}")),
        }
    }
}

/// Exact nearest-neighbor index over a fixed vector set, L2 metric.
///
/// Built once at store construction and never updated.
#[derive(Debug, Clone)]
pub struct FlatL2Index {
    vectors: Vec<Vec<f32>>,
}

impl FlatL2Index {
    pub fn new(vectors: Vec<Vec<f32>>) -> Self {
        Self { vectors }
    }

    /// Positions of the `k` vectors closest to `query` by squared L2
    /// distance, ascending; ties resolved by ascending position.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<usize> {
        let mut ranked: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .map(|v| squared_l2_distance(query, v))
            .enumerate()
            .collect();
        ranked.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(k);
        ranked.into_iter().map(|(i, _)| i).collect()
    }
}

/// Aligned sentences and embeddings for one document.
#[derive(Debug)]
pub struct VectorStore {
    sentences: Vec<String>,
    embeddings: Vec<Vec<f32>>,
    index: Option<FlatL2Index>,
}

impl VectorStore {
    /// Build a store from raw document text.
    ///
    /// Sentences are split on `'.'`, trimmed, and kept only when longer
    /// than [`MIN_SENTENCE_CHARS`]. A text where nothing survives the
    /// filter yields a valid empty store; retrieval on it returns no
    /// results rather than failing.
    pub async fn build(
        text: &str,
        embedder: &dyn EmbeddingProvider,
        backend: SearchBackend,
    ) -> Result<Self, EmbeddingError> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            tracing::warn!("no sentences survived the length filter; store is empty");
            return Ok(Self {
                sentences,
                embeddings: Vec::new(),
                index: None,
            });
        }

        let embeddings = embedder.embed_batch(&sentences).await?;
        if embeddings.len() != sentences.len() {
            return Err(EmbeddingError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                sentences.len(),
                embeddings.len()
            )));
        }

        let index = match backend {
            SearchBackend::BruteForceCosine => None,
            SearchBackend::FlatL2 => Some(FlatL2Index::new(embeddings.clone())),
        };

        tracing::info!(
            sentences = sentences.len(),
            backend = %backend,
            "vector store built"
        );

        Ok(Self {
            sentences,
            embeddings,
            index,
        })
    }

    /// Number of indexed sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The indexed sentences, in corpus order.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Whether the accelerated index was built.
    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }

    /// Positions of the `k` sentences most relevant to the query vector.
    ///
    /// Dispatches to the flat L2 index when present, otherwise ranks all
    /// embeddings by descending cosine similarity.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<usize> {
        if let Some(index) = &self.index {
            return index.search(query, k);
        }

        let mut ranked: Vec<(usize, f32)> = self
            .embeddings
            .iter()
            .map(|v| cosine_similarity(query, v))
            .enumerate()
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(k);
        ranked.into_iter().map(|(i, _)| i).collect()
    }
}

/// Split raw text into candidate sentences on the terminator delimiter,
/// trimming whitespace and dropping short fragments.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

fn squared_l2_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
