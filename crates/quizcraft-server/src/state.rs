//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use quizcraft_core::assembler::TestAssembler;
use quizcraft_core::model::Book;
use quizcraft_core::scoring::ScoringEngine;
use quizcraft_core::session::SessionStore;
use quizcraft_core::traits::{EmbeddingProvider, KeywordExtractor};

/// State shared by all handlers.
///
/// The book and both collaborator services are read-only after startup;
/// the session store is the only mutable piece.
pub struct AppState {
    /// The ingested book being served.
    pub book: Arc<Book>,
    /// Assembles balanced tests.
    pub assembler: TestAssembler,
    /// Grades submissions.
    pub scoring: ScoringEngine,
    /// Session-scoped test storage.
    pub sessions: SessionStore,
    /// When the server started.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        book: Arc<Book>,
        embedder: Arc<dyn EmbeddingProvider>,
        tagger: Arc<dyn KeywordExtractor>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            book,
            assembler: TestAssembler::new(Arc::clone(&embedder), tagger),
            scoring: ScoringEngine::new(embedder),
            sessions: SessionStore::new(session_ttl),
            started_at: Utc::now(),
        }
    }

    /// Seconds since the server started.
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
