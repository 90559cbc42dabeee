//! quizcraft-providers — embedding backends and keyword tagging.
//!
//! Implements the `EmbeddingProvider` trait for OpenAI-compatible and
//! Ollama endpoints, a deterministic mock for tests and offline use,
//! and the rule-based `KeywordExtractor` the synthesizer runs on.

pub mod config;
pub mod mock;
pub mod ollama;
pub mod openai;
pub mod tagger;

pub use config::{create_embedder, load_config, ProviderConfig, QuizcraftConfig};
pub use mock::MockEmbedder;
pub use ollama::OllamaEmbedder;
pub use openai::OpenAiEmbedder;
pub use tagger::RuleTagger;
