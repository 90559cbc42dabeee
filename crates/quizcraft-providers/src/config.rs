//! Configuration loading and embedder factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizcraft_core::store::SearchBackend;
use quizcraft_core::traits::EmbeddingProvider;

use crate::mock::MockEmbedder;
use crate::ollama::OllamaEmbedder;
use crate::openai::OpenAiEmbedder;

/// Configuration for a single embedding backend.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure
/// in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    OpenAI {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        dimension: Option<usize>,
    },
    Ollama {
        #[serde(default = "default_ollama_url")]
        base_url: String,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        dimension: Option<usize>,
    },
    Mock {
        #[serde(default = "default_mock_dimension")]
        dimension: usize,
    },
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderConfig::OpenAI {
                api_key: _,
                base_url,
                model,
                dimension,
            } => f
                .debug_struct("OpenAI")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .field("model", model)
                .field("dimension", dimension)
                .finish(),
            ProviderConfig::Ollama {
                base_url,
                model,
                dimension,
            } => f
                .debug_struct("Ollama")
                .field("base_url", base_url)
                .field("model", model)
                .field("dimension", dimension)
                .finish(),
            ProviderConfig::Mock { dimension } => f
                .debug_struct("Mock")
                .field("dimension", dimension)
                .finish(),
        }
    }
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_mock_dimension() -> usize {
    384
}

/// The book a quizcraft process serves assessments for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookConfig {
    /// Path to the source document (.txt, .md, or .pdf).
    pub path: PathBuf,
    /// Stable book identifier.
    pub book_id: String,
    /// Human-readable title.
    pub title: String,
    /// Subject area.
    #[serde(default)]
    pub subject: String,
}

/// Top-level quizcraft configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizcraftConfig {
    /// Embedding backend configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Backend used for ingestion, retrieval, and grading.
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Nearest-neighbor search path for the vector store.
    #[serde(default)]
    pub search_backend: SearchBackend,
    /// Session lifetime for generated tests, in seconds.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
    /// Address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// The book to ingest at startup.
    #[serde(default)]
    pub book: Option<BookConfig>,
}

fn default_provider() -> String {
    "openai".to_string()
}
fn default_session_ttl() -> u64 {
    3600
}
fn default_listen_addr() -> String {
    "127.0.0.1:8000".to_string()
}

impl Default for QuizcraftConfig {
    fn default() -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider(),
            search_backend: SearchBackend::default(),
            session_ttl_secs: default_session_ttl(),
            listen_addr: default_listen_addr(),
            book: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a provider config.
fn resolve_provider_config(config: &ProviderConfig) -> ProviderConfig {
    match config {
        ProviderConfig::OpenAI {
            api_key,
            base_url,
            model,
            dimension,
        } => ProviderConfig::OpenAI {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
            model: model.clone(),
            dimension: *dimension,
        },
        ProviderConfig::Ollama {
            base_url,
            model,
            dimension,
        } => ProviderConfig::Ollama {
            base_url: resolve_env_vars(base_url),
            model: model.clone(),
            dimension: *dimension,
        },
        ProviderConfig::Mock { dimension } => ProviderConfig::Mock {
            dimension: *dimension,
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizcraft.toml` in the current directory
/// 2. `~/.config/quizcraft/config.toml`
///
/// Environment variable override: `QUIZCRAFT_OPENAI_KEY`.
pub fn load_config() -> Result<QuizcraftConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizcraftConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizcraft.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizcraftConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizcraftConfig::default(),
    };

    // Apply env var override
    if let Ok(key) = std::env::var("QUIZCRAFT_OPENAI_KEY") {
        config
            .providers
            .entry("openai".into())
            .or_insert(ProviderConfig::OpenAI {
                api_key: String::new(),
                base_url: None,
                model: None,
                dimension: None,
            });
        if let Some(ProviderConfig::OpenAI { api_key, .. }) = config.providers.get_mut("openai") {
            *api_key = key;
        }
    }

    // Resolve env vars in all provider configs
    let resolved: HashMap<String, ProviderConfig> = config
        .providers
        .iter()
        .map(|(k, v)| (k.clone(), resolve_provider_config(v)))
        .collect();
    config.providers = resolved;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizcraft"))
}

/// Create an embedding backend instance from its configuration.
pub fn create_embedder(name: &str, config: &ProviderConfig) -> Result<Box<dyn EmbeddingProvider>> {
    match config {
        ProviderConfig::OpenAI {
            api_key,
            base_url,
            model,
            dimension,
        } => {
            let mut embedder = OpenAiEmbedder::new(api_key, base_url.clone());
            if let (Some(model), Some(dimension)) = (model, dimension) {
                embedder = embedder.with_model(model, *dimension);
            }
            Ok(Box::new(embedder))
        }
        ProviderConfig::Ollama {
            base_url,
            model,
            dimension,
        } => {
            let _ = name;
            let mut embedder = OllamaEmbedder::new(base_url);
            if let (Some(model), Some(dimension)) = (model, dimension) {
                embedder = embedder.with_model(model, *dimension);
            }
            Ok(Box::new(embedder))
        }
        ProviderConfig::Mock { dimension } => Ok(Box::new(MockEmbedder::new(*dimension))),
    }
}
