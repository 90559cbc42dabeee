pub mod generate;
pub mod init;
pub mod serve;
pub mod validate;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use quizcraft_core::model::{Book, BookMetadata};
use quizcraft_core::traits::EmbeddingProvider;
use quizcraft_ingest::ingest_book;
use quizcraft_providers::config::{create_embedder, load_config_from, QuizcraftConfig};

/// Load config and build the embedding backend it selects.
pub(crate) fn load_setup(
    config_path: Option<&PathBuf>,
) -> Result<(QuizcraftConfig, Arc<dyn EmbeddingProvider>)> {
    let config = load_config_from(config_path.map(|p| p.as_path()))?;

    let provider_config = config
        .providers
        .get(&config.default_provider)
        .with_context(|| {
            format!(
                "provider '{}' not found in config. Available: {:?}",
                config.default_provider,
                config.providers.keys().collect::<Vec<_>>()
            )
        })?;

    let embedder = create_embedder(&config.default_provider, provider_config)?;
    Ok((config, Arc::from(embedder)))
}

/// Ingest the configured book. Failure here is fatal by design: no
/// operation is meaningful without an ingested book.
pub(crate) async fn ingest_configured_book(
    config: &QuizcraftConfig,
    embedder: &dyn EmbeddingProvider,
) -> Result<Book> {
    let book_config = config
        .book
        .as_ref()
        .context("no [book] configured; run `quizcraft init` to create a starter config")?;

    let metadata = BookMetadata {
        book_id: book_config.book_id.clone(),
        title: book_config.title.clone(),
        subject: book_config.subject.clone(),
    };

    let book = ingest_book(
        &book_config.path,
        metadata,
        embedder,
        config.search_backend,
    )
    .await
    .with_context(|| format!("failed to ingest book from {}", book_config.path.display()))?;

    Ok(book)
}
