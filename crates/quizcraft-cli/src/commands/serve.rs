//! The `quizcraft serve` command.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use quizcraft_providers::RuleTagger;
use quizcraft_server::{serve, AppState};

pub async fn execute(config_path: Option<PathBuf>, addr_override: Option<String>) -> Result<()> {
    let (config, embedder) = super::load_setup(config_path.as_ref())?;

    let book = super::ingest_configured_book(&config, embedder.as_ref()).await?;
    eprintln!(
        "Ingested \"{}\" ({} sentences indexed)",
        book.metadata.title,
        book.store.len()
    );

    let addr = addr_override.unwrap_or_else(|| config.listen_addr.clone());
    let state = Arc::new(AppState::new(
        Arc::new(book),
        embedder,
        Arc::new(RuleTagger::new()),
        Duration::from_secs(config.session_ttl_secs),
    ));

    eprintln!("Serving on http://{addr}");
    serve(state, &addr).await?;
    Ok(())
}
