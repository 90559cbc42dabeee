//! The `quizcraft validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizcraft_core::store::split_sentences;
use quizcraft_ingest::extract::extract_text;
use quizcraft_providers::config::load_config_from;

pub fn execute(book: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let path = match book {
        Some(path) => path,
        None => {
            let config = load_config_from(config_path.as_deref())?;
            config
                .book
                .context("no --book given and no [book] configured")?
                .path
        }
    };

    let text = extract_text(&path)?;
    let total_chars = text.chars().count();
    let sentences = split_sentences(&text);

    println!("Book: {}", path.display());
    println!("  {} characters extracted", total_chars);
    println!("  {} sentences survive the length filter", sentences.len());

    if text.trim().is_empty() {
        println!("  WARNING: extraction produced no text");
    } else if sentences.is_empty() {
        println!("  WARNING: no indexable sentences; every generated test will be empty");
    } else {
        println!("Book looks valid.");
    }

    Ok(())
}
