//! quizcraft-ingest — document extraction and one-shot book ingestion.
//!
//! Turns a source file into a [`Book`]: extract the text, build the
//! sentence-level vector store, attach the metadata. Runs once at
//! startup; any failure here is fatal to the process rather than a
//! per-request error.

pub mod extract;

use std::path::Path;

use thiserror::Error;

use quizcraft_core::error::EmbeddingError;
use quizcraft_core::model::{Book, BookMetadata};
use quizcraft_core::store::{SearchBackend, VectorStore};
use quizcraft_core::traits::EmbeddingProvider;

/// Errors that can occur while ingesting a document.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not a supported document format.
    #[error("unsupported document format: {0} (expected .txt, .md, or .pdf)")]
    UnsupportedFormat(String),

    /// PDF text extraction failed.
    #[error("pdf extraction failed for {path}: {message}")]
    PdfExtraction { path: String, message: String },

    /// Extraction produced no usable text.
    #[error("no text extracted from {0}")]
    EmptyDocument(String),

    /// The embedding backend failed while building the vector store.
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

/// Ingest a source document into a ready-to-serve [`Book`].
///
/// A document whose sentences all fall under the length filter still
/// ingests into a valid (empty) store; only a document with no text at
/// all is rejected.
pub async fn ingest_book(
    path: &Path,
    metadata: BookMetadata,
    embedder: &dyn EmbeddingProvider,
    backend: SearchBackend,
) -> Result<Book, IngestError> {
    let text = extract::extract_text(path)?;
    if text.trim().is_empty() {
        return Err(IngestError::EmptyDocument(path.display().to_string()));
    }

    let store = VectorStore::build(&text, embedder, backend).await?;

    tracing::info!(
        book_id = %metadata.book_id,
        title = %metadata.title,
        sentences = store.len(),
        "book ingested"
    );

    Ok(Book { metadata, store })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizcraft_providers::MockEmbedder;
    use std::io::Write;

    fn metadata() -> BookMetadata {
        BookMetadata {
            book_id: "OS_001".into(),
            title: "Operating Systems".into(),
            subject: "Computer Science".into(),
        }
    }

    #[tokio::test]
    async fn ingest_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "The operating system kernel schedules processes onto processor cores. \
             Virtual memory gives each process an isolated linear address space."
        )
        .unwrap();

        let embedder = MockEmbedder::new(8);
        let book = ingest_book(&path, metadata(), &embedder, SearchBackend::BruteForceCosine)
            .await
            .unwrap();

        assert_eq!(book.metadata.book_id, "OS_001");
        assert_eq!(book.store.len(), 2);
    }

    #[tokio::test]
    async fn ingest_tolerates_only_short_sentences() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fragments.txt");
        std::fs::write(&path, "Page 1. Fig 2. Chapter 3.").unwrap();

        let embedder = MockEmbedder::new(8);
        let book = ingest_book(&path, metadata(), &embedder, SearchBackend::FlatL2)
            .await
            .unwrap();

        assert!(book.store.is_empty());
    }

    #[tokio::test]
    async fn ingest_empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "   \n").unwrap();

        let embedder = MockEmbedder::new(8);
        let err = ingest_book(&path, metadata(), &embedder, SearchBackend::BruteForceCosine)
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::EmptyDocument(_)));
    }

    #[tokio::test]
    async fn ingest_missing_file_is_an_error() {
        let embedder = MockEmbedder::new(8);
        let err = ingest_book(
            Path::new("/no/such/book.txt"),
            metadata(),
            &embedder,
            SearchBackend::BruteForceCosine,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
