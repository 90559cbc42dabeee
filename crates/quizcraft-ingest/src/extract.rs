//! Document-to-text extraction.
//!
//! Plain text and markdown are read directly; PDFs go through the
//! `pdftotext` system binary (poppler-utils) writing to stdout.

use std::path::Path;
use std::process::Command;

use crate::IngestError;

/// Extract the full text of a document, dispatching on file extension.
pub fn extract_text(path: &Path) -> Result<String, IngestError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "txt" | "md" => std::fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        }),
        "pdf" => extract_pdf_text(path),
        other => Err(IngestError::UnsupportedFormat(other.to_string())),
    }
}

/// Run `pdftotext <path> -` and capture the text from stdout.
fn extract_pdf_text(path: &Path) -> Result<String, IngestError> {
    tracing::info!(path = %path.display(), "extracting pdf text with pdftotext");

    let output = Command::new("pdftotext")
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| IngestError::PdfExtraction {
            path: path.display().to_string(),
            message: format!("failed to run pdftotext (is poppler-utils installed?): {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(IngestError::PdfExtraction {
            path: path.display().to_string(),
            message: format!("pdftotext exited with {}: {}", output.status, stderr.trim()),
        });
    }

    let text = String::from_utf8_lossy(&output.stdout).to_string();
    if text.trim().is_empty() {
        tracing::warn!(path = %path.display(), "pdftotext extracted no text");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "hello world").unwrap();

        assert_eq!(extract_text(&path).unwrap(), "hello world");
    }

    #[test]
    fn reads_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "# Title\n\nBody text.").unwrap();

        assert!(extract_text(&path).unwrap().contains("Body text."));
    }

    #[test]
    fn extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.TXT");
        std::fs::write(&path, "upper case extension").unwrap();

        assert!(extract_text(&path).is_ok());
    }

    #[test]
    fn rejects_unknown_format() {
        let err = extract_text(Path::new("book.epub")).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat(ref f) if f == "epub"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = extract_text(Path::new("/no/such/doc.txt")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
