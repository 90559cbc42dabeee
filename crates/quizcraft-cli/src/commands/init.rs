//! The `quizcraft init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizcraft.toml
    if std::path::Path::new("quizcraft.toml").exists() {
        println!("quizcraft.toml already exists, skipping.");
    } else {
        std::fs::write("quizcraft.toml", SAMPLE_CONFIG)?;
        println!("Created quizcraft.toml");
    }

    // Create sample book
    std::fs::create_dir_all("books")?;
    let book_path = std::path::Path::new("books/sample.txt");
    if book_path.exists() {
        println!("books/sample.txt already exists, skipping.");
    } else {
        std::fs::write(book_path, SAMPLE_BOOK)?;
        println!("Created books/sample.txt");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizcraft.toml: point [book] at your document and pick a provider");
    println!("  2. Run: quizcraft validate");
    println!("  3. Run: quizcraft generate --topic \"memory\" --questions 10");
    println!("  4. Run: quizcraft serve");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizcraft configuration

# The mock provider embeds deterministically with no backend; switch
# default_provider to "openai" or "ollama" for real embeddings.
default_provider = "mock"
search_backend = "brute-force-cosine"
session_ttl_secs = 3600
listen_addr = "127.0.0.1:8000"

[providers.mock]
type = "mock"
dimension = 384

[providers.openai]
type = "openai"
api_key = "${QUIZCRAFT_OPENAI_KEY}"

[providers.ollama]
type = "ollama"
base_url = "http://localhost:11434"
model = "nomic-embed-text"
dimension = 768

[book]
path = "books/sample.txt"
book_id = "SAMPLE_001"
title = "Operating Systems Primer"
subject = "Computer Science"
"#;

const SAMPLE_BOOK: &str = "\
The operating system kernel multiplexes processor time across runnable processes. \
The scheduler picks the next runnable process using priorities and fairness heuristics. \
Virtual memory gives every process the illusion of a private linear address space. \
Page tables translate virtual addresses into physical frame numbers on every access. \
The translation lookaside buffer caches recent translations to keep lookups fast. \
When memory runs short the kernel evicts cold pages to the swap device. \
The filesystem stores metadata in inodes and file contents in data blocks. \
A journal records pending metadata updates so crashes cannot corrupt the filesystem. \
Interrupt handlers acknowledge hardware quickly and defer slow work to kernel threads. \
Device drivers expose uniform read and write interfaces over wildly different hardware.\n";
