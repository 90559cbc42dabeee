//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizcraft() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizcraft").unwrap()
}

#[test]
fn help_output() {
    quizcraft()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Document-to-assessment service"));
}

#[test]
fn version_output() {
    quizcraft()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizcraft"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizcraft()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizcraft.toml"))
        .stdout(predicate::str::contains("Created books/sample.txt"));

    assert!(dir.path().join("quizcraft.toml").exists());
    assert!(dir.path().join("books/sample.txt").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    quizcraft()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    quizcraft()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_configured_book() {
    let dir = TempDir::new().unwrap();

    quizcraft()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizcraft()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("sentences survive"))
        .stdout(predicate::str::contains("Book looks valid"));
}

#[test]
fn validate_explicit_book() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("notes.txt");
    std::fs::write(
        &book,
        "The kernel scheduler balances runnable processes across processor cores. \
         Virtual memory gives each process an isolated linear address space.",
    )
    .unwrap();

    quizcraft()
        .arg("validate")
        .arg("--book")
        .arg(&book)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 sentences survive"));
}

#[test]
fn validate_warns_on_fragment_only_book() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("fragments.txt");
    std::fs::write(&book, "Page 1. Fig 2. Chapter 3.").unwrap();

    quizcraft()
        .arg("validate")
        .arg("--book")
        .arg(&book)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"));
}

#[test]
fn validate_nonexistent_book() {
    quizcraft()
        .arg("validate")
        .arg("--book")
        .arg("no_such_book.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn generate_json_output() {
    let dir = TempDir::new().unwrap();

    quizcraft()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizcraft()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--topic")
        .arg("memory")
        .arg("--questions")
        .arg("10")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"questions\""))
        .stderr(predicate::str::contains("requested questions"));
}

#[test]
fn generate_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();

    quizcraft()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizcraft()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--topic")
        .arg("memory")
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn generate_without_config_fails_helpfully() {
    let dir = TempDir::new().unwrap();

    quizcraft()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--topic")
        .arg("memory")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
