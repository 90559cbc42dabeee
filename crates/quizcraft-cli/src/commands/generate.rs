//! The `quizcraft generate` command — one-shot offline test generation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizcraft_core::assembler::TestAssembler;
use quizcraft_core::model::{Question, Test};
use quizcraft_providers::RuleTagger;

pub async fn execute(
    topic: String,
    questions: usize,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, embedder) = super::load_setup(config_path.as_ref())?;
    let book = super::ingest_configured_book(&config, embedder.as_ref()).await?;

    let assembler = TestAssembler::new(embedder, Arc::new(RuleTagger::new()));
    let mut rng = StdRng::from_entropy();
    let test = assembler
        .generate_balanced_test(&book.store, &topic, questions, &mut rng)
        .await?;

    match format.as_str() {
        "json" => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "questions": &test }))?
            );
        }
        "table" => print_table(&test),
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    eprintln!(
        "\nGenerated {} of {} requested questions on \"{}\"",
        test.len(),
        questions,
        topic
    );
    Ok(())
}

fn print_table(test: &Test) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Type", "Question", "Answer / Options"]);

    for (i, question) in test.iter().enumerate() {
        let (kind, text, detail) = match question {
            Question::Mcq {
                question,
                options,
                correct_answer,
            } => (
                "mcq",
                question.clone(),
                format!("{} | options: {}", correct_answer, options.join(", ")),
            ),
            Question::Descriptive { question, answer } => {
                ("descriptive", question.clone(), answer.clone())
            }
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(kind),
            Cell::new(text),
            Cell::new(detail),
        ]);
    }

    println!("{table}");
}
