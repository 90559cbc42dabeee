//! quizcraft CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quizcraft",
    version,
    about = "Document-to-assessment service: retrieval-backed quiz generation and grading"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest the configured book and serve the HTTP API
    Serve {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured listen address
        #[arg(long)]
        addr: Option<String>,
    },

    /// Generate a test offline and print it
    Generate {
        /// Topic to retrieve context for
        #[arg(long)]
        topic: String,

        /// Number of questions to request
        #[arg(long, default_value = "10")]
        questions: usize,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check that the configured book extracts into usable sentences
    Validate {
        /// Book file to check (defaults to the configured book)
        #[arg(long)]
        book: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and a sample book
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizcraft=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { config, addr } => commands::serve::execute(config, addr).await,
        Commands::Generate {
            topic,
            questions,
            format,
            config,
        } => commands::generate::execute(topic, questions, format, config).await,
        Commands::Validate { book, config } => commands::validate::execute(book, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
