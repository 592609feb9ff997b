//! spam-rs: command line spam detector
//!
//! Trains a classifier on the configured corpus (or the built-in samples)
//! and classifies the given text.
//!
//! # Usage
//!
//! ```bash
//! # Classify a message
//! spam-rs classify "Get rich quick! Buy now!"
//!
//! # Classify stdin with a custom corpus, JSON output
//! cat mail.txt | spam-rs --corpus corpus.jsonl classify --json
//!
//! # Show model statistics
//! spam-rs --config spam.toml stats
//! ```

use clap::{Parser, Subcommand};
use spam_rs::classifier::{default_corpus, load_corpus};
use spam_rs::{Config, SpamDetector};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "spam-rs")]
#[command(about = "Classify email content as spam or legitimate", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Training corpus (JSON array or .jsonl), overrides the config file
    #[arg(long)]
    corpus: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a message
    Classify {
        /// Message text; read from stdin when omitted
        text: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show model statistics
    Stats,
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("spam_rs={}", config.logging.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    match config.logging.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        "compact" => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    init_logging(&config);

    let corpus_path = cli
        .corpus
        .clone()
        .or_else(|| config.training.corpus_path.as_ref().map(PathBuf::from));

    let corpus = match &corpus_path {
        Some(path) => load_corpus(path)?,
        None => {
            info!("No corpus specified, using built-in samples");
            default_corpus()
        }
    };

    let detector = SpamDetector::new(config);
    detector.train(&corpus).await;

    match cli.command {
        Commands::Classify { text, json } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };

            let result = detector.classify(&text).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.is_spam() {
                println!("Potential Spam Detected");
                println!("Confidence: {:.2}%", result.confidence * 100.0);
            } else {
                println!("Likely Legitimate Email");
                println!("Confidence: {:.2}%", result.confidence * 100.0);
            }
        }
        Commands::Stats => {
            let stats = detector.stats().await;
            println!("Training examples: {}", corpus.len());
            println!("Vocabulary size:   {}", stats.model.vocabulary_size);
            println!(
                "Spam tokens:       {} ({} distinct)",
                stats.model.spam_total, stats.model.spam_distinct
            );
            println!(
                "Ham tokens:        {} ({} distinct)",
                stats.model.ham_total, stats.model.ham_distinct
            );
        }
    }

    Ok(())
}
