use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use copycheck::document::{self, Document};
use copycheck::{pipeline, report};

/// Copycheck: flag potential plagiarism between two text documents.
///
/// Reads the original and the suspected copy, scores them with cosine
/// similarity over term-frequency vectors, and writes the score as a
/// percentage to the result file.
#[derive(Parser)]
#[command(name = "copycheck", version, about)]
struct Cli {
    /// Path to the original document
    original: PathBuf,

    /// Path to the suspected copy
    copy: PathBuf,

    /// Path the percentage result is written to
    result: PathBuf,
}

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("copycheck=info")),
        )
        .init();

    let cli = Cli::parse();

    let original = Document::load(&cli.original)?;
    let copy = Document::load(&cli.copy)?;

    let score = pipeline::similarity(&original.content, &copy.content);
    info!(
        score,
        original = %original.path.display(),
        copy = %copy.path.display(),
        "Scored document pair"
    );

    let formatted = report::format_percent(score);
    document::write_result(&cli.result, &formatted)?;

    report::display_summary(&formatted, &cli.result);

    Ok(())
}
