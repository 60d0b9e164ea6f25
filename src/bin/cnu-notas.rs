//! CNU results extractor CLI
//!
//! Converts the three B4-15-A result sheets with pdftotext and writes the
//! merged scores to `notas_b4_15_a.csv` in the base directory.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use cnu_notas::pipeline::{run, ExtractOptions};
use cnu_notas::text::Pdftotext;

/// Extract CNU B4-15-A exam results from PDFs into a merged CSV
#[derive(Parser)]
#[command(name = "cnu-notas")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "INPUT FILES (inside BASE_DIR):
    objetiva cnu.pdf
    discursiva cnu B4-15-A.pdf
    titulos cnu B4-15-A.pdf

An optional header_patterns.txt in BASE_DIR replaces the built-in list
of page header patterns (one substring per line).

Requires pdftotext (Poppler) on PATH.")]
struct Cli {
    /// Directory containing the PDFs; the CSV is written here too
    #[arg(default_value = ".")]
    base_dir: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    if let Err(e) = cmd_extract(cli.base_dir) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Run the extraction for one base directory
fn cmd_extract(base_dir: PathBuf) -> anyhow::Result<()> {
    let options = ExtractOptions::for_base_dir(&base_dir);

    let summary = run(&options, &Pdftotext::default())
        .with_context(|| format!("Extraction in {} failed", base_dir.display()))?;

    println!("Wrote {} rows to {}", summary.rows, options.output_path.display());

    Ok(())
}
