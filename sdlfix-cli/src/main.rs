//! Command-line wrapper around the batch pipeline.
//!
//! Marshals bytes in, writes the output archive, and renders the summary as
//! text or JSON. All pipeline logic lives in the `sdlfix` library crate.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sdlfix::{run_batch, InputArtifact, TransformStatus};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sdlfix")]
#[command(
    author,
    version,
    about = "Rewrite machine-translated segment markers in SDLXLIFF files to interactive status"
)]
struct Args {
    /// Input file: a single .sdlxliff document or a ZIP/RAR archive of them
    input: PathBuf,

    /// Where to write the archive of transformed files
    #[arg(short, long, default_value = "processed_output.zip")]
    output: PathBuf,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let artifact = InputArtifact::read_from(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let summary = run_batch(&artifact)
        .with_context(|| format!("failed to process {}", args.input.display()))?;

    std::fs::write(&args.output, &summary.output_archive)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for outcome in &summary.outcomes {
        match outcome.status {
            TransformStatus::Succeeded => println!("  ok      {}", outcome.name),
            TransformStatus::DecodeFailed => println!(
                "  failed  {} (not valid UTF-8{})",
                outcome.name,
                detail_suffix(outcome.error_detail.as_deref())
            ),
            TransformStatus::WriteFailed => println!(
                "  failed  {} (could not stage output{})",
                outcome.name,
                detail_suffix(outcome.error_detail.as_deref())
            ),
        }
    }
    println!(
        "{} of {} file(s) processed.",
        summary.total_processed, summary.total_discovered
    );
    println!("Transformed files written to {}", args.output.display());

    Ok(())
}

fn detail_suffix(detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!(": {detail}"),
        None => String::new(),
    }
}
