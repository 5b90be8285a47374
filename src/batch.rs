//! The batch orchestrator: one call in, one [`BatchSummary`] out.
//!
//! No state survives between batches. Scratch storage (extracted archive
//! contents and staged outputs) lives in one temporary directory whose
//! lifetime is the batch itself; it is released on every exit path.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use rayon::prelude::*;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::archive;
use crate::error::Error;
use crate::transform;
use crate::types::{BatchSummary, InputArtifact, TransformOutcome};

/// Runs one full batch over `artifact`.
///
/// Fails only on batch-fatal conditions: an unreadable archive container, a
/// declared RAR input without RAR support, or scratch/packaging I/O failure.
/// Per-file failures degrade the counts but never abort the batch; completing
/// with partial success is the normal terminal state.
pub fn run_batch(artifact: &InputArtifact) -> Result<BatchSummary, Error> {
    let scratch = tempfile::tempdir()?;

    let entries = archive::enumerate(artifact, scratch.path())?;
    let total_discovered = entries.len();

    // Decode + rewrite on the worker pool. The ordered collect is the
    // synchronization barrier: nothing is staged until every entry finished.
    let converted: Vec<(String, Result<String, TransformOutcome>)> = entries
        .into_par_iter()
        .map(|entry| {
            let result = transform::convert(&entry);
            (entry.relative_name, result)
        })
        .collect();

    let staging_dir = scratch.path().join("staged");
    std::fs::create_dir_all(&staging_dir)?;

    let mut outcomes = Vec::with_capacity(converted.len());
    for (name, result) in converted {
        let outcome = match result {
            Ok(text) => transform::stage(&staging_dir, &name, &text),
            Err(outcome) => outcome,
        };
        debug!(name = %outcome.name, status = ?outcome.status, "entry finished");
        outcomes.push(outcome);
    }

    let processed_names: Vec<String> = outcomes
        .iter()
        .filter(|outcome| outcome.is_success())
        .map(|outcome| outcome.name.clone())
        .collect();
    let total_processed = processed_names.len();

    let output_archive = package(&staging_dir, &processed_names)?;

    info!(
        kind = %artifact.kind,
        total_discovered,
        total_processed,
        "batch complete"
    );

    Ok(BatchSummary {
        total_discovered,
        total_processed,
        processed_names,
        outcomes,
        output_archive,
    })
}

/// Packages every staged file into an in-memory ZIP, one entry per unique
/// succeeded name. The staging directory already holds the collision winner
/// for each name, so duplicates are skipped here.
fn package(staging_dir: &std::path::Path, processed_names: &[String]) -> Result<Vec<u8>, Error> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    let mut seen = HashSet::new();
    for name in processed_names {
        if !seen.insert(name.as_str()) {
            continue;
        }
        let content = std::fs::read(staging_dir.join(name))?;
        writer.start_file(name.clone(), options)?;
        writer.write_all(&content)?;
    }

    Ok(writer.finish()?.into_inner())
}
