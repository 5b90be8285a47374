//! Per-file transformation: decode, rewrite, stage.
//!
//! The work is split in two so that decoding and rewriting can run on a
//! worker pool while staging stays single-writer. Both halves report through
//! [`TransformOutcome`]; neither can abort the batch.

use std::path::Path;

use tracing::{debug, warn};

use crate::rules;
use crate::types::{EligibleEntry, TransformOutcome};

/// Decodes one entry as UTF-8 and applies the rewrite rules.
///
/// Returns the rewritten text, or a `DecodeFailed` outcome for bytes that are
/// not valid UTF-8. Pure: no side effects, safe to call from any thread.
pub(crate) fn convert(entry: &EligibleEntry) -> Result<String, TransformOutcome> {
    match std::str::from_utf8(&entry.content) {
        Ok(text) => Ok(rules::transform(text)),
        Err(e) => {
            warn!(name = %entry.relative_name, error = %e, "entry is not valid UTF-8, skipping");
            Err(TransformOutcome::decode_failed(&entry.relative_name, e))
        }
    }
}

/// Stages rewritten text under `staging_dir`, keyed by the entry name.
///
/// The filesystem is the name-keyed staging structure: writing an existing
/// name overwrites it, which is exactly the last-write-wins collision policy
/// of the flattened traversal. A failed write is reported as `WriteFailed`
/// and leaves nothing for packaging to pick up under that name.
pub(crate) fn stage(staging_dir: &Path, name: &str, text: &str) -> TransformOutcome {
    match std::fs::write(staging_dir.join(name), text) {
        Ok(()) => {
            debug!(name, bytes = text.len(), "staged transformed file");
            TransformOutcome::succeeded(name)
        }
        Err(e) => {
            warn!(name, error = %e, "failed to stage transformed file");
            TransformOutcome::write_failed(name, e)
        }
    }
}
