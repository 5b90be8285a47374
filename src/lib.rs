#![forbid(unsafe_code)]
//! Batch rewrite of machine-translation origin markers in SDLXLIFF files.
//!
//! SDLXLIFF producers mark machine-translated segments with
//! `origin="mt" origin-system="..."` attribute pairs, optionally preceded by
//! a confidence attribute. This crate rewrites those markers to interactive
//! status so downstream translation-memory tools treat the segments as
//! ordinary human-editable content, while preserving every other byte of the
//! file.
//!
//! Input is a single `.sdlxliff` file or a ZIP archive containing any number
//! of them (RAR behind the `rar` cargo feature); output is a ZIP of the
//! transformed files plus a summary of what was processed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sdlfix::{run_batch, InputArtifact};
//!
//! let artifact = InputArtifact::read_from("batch.zip")?;
//! let summary = run_batch(&artifact)?;
//! println!(
//!     "{} of {} file(s) processed.",
//!     summary.total_processed, summary.total_discovered
//! );
//! std::fs::write("processed_output.zip", &summary.output_archive)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Behavior
//!
//! - The rewrite is text-level and idempotent; files are never parsed into an
//!   XML tree, so indentation, attribute order, and encoding declarations
//!   survive untouched.
//! - Archive traversal flattens directory structure to base filenames;
//!   same-named files collide and the later one wins.
//! - A corrupt container aborts the batch; a single bad file inside a valid
//!   archive only lowers the processed count.

mod archive;
pub mod batch;
pub mod error;
pub mod rules;
mod transform;
pub mod types;

// Re-export most used items for easy consumption
pub use crate::{
    batch::run_batch,
    error::Error,
    types::{
        ArtifactKind, BatchSummary, EligibleEntry, InputArtifact, TransformOutcome,
        TransformStatus,
    },
};
