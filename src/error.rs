//! All error types for the sdlfix crate.
//!
//! Only batch-fatal conditions surface here: an unreadable archive container,
//! a scratch/packaging I/O failure, or a declared RAR input in a build without
//! RAR support. Per-file failures are not errors; they are recorded as
//! [`crate::types::TransformOutcome`] variants so the batch can complete.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("RAR archive error: {0}")]
    Rar(String),

    #[error("RAR archives are not supported by this build (enable the `rar` feature)")]
    RarUnavailable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new RAR container error from any displayable cause.
    pub fn rar_error(message: impl std::fmt::Display) -> Self {
        Error::Rar(message.to_string())
    }
}
