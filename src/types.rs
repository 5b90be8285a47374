//! Core types for the batch pipeline.
//! The walker produces [`EligibleEntry`] values; the transformer turns each
//! into a [`TransformOutcome`]; the orchestrator aggregates a [`BatchSummary`].

use std::{
    fmt::{Display, Formatter},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// File suffix that marks a file as eligible for transformation.
///
/// Matching is case-sensitive, following the convention of the tools that
/// produce these files.
pub const SDLXLIFF_SUFFIX: &str = ".sdlxliff";

/// The kind of input handed to the pipeline, sniffed from the name suffix.
///
/// The suffix is the only signal used; the bytes are never inspected to guess
/// a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// A single `.sdlxliff` document.
    SdlxliffFile,
    /// A ZIP archive that may contain `.sdlxliff` documents anywhere in its tree.
    ZipArchive,
    /// A RAR archive, same policy as ZIP. Requires the `rar` cargo feature.
    RarArchive,
    /// Anything else. Enumerates to zero entries rather than failing the batch.
    Unrecognized,
}

impl ArtifactKind {
    /// Sniffs the kind from a file name.
    ///
    /// `.sdlxliff` is matched case-sensitively; the archive suffixes follow
    /// the same rule for symmetry.
    ///
    /// # Example
    /// ```rust
    /// use sdlfix::types::ArtifactKind;
    /// assert_eq!(ArtifactKind::from_name("job.sdlxliff"), ArtifactKind::SdlxliffFile);
    /// assert_eq!(ArtifactKind::from_name("job.zip"), ArtifactKind::ZipArchive);
    /// assert_eq!(ArtifactKind::from_name("job.rar"), ArtifactKind::RarArchive);
    /// assert_eq!(ArtifactKind::from_name("job.SDLXLIFF"), ArtifactKind::Unrecognized);
    /// ```
    pub fn from_name(name: &str) -> Self {
        if name.ends_with(SDLXLIFF_SUFFIX) {
            ArtifactKind::SdlxliffFile
        } else if name.ends_with(".zip") {
            ArtifactKind::ZipArchive
        } else if name.ends_with(".rar") {
            ArtifactKind::RarArchive
        } else {
            ArtifactKind::Unrecognized
        }
    }
}

impl Display for ArtifactKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::SdlxliffFile => write!(f, "sdlxliff"),
            ArtifactKind::ZipArchive => write!(f, "zip"),
            ArtifactKind::RarArchive => write!(f, "rar"),
            ArtifactKind::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// The uploaded blob plus the name used to sniff its kind.
///
/// Immutable once constructed; one artifact feeds exactly one batch.
#[derive(Debug, Clone)]
pub struct InputArtifact {
    /// Declared name, used only for suffix sniffing and single-file naming.
    pub name: String,
    /// Kind derived from `name` at construction.
    pub kind: ArtifactKind,
    /// The raw input bytes.
    pub bytes: Vec<u8>,
}

impl InputArtifact {
    /// Builds an artifact from a declared name and its bytes.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let kind = ArtifactKind::from_name(&name);
        InputArtifact { name, kind, bytes }
    }

    /// Reads an artifact from a file path, using the file name for sniffing.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(name, bytes))
    }
}

/// One candidate file found during enumeration.
///
/// `relative_name` is the flattened base filename; it doubles as the output
/// archive entry name, so two entries sharing a base name collide and the
/// later one wins.
#[derive(Debug, Clone)]
pub struct EligibleEntry {
    pub relative_name: String,
    pub content: Vec<u8>,
}

/// Terminal status of one file's transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformStatus {
    /// Decoded, rewritten, and staged for packaging.
    Succeeded,
    /// The entry's bytes are not valid UTF-8 text.
    DecodeFailed,
    /// Staging the rewritten text failed.
    WriteFailed,
}

/// Result of transforming one entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOutcome {
    pub name: String,
    pub status: TransformStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub error_detail: Option<String>,
}

impl TransformOutcome {
    pub(crate) fn succeeded(name: impl Into<String>) -> Self {
        TransformOutcome {
            name: name.into(),
            status: TransformStatus::Succeeded,
            error_detail: None,
        }
    }

    pub(crate) fn decode_failed(name: impl Into<String>, detail: impl Display) -> Self {
        TransformOutcome {
            name: name.into(),
            status: TransformStatus::DecodeFailed,
            error_detail: Some(detail.to_string()),
        }
    }

    pub(crate) fn write_failed(name: impl Into<String>, detail: impl Display) -> Self {
        TransformOutcome {
            name: name.into(),
            status: TransformStatus::WriteFailed,
            error_detail: Some(detail.to_string()),
        }
    }

    /// Whether this outcome counts toward the processed total.
    pub fn is_success(&self) -> bool {
        self.status == TransformStatus::Succeeded
    }
}

/// Aggregate result of one batch.
///
/// Invariant: `total_processed <= total_discovered`, and the output archive
/// holds exactly one entry per unique succeeded name.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Count of eligible entries found during enumeration.
    pub total_discovered: usize,
    /// Count of entries that reached `Succeeded`.
    pub total_processed: usize,
    /// Names of succeeded entries, in completion order.
    pub processed_names: Vec<String>,
    /// Per-file outcomes, in completion order.
    pub outcomes: Vec<TransformOutcome>,
    /// The packaged ZIP of transformed files. Not part of the serialized report.
    #[serde(skip)]
    pub output_archive: Vec<u8>,
}
