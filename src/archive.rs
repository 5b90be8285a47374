//! Enumeration of eligible files inside heterogeneous inputs.
//!
//! Archives are unpacked fully into a per-batch scratch directory and the
//! extracted tree is walked recursively; every file whose name ends in
//! `.sdlxliff` (case-sensitive) becomes one [`EligibleEntry`]. Directory
//! structure is flattened to the base filename, so same-named files in
//! different subdirectories collide and the later one in traversal order
//! wins.
//!
//! A container that fails to open aborts the batch. A single unreadable
//! entry inside an otherwise valid archive is skipped and logged; it counts
//! toward neither discovered nor processed.

use std::io::Cursor;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;
use zip::ZipArchive;

use crate::error::Error;
use crate::types::{ArtifactKind, EligibleEntry, InputArtifact, SDLXLIFF_SUFFIX};

/// Enumerates the eligible entries of `artifact`, using `scratch` for
/// archive extraction. The full set is materialized up front because output
/// naming depends on global collision handling.
pub(crate) fn enumerate(
    artifact: &InputArtifact,
    scratch: &Path,
) -> Result<Vec<EligibleEntry>, Error> {
    let entries = match artifact.kind {
        ArtifactKind::SdlxliffFile => vec![EligibleEntry {
            relative_name: artifact.name.clone(),
            content: artifact.bytes.clone(),
        }],
        ArtifactKind::ZipArchive => {
            let dir = scratch.join("unpacked");
            std::fs::create_dir_all(&dir)?;
            extract_zip(&artifact.bytes, &dir)?;
            collect_eligible(&dir)
        }
        ArtifactKind::RarArchive => {
            let dir = scratch.join("unpacked");
            std::fs::create_dir_all(&dir)?;
            extract_rar(&artifact.bytes, scratch, &dir)?;
            collect_eligible(&dir)
        }
        ArtifactKind::Unrecognized => Vec::new(),
    };
    debug!(kind = %artifact.kind, discovered = entries.len(), "enumerated input");
    Ok(entries)
}

/// Unpacks a ZIP blob into `dir`. Opening the container is fallible for the
/// whole batch; individual entries that cannot be read are skipped.
fn extract_zip(bytes: &[u8], dir: &Path) -> Result<(), Error> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    for index in 0..archive.len() {
        let mut file = match archive.by_index(index) {
            Ok(file) => file,
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable archive entry");
                continue;
            }
        };
        if file.is_dir() {
            continue;
        }
        // Entries with absolute or parent-escaping paths stay inside scratch.
        let Some(relative) = file.enclosed_name() else {
            warn!(index, name = file.name(), "skipping entry with unsafe path");
            continue;
        };
        let dest = dir.join(relative);
        if let Err(e) = write_extracted(&mut file, &dest) {
            warn!(index, name = file.name(), error = %e, "skipping unreadable archive entry");
            let _ = std::fs::remove_file(&dest);
        }
    }
    Ok(())
}

fn write_extracted(file: &mut impl std::io::Read, dest: &Path) -> std::io::Result<()> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut out = std::fs::File::create(dest)?;
    std::io::copy(file, &mut out)?;
    Ok(())
}

/// Unpacks a RAR blob into `dir`, via a scratch copy of the container.
#[cfg(feature = "rar")]
fn extract_rar(bytes: &[u8], scratch: &Path, dir: &Path) -> Result<(), Error> {
    let container = scratch.join("input.rar");
    std::fs::write(&container, bytes)?;

    let mut archive = unrar::Archive::new(&container)
        .open_for_processing()
        .map_err(Error::rar_error)?;
    while let Some(header) = archive.read_header().map_err(Error::rar_error)? {
        archive = if header.entry().is_file() {
            header.extract_with_base(dir).map_err(Error::rar_error)?
        } else {
            header.skip().map_err(Error::rar_error)?
        };
    }
    Ok(())
}

/// Without the `rar` feature a declared RAR input is a capability error,
/// reported up front rather than enumerating to zero entries.
#[cfg(not(feature = "rar"))]
fn extract_rar(_bytes: &[u8], _scratch: &Path, _dir: &Path) -> Result<(), Error> {
    Err(Error::RarUnavailable)
}

/// Walks the extracted tree and collects every `.sdlxliff` file, flattened to
/// its base filename. The walk is sorted so the collision winner is the same
/// on every platform.
fn collect_eligible(dir: &Path) -> Vec<EligibleEntry> {
    let mut entries = Vec::new();
    for dirent in WalkDir::new(dir).sort_by_file_name() {
        let dirent = match dirent {
            Ok(dirent) => dirent,
            Err(e) => {
                warn!(error = %e, "skipping unreadable path in extracted tree");
                continue;
            }
        };
        if !dirent.file_type().is_file() {
            continue;
        }
        let Some(base) = dirent.file_name().to_str() else {
            continue;
        };
        if !base.ends_with(SDLXLIFF_SUFFIX) {
            continue;
        }
        match std::fs::read(dirent.path()) {
            Ok(content) => entries.push(EligibleEntry {
                relative_name: base.to_string(),
                content,
            }),
            Err(e) => {
                warn!(path = %dirent.path().display(), error = %e, "skipping unreadable file");
            }
        }
    }
    entries
}
