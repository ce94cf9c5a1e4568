// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers with typed not-found classification.
//!
//! ```text
//! read / write / remove_file / create_dir_all
//!        |
//!        v
//!   io::Error --> FsError::from_io(op, path)
//!                   NotFound  --> FsError::Missing
//!                   otherwise --> FsError::Io
//!
//! ignore_missing(result)   Missing --> Ok(None)
//! write_atomic(path)       NamedTempFile in parent --> persist
//! ```
//!
//! Every handle opened here is scoped to the call and closed on all paths.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::trace;

use crate::error::{FsError, FsOp, RushResult};

/// Reads a whole file into memory.
///
/// # Errors
///
/// Returns [`FsError::Missing`] if the file does not exist, [`FsError::Io`] otherwise.
pub fn read(path: &Path) -> RushResult<Vec<u8>> {
    trace!(path = %path.display(), "Reading file");
    std::fs::read(path).map_err(|e| FsError::from_io(FsOp::Read, path, e).into())
}

/// Writes `contents` to `path`, creating or truncating it.
///
/// # Errors
///
/// Returns an [`FsError`] if the file cannot be created or written.
pub fn write(path: &Path, contents: &[u8]) -> RushResult<()> {
    trace!(path = %path.display(), bytes = contents.len(), "Writing file");
    std::fs::write(path, contents).map_err(|e| FsError::from_io(FsOp::Write, path, e).into())
}

/// Deletes a file.
///
/// # Errors
///
/// Returns [`FsError::Missing`] if the file does not exist, [`FsError::Io`] otherwise.
pub fn remove_file(path: &Path) -> RushResult<()> {
    trace!(path = %path.display(), "Removing file");
    std::fs::remove_file(path).map_err(|e| FsError::from_io(FsOp::Remove, path, e).into())
}

/// Creates a directory and any missing parents.
///
/// # Errors
///
/// Returns an [`FsError`] if the directory cannot be created.
pub fn create_dir_all(path: &Path) -> RushResult<()> {
    std::fs::create_dir_all(path).map_err(|e| FsError::from_io(FsOp::CreateDir, path, e).into())
}

/// Writes `contents` to a temporary file next to `path` and renames it into place.
///
/// Readers never observe a partially written `path`.
///
/// # Errors
///
/// Returns an [`FsError`] if the temporary file cannot be created, written or persisted.
pub fn write_atomic(path: &Path, contents: &[u8]) -> RushResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file =
        NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(FsOp::Write, dir, e))?;
    file.write_all(contents)
        .and_then(|()| file.as_file().sync_all())
        .map_err(|e| FsError::from_io(FsOp::Write, file.path(), e))?;
    file.persist(path)
        .map_err(|e| FsError::from_io(FsOp::Persist, path, e.error))?;
    Ok(())
}

/// Turns a [`FsError::Missing`] failure into `Ok(None)`.
///
/// # Errors
///
/// Propagates every error that is not a missing file.
pub fn ignore_missing<T>(result: RushResult<T>) -> RushResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_missing() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Returns `true` if `path` is a directory with no entries, or does not exist.
///
/// # Errors
///
/// Returns an [`FsError::Io`] for failures other than the directory being absent.
pub fn is_missing_or_empty(path: &Path) -> RushResult<bool> {
    match std::fs::read_dir(path) {
        Ok(mut entries) => Ok(entries.next().is_none()),
        Err(e) => match FsError::from_io(FsOp::ReadDir, path, e) {
            FsError::Missing { .. } => Ok(true),
            other => Err(other.into()),
        },
    }
}

#[cfg(test)]
mod tests;
