// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! ZIP ingestion for `install`.
//!
//! ```text
//! pack.zip
//!   a.dll        --> mods/a.dll
//!   b.pdb        --> mods/b.pdb
//!   c.txt        (skipped)
//!   d/e.dll      --> mods/e.dll   (directories flattened)
//! ```
//!
//! Members are decompressed through the regular member reader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use zip::ZipArchive;

use super::FileKind;
use crate::error::{FsError, FsOp, RushResult};
use crate::utility::fs;

/// Extracts every `.dll` and `.pdb` member of `archive_path` into `dest`,
/// overwriting existing files. Returns the written paths.
///
/// # Errors
///
/// Returns [`FsError::Missing`] if the archive does not exist,
/// [`FsError::Archive`] if it is not a readable ZIP, and [`FsError::Io`] if a
/// member cannot be decompressed or written.
pub fn extract_mod_files(archive_path: &Path, dest: &Path) -> RushResult<Vec<PathBuf>> {
    let file =
        File::open(archive_path).map_err(|e| FsError::from_io(FsOp::Read, archive_path, e))?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).map_err(|e| archive_error(archive_path, e))?;

    let mut staged = Vec::new();
    for index in 0..archive.len() {
        let mut member = archive
            .by_index(index)
            .map_err(|e| archive_error(archive_path, e))?;
        if member.is_dir() {
            continue;
        }

        let Some(base) = member_base_name(member.name()).map(str::to_string) else {
            continue;
        };
        if !FileKind::of(Path::new(&base)).is_some_and(FileKind::is_mod_file) {
            trace!(member = member.name(), "Skipping archive member");
            continue;
        }

        let mut contents = Vec::with_capacity(usize::try_from(member.size()).unwrap_or(0));
        member
            .read_to_end(&mut contents)
            .map_err(|e| FsError::from_io(FsOp::Read, archive_path, e))?;

        let out_path = dest.join(&base);
        fs::write(&out_path, &contents)?;
        debug!(member = member.name(), path = %out_path.display(), "Extracted");
        staged.push(out_path);
    }

    Ok(staged)
}

/// Last component of an archive member path, accepting `/` and `\` separators.
pub(crate) fn member_base_name(name: &str) -> Option<&str> {
    name.rsplit(['/', '\\'])
        .next()
        .filter(|base| !base.is_empty() && *base != "." && *base != "..")
}

fn archive_error(path: &Path, source: zip::result::ZipError) -> FsError {
    FsError::Archive {
        path: path.display().to_string(),
        source,
    }
}
