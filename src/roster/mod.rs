// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The roster of enabled mods (`enabled.txt`).
//!
//! ```text
//! open(path)   file --> lines (trim_end, skip blank)   absent --> []
//! has / index_of / get / iter
//! append / remove_at                (in memory only)
//! close()      lines.join("\n") --> file (truncate)
//! ```
//!
//! Uniqueness is the caller's job: check [`Roster::has`] before
//! [`Roster::append`].

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FsError, FsOp, RushResult};
use crate::utility::fs;

/// Ordered list of enabled mod names backed by a text file.
#[derive(Debug)]
pub struct Roster {
    path: PathBuf,
    names: Vec<String>,
}

impl Roster {
    /// Loads the roster at `path`. A missing file yields an empty roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not UTF-8.
    pub fn open(path: impl Into<PathBuf>) -> RushResult<Self> {
        let path = path.into();
        let content = fs::ignore_missing(fs::read(&path))?.unwrap_or_default();
        let content = String::from_utf8(content).map_err(|e| {
            FsError::from_io(
                FsOp::Read,
                &path,
                io::Error::new(io::ErrorKind::InvalidData, e),
            )
        })?;
        let names = parse(&content);
        debug!(path = %path.display(), count = names.len(), "Opened roster");
        Ok(Self { path, names })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Position of `name`, or `None` if it is not enabled.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Appends `name` unconditionally.
    pub fn append(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Removes and returns the name at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> String {
        assert!(
            index < self.names.len(),
            "{index} is not a valid roster index (len {})",
            self.names.len()
        );
        self.names.remove(index)
    }

    /// Writes the roster back to its file, replacing the previous content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn close(self) -> RushResult<()> {
        self.flush()
    }

    pub(crate) fn flush(&self) -> RushResult<()> {
        fs::write(&self.path, self.render().as_bytes())?;
        debug!(path = %self.path.display(), count = self.names.len(), "Saved roster");
        Ok(())
    }

    fn render(&self) -> String {
        self.names.join("\n")
    }
}

fn parse(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests;
