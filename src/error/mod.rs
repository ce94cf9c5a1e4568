// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 RushError (~24 bytes)
//!                        |
//!   +--------+--------+--+-----+----------+------+-------+
//!   |        |        |        |          |      |       |
//!   v        v        v        v          v      v       v
//! PathNot  Loader   Config  NotInst.  Invalid   Fs     Other
//! Found    Missing  Box     Box<str>  ModName   Box    Box<str>
//!          Box<Path>                  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config  ReadError, ParseError, MissingKey, InvalidValue
//!   Fs      Missing, Io, Archive
//!
//! All payloads boxed => RushError fits in 24 bytes.
//! ```
//!
//! Not-found conditions are classified on [`std::io::ErrorKind::NotFound`]
//! and surface as [`FsError::Missing`]; several lifecycle operations treat
//! that variant as a soft failure.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`RushError`].
pub type RushResult<T> = std::result::Result<T, RushError>;

/// Top-level error type of the mod manager.
#[derive(Debug, Error)]
pub enum RushError {
    /// The game installation could not be located.
    #[error("unable to find the Haste folder")]
    PathNotFound,

    /// The BepInEx plugin directory does not exist.
    #[error(
        "BepInEx is not installed, please install it to use Rush (missing {})",
        .0.display()
    )]
    LoaderMissing(Box<Path>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// A file with an unsupported extension was passed to install.
    #[error("'{0}' is not an installable file")]
    NotInstallable(Box<str>),

    /// A mod name that is not a bare file stem.
    #[error("'{0}' is not a valid mod name")]
    InvalidModName(Box<str>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl RushError {
    /// Returns `true` if this error reports a file that does not exist.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Fs(fs) if matches!(**fs, FsError::Missing { .. }))
    }

    /// Creates a [`RushError::NotInstallable`] for a file name.
    pub fn not_installable(name: impl Into<String>) -> Self {
        Self::NotInstallable(name.into().into_boxed_str())
    }

    /// Creates a [`RushError::InvalidModName`].
    pub fn invalid_mod_name(name: impl Into<String>) -> Self {
        Self::InvalidModName(name.into().into_boxed_str())
    }

    /// Creates a [`RushError::LoaderMissing`] for the expected plugin directory.
    pub fn loader_missing(path: impl Into<PathBuf>) -> Self {
        Self::LoaderMissing(path.into().into_boxed_path())
    }

    /// Creates a [`RushError::Other`].
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into_boxed_str())
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for RushError {
                fn from(err: $error) -> Self {
                    RushError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    FsError => Fs,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}'")]
    MissingKey { key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// --- Filesystem Errors ---

/// Filesystem operation that failed, used in [`FsError::Io`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    Read,
    Write,
    Remove,
    CreateDir,
    ReadDir,
    Persist,
}

impl FsOp {
    /// Verb used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Remove => "remove",
            Self::CreateDir => "create directory",
            Self::ReadDir => "read directory",
            Self::Persist => "persist",
        }
    }
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// A file expected to exist was not found.
    #[error("file not found: {path}")]
    Missing { path: String },

    /// Any other I/O failure.
    #[error("failed to {op} '{path}': {source}")]
    Io {
        op: FsOp,
        path: String,
        #[source]
        source: io::Error,
    },

    /// A ZIP archive could not be decoded.
    #[error("failed to read archive '{path}': {source}")]
    Archive {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },
}

impl FsError {
    /// Classifies an I/O error on `path`, mapping `NotFound` to [`FsError::Missing`].
    pub fn from_io(op: FsOp, path: &Path, source: io::Error) -> Self {
        let path = path.display().to_string();
        if source.kind() == io::ErrorKind::NotFound {
            Self::Missing { path }
        } else {
            Self::Io { op, path, source }
        }
    }
}
