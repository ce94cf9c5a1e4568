// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-user workspace.
//!
//! ```text
//! $HOME/rushmm/
//!   config.toml    modsPath + hastePath
//!   mods/          staged <name>.dll / <name>.pdb
//!   enabled.txt    roster, one name per line
//! ```
//!
//! # Verification
//!
//! ```text
//! verify(locator)
//!   root missing or empty --> init(locator)
//!   otherwise             --> create mods/ and enabled.txt if missing
//!
//! init(locator)                       (idempotent)
//!   mkdir root
//!   config.toml missing --> locator.locate() --> write_atomic
//!   enabled.txt missing --> create empty
//!   mods/ missing       --> mkdir
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::RushConfig;
use crate::error::{RushError, RushResult};
use crate::locator::GameLocator;
use crate::utility::fs;

/// Name of the workspace directory under the home directory.
pub const WORKSPACE_DIR: &str = "rushmm";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Roster file name.
pub const ROSTER_FILE: &str = "enabled.txt";

/// Staging directory name.
pub const MODS_DIR: &str = "mods";

/// The manager's private directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Workspace rooted exactly at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Workspace at `<home>/rushmm`.
    pub fn in_home(home: impl AsRef<Path>) -> Self {
        Self::new(home.as_ref().join(WORKSPACE_DIR))
    }

    /// Workspace under the current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn from_env() -> RushResult<Self> {
        dirs::home_dir()
            .map(Self::in_home)
            .ok_or_else(|| RushError::other("unable to determine the home directory"))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    #[must_use]
    pub fn roster_path(&self) -> PathBuf {
        self.root.join(ROSTER_FILE)
    }

    #[must_use]
    pub fn mods_path(&self) -> PathBuf {
        self.root.join(MODS_DIR)
    }

    /// Makes sure the workspace is usable, initializing it on first run.
    ///
    /// An existing config is never rewritten.
    ///
    /// # Errors
    ///
    /// Returns an error if a missing artifact cannot be created or the game
    /// path cannot be resolved for a missing config.
    pub fn verify(&self, locator: &dyn GameLocator) -> RushResult<()> {
        if fs::is_missing_or_empty(&self.root)? {
            info!(path = %self.root.display(), "Initializing workspace");
        } else {
            debug!(path = %self.root.display(), "Workspace exists, checking artifacts");
        }
        self.init(locator)
    }

    /// Creates every missing workspace artifact.
    ///
    /// The game path is resolved before the config file is created, and the
    /// file is written atomically.
    ///
    /// # Errors
    ///
    /// Returns [`RushError::PathNotFound`] if the config is missing and the
    /// game cannot be located, or an [`FsError`](crate::error::FsError) if an
    /// artifact cannot be created.
    pub fn init(&self, locator: &dyn GameLocator) -> RushResult<()> {
        fs::create_dir_all(&self.root)?;

        let config_path = self.config_path();
        if !config_path.exists() {
            let haste_path = locator.locate()?;
            let config = RushConfig::new(absolute(&self.mods_path())?, haste_path);
            fs::write_atomic(&config_path, config.to_toml_string().as_bytes())?;
            info!(
                path = %config_path.display(),
                haste_path = %config.haste_path.display(),
                "Created config"
            );
        }

        let roster_path = self.roster_path();
        if !roster_path.exists() {
            fs::write(&roster_path, b"")?;
            debug!(path = %roster_path.display(), "Created roster");
        }

        let mods_path = self.mods_path();
        if !mods_path.is_dir() {
            fs::create_dir_all(&mods_path)?;
            debug!(path = %mods_path.display(), "Created staging directory");
        }

        Ok(())
    }

    /// Reads `config.toml`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::error::ConfigError) if the file is
    /// unreadable or malformed.
    pub fn load_config(&self) -> RushResult<RushConfig> {
        RushConfig::load(&self.config_path())
    }
}

fn absolute(path: &Path) -> RushResult<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        RushError::other(format!(
            "failed to resolve absolute path of {}: {e}",
            path.display()
        ))
    })
}
