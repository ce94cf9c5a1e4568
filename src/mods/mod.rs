// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod lifecycle: install, enable, disable, list.
//!
//! ```text
//!            install            enable
//!   ABSENT ----------> STAGED ----------> ENABLED
//!                        ^                   |
//!                        +------disable------+
//!
//! install   file.dll | file.pdb | pack.zip --> mods/
//! enable    mods/<name>.dll (+ .pdb)       --> BepInEx/plugins/, roster += name
//! disable   roster -= name, plugins/<name>.dll and .pdb removed
//! ```
//!
//! Multi-item operations stop at the first failure; earlier items are kept.
//! The roster is written once, by [`ModManager::close`] or on drop.

pub mod archive;


use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::RushConfig;
use crate::error::{FsError, FsOp, RushError, RushResult};
use crate::roster::Roster;
use crate::utility::fs;
use crate::workspace::Workspace;

/// Extension of the required mod binary.
pub const DLL_EXTENSION: &str = "dll";

/// Extension of the optional debug symbols.
pub const PDB_EXTENSION: &str = "pdb";

/// Extension of installable archives.
pub const ZIP_EXTENSION: &str = "zip";

/// Installable file kinds, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileKind {
    Dll,
    Pdb,
    Zip,
}

impl FileKind {
    pub(crate) fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            DLL_EXTENSION => Some(Self::Dll),
            PDB_EXTENSION => Some(Self::Pdb),
            ZIP_EXTENSION => Some(Self::Zip),
            _ => None,
        }
    }

    pub(crate) const fn is_mod_file(self) -> bool {
        matches!(self, Self::Dll | Self::Pdb)
    }
}

/// A staged mod and whether it is currently enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModEntry {
    pub name: String,
    pub enabled: bool,
}

impl fmt::Display for ModEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.enabled { "ENABLED" } else { "DISABLED" };
        write!(f, "[{state}] {}", self.name)
    }
}

/// Mediates between the staging directory and the BepInEx plugin directory.
#[derive(Debug)]
pub struct ModManager {
    config: RushConfig,
    plugins_path: PathBuf,
    roster: Roster,
    closed: bool,
}

impl ModManager {
    /// Opens a session on a verified workspace.
    ///
    /// # Errors
    ///
    /// Returns a config error if `config.toml` is unreadable or malformed,
    /// [`RushError::LoaderMissing`] if the plugin directory does not exist, or
    /// an I/O error if the roster cannot be read. Nothing is written on failure.
    pub fn open(workspace: &Workspace) -> RushResult<Self> {
        let config = workspace.load_config()?;
        Self::with_config(config, workspace.roster_path())
    }

    /// Opens a session from an already loaded config.
    ///
    /// # Errors
    ///
    /// See [`ModManager::open`].
    pub fn with_config(config: RushConfig, roster_path: impl Into<PathBuf>) -> RushResult<Self> {
        let plugins_path = config.plugins_path();
        if !plugins_path.is_dir() {
            return Err(RushError::loader_missing(plugins_path));
        }

        let roster = Roster::open(roster_path)?;
        debug!(
            plugins_path = %plugins_path.display(),
            enabled = roster.len(),
            "Opened mod manager"
        );

        Ok(Self {
            config,
            plugins_path,
            roster,
            closed: false,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &RushConfig {
        &self.config
    }

    #[must_use]
    pub fn mods_path(&self) -> &Path {
        &self.config.mods_path
    }

    #[must_use]
    pub fn plugins_path(&self) -> &Path {
        &self.plugins_path
    }

    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Staged `(dll, pdb)` paths of a mod.
    #[must_use]
    pub fn staged_files(&self, name: &str) -> (PathBuf, PathBuf) {
        mod_files(self.mods_path(), name)
    }

    /// Plugin-directory `(dll, pdb)` paths of a mod.
    #[must_use]
    pub fn plugin_files(&self, name: &str) -> (PathBuf, PathBuf) {
        mod_files(&self.plugins_path, name)
    }

    /// Lists staged mods in directory order.
    ///
    /// # Errors
    ///
    /// Returns an error if the staging directory cannot be read.
    pub fn list_mods(&self) -> RushResult<Vec<ModEntry>> {
        let mods_path = self.mods_path();
        let entries = std::fs::read_dir(mods_path)
            .map_err(|e| FsError::from_io(FsOp::ReadDir, mods_path, e))?;

        let mut mods = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| FsError::from_io(FsOp::ReadDir, mods_path, e))?
                .path();
            if !path.is_file() || FileKind::of(&path) != Some(FileKind::Dll) {
                continue;
            }
            let Some(stem) = path.file_stem() else {
                continue;
            };
            let name = stem.to_string_lossy().into_owned();
            let enabled = self.roster.has(&name);
            mods.push(ModEntry { name, enabled });
        }

        Ok(mods)
    }

    /// Installs each path in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`ModManager::install_mod`].
    pub fn install_mods<P: AsRef<Path>>(&self, paths: &[P]) -> RushResult<Vec<PathBuf>> {
        let mut staged = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let files = self.install_mod(path).inspect_err(|e| {
                warn!(source = %path.display(), error = %e, "Install failed");
            })?;
            staged.extend(files);
        }
        Ok(staged)
    }

    /// Copies a `.dll`/`.pdb`, or the `.dll`/`.pdb` members of a `.zip`,
    /// into the staging directory. Returns the staged paths.
    ///
    /// The plugin directory is never touched: installed mods start disabled.
    ///
    /// # Errors
    ///
    /// Returns [`RushError::NotInstallable`] for any other extension, before
    /// anything is written.
    pub fn install_mod(&self, path: &Path) -> RushResult<Vec<PathBuf>> {
        let file_name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );

        let staged = match FileKind::of(path) {
            Some(FileKind::Zip) => archive::extract_mod_files(path, self.mods_path())?,
            Some(FileKind::Dll | FileKind::Pdb) => {
                // Read fully before writing: `path` may already be the staged file.
                let contents = fs::read(path)?;
                let dst = self.mods_path().join(&file_name);
                fs::write(&dst, &contents)?;
                vec![dst]
            }
            None => return Err(RushError::not_installable(file_name)),
        };

        info!(source = %path.display(), files = staged.len(), "Installed");
        Ok(staged)
    }

    /// Enables each mod in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`ModManager::enable_mod`].
    pub fn enable_mods<S: AsRef<str>>(&mut self, names: &[S]) -> RushResult<()> {
        names.iter().try_for_each(|name| {
            let name = name.as_ref();
            self.enable_mod(name)
                .inspect_err(|e| warn!(mod_name = name, error = %e, "Enable failed"))
        })
    }

    /// Copies a staged mod into the plugin directory and records it as enabled.
    ///
    /// Enabling an enabled mod rewrites identical files and leaves the roster as is.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::Missing`] if `<name>.dll` is not staged, or any I/O
    /// error other than a missing `<name>.pdb`.
    pub fn enable_mod(&mut self, name: &str) -> RushResult<()> {
        validate_name(name)?;
        let (staged_dll, staged_pdb) = self.staged_files(name);
        let (plugin_dll, plugin_pdb) = self.plugin_files(name);

        let binary = fs::read(&staged_dll)?;
        fs::write(&plugin_dll, &binary)?;

        match fs::ignore_missing(fs::read(&staged_pdb))? {
            Some(symbols) => fs::write(&plugin_pdb, &symbols)?,
            None => debug!(mod_name = name, "No debug symbols staged"),
        }

        if !self.roster.has(name) {
            self.roster.append(name);
        }

        info!(mod_name = name, "Enabled");
        Ok(())
    }

    /// Disables each mod in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`ModManager::disable_mod`].
    pub fn disable_mods<S: AsRef<str>>(&mut self, names: &[S]) -> RushResult<()> {
        names.iter().try_for_each(|name| {
            let name = name.as_ref();
            self.disable_mod(name)
                .inspect_err(|e| warn!(mod_name = name, error = %e, "Disable failed"))
        })
    }

    /// Removes a mod from the roster and its files from the plugin directory.
    ///
    /// A mod that is not enabled is left alone. Plugin files that are already
    /// gone are not an error.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a plugin file exists but cannot be removed.
    pub fn disable_mod(&mut self, name: &str) -> RushResult<()> {
        validate_name(name)?;
        let Some(index) = self.roster.index_of(name) else {
            debug!(mod_name = name, "Not enabled, nothing to disable");
            return Ok(());
        };
        self.roster.remove_at(index);

        let (plugin_dll, plugin_pdb) = self.plugin_files(name);
        for file in [plugin_dll, plugin_pdb] {
            if fs::ignore_missing(fs::remove_file(&file))?.is_none() {
                debug!(path = %file.display(), "Plugin file already absent");
            }
        }

        info!(mod_name = name, "Disabled");
        Ok(())
    }

    /// Ends the session, writing the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster file cannot be written.
    pub fn close(mut self) -> RushResult<()> {
        self.closed = true;
        self.roster.flush()
    }
}

impl Drop for ModManager {
    fn drop(&mut self) {
        if !self.closed
            && let Err(e) = self.roster.flush()
        {
            warn!(error = %e, path = %self.roster.path().display(), "Failed to save roster");
        }
    }
}

fn mod_files(dir: &Path, name: &str) -> (PathBuf, PathBuf) {
    (
        dir.join(format!("{name}.{DLL_EXTENSION}")),
        dir.join(format!("{name}.{PDB_EXTENSION}")),
    )
}

/// A mod name must be a bare file stem so it cannot address files outside
/// the staging and plugin directories.
fn validate_name(name: &str) -> RushResult<()> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && Path::new(name).components().count() == 1;
    if valid {
        Ok(())
    } else {
        Err(RushError::invalid_mod_name(name))
    }
}
