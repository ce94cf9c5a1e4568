// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Workspace configuration (`config.toml`).
//!
//! ```toml
//! modsPath = "/home/user/rushmm/mods"
//! hastePath = "/home/user/.steam/steam/steamapps/common/Haste Broken Worlds Demo"
//! ```
//!
//! # Sources
//!
//! ```text
//! Priority (low → high)
//! 1. config.toml in the workspace
//! 2. RUSHMM_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! RUSHMM_MODSPATH=/path   → modsPath
//! RUSHMM_HASTEPATH=/path  → hastePath
//! ```
//!
//! Unknown keys are ignored. Both keys are required and must be absolute.

pub mod loader;


use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, RushResult};

use loader::ConfigLoader;

/// Prefix of environment variables layered over the config file.
pub const ENV_PREFIX: &str = "RUSHMM";

/// Key of the staging directory.
pub const MODS_PATH_KEY: &str = "modsPath";

/// Key of the game installation root.
pub const HASTE_PATH_KEY: &str = "hastePath";

/// Parsed and validated workspace configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RushConfig {
    /// Absolute staging directory.
    pub mods_path: PathBuf,
    /// Absolute game installation root.
    pub haste_path: PathBuf,
}

/// Shape of the file before validation; every key optional so missing
/// keys are reported by name.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawConfig {
    #[serde(rename = "modsPath")]
    mods_path: Option<PathBuf>,
    #[serde(rename = "hastePath")]
    haste_path: Option<PathBuf>,
}

impl RawConfig {
    pub(crate) fn validate(self) -> RushResult<RushConfig> {
        Ok(RushConfig {
            mods_path: required_absolute(MODS_PATH_KEY, self.mods_path)?,
            haste_path: required_absolute(HASTE_PATH_KEY, self.haste_path)?,
        })
    }
}

fn required_absolute(key: &str, value: Option<PathBuf>) -> RushResult<PathBuf> {
    let path = value
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| ConfigError::MissingKey {
            key: key.to_string(),
        })?;

    if path.is_absolute() {
        Ok(path)
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("'{}' is not an absolute path", path.display()),
        }
        .into())
    }
}

impl RushConfig {
    pub fn new(mods_path: impl Into<PathBuf>, haste_path: impl Into<PathBuf>) -> Self {
        Self {
            mods_path: mods_path.into(),
            haste_path: haste_path.into(),
        }
    }

    /// Create a new configuration loader.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load the configuration file at `path`, with `RUSHMM_*` overrides.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or lacks one of the two keys.
    pub fn load(path: &Path) -> RushResult<Self> {
        std::fs::metadata(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

        Self::builder()
            .add_toml_file(path)
            .with_env_prefix(ENV_PREFIX)
            .build()
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the content is not valid TOML or lacks a key.
    pub fn parse(content: &str) -> RushResult<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// The loader's plugin directory, `<hastePath>/BepInEx/plugins`.
    #[must_use]
    pub fn plugins_path(&self) -> PathBuf {
        self.haste_path.join("BepInEx").join("plugins")
    }

    /// Renders the file content: one `key = "value"` line per key.
    #[must_use]
    pub fn to_toml_string(&self) -> String {
        format!(
            "{MODS_PATH_KEY} = {}\n{HASTE_PATH_KEY} = {}\n",
            toml_basic_string(&self.mods_path.display().to_string()),
            toml_basic_string(&self.haste_path.display().to_string()),
        )
    }
}

/// Quotes `value` as a TOML basic string.
fn toml_basic_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
