// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(path)
//!   .add_toml_str(content)
//!   .with_env_prefix("RUSHMM")
//!        |
//!        v
//!    build() --> RawConfig --> validate() --> RushConfig
//! ```
//!
//! File keys are matched exactly (`modsPath`, `hastePath`). Environment
//! variables are mapped onto those keys explicitly.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{HASTE_PATH_KEY, MODS_PATH_KEY, RawConfig, RushConfig};
use crate::error::{ConfigError, RushResult};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a required TOML configuration file.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(p.to_path_buf());
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files.push(PathBuf::from("<string>"));
        self
    }

    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::ParseError`] if a source is unreadable or not
    /// valid TOML, and [`ConfigError::MissingKey`] / [`ConfigError::InvalidValue`]
    /// if the merged result fails validation.
    pub fn build(self) -> RushResult<RushConfig> {
        let origin = self.describe_sources();
        let parse_error = |e: config::ConfigError| ConfigError::ParseError {
            path: origin.clone(),
            message: e.to_string(),
        };

        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            for (key, value) in env_overrides(prefix).map_err(parse_error)? {
                debug!(key, value = %value, "Config overridden from environment");
                builder = builder
                    .set_override(key, value)
                    .map_err(parse_error)?;
            }
        }

        let raw: RawConfig = builder
            .build()
            .map_err(parse_error)?
            .try_deserialize()
            .map_err(parse_error)?;

        let config = raw.validate()?;
        debug!(
            mods_path = %config.mods_path.display(),
            haste_path = %config.haste_path.display(),
            "Loaded configuration"
        );
        Ok(config)
    }

    fn describe_sources(&self) -> String {
        self.files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Values of `<PREFIX>_MODSPATH` and `<PREFIX>_HASTEPATH`, keyed by their
/// file key. Empty variables are skipped.
fn env_overrides(prefix: &str) -> Result<Vec<(&'static str, String)>, config::ConfigError> {
    let env = config::Config::builder()
        .add_source(config::Environment::with_prefix(prefix))
        .build()?;

    Ok([MODS_PATH_KEY, HASTE_PATH_KEY]
        .into_iter()
        .filter_map(|key| {
            env.get_string(&key.to_lowercase())
                .ok()
                .filter(|value| !value.is_empty())
                .map(|value| (key, value))
        })
        .collect())
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
