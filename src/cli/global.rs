// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --log-level N     <- Console verbosity (0-6)
//! --file-log-level  <- File verbosity (defaults to --log-level)
//! --log-file FILE   <- Also log to FILE
//! --home DIR        <- Use DIR/rushmm as the workspace   (RUSHMM_HOME)
//! --haste-path DIR  <- Game folder for a new config.toml (RUSHMM_HASTE_PATH)
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, defaults to --log-level.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory containing the rushmm workspace, instead of the home directory.
    #[arg(long = "home", value_name = "DIR", env = "RUSHMM_HOME", global = true)]
    pub home: Option<PathBuf>,

    /// Game folder to record when config.toml is created, skipping Steam discovery.
    #[arg(long = "haste-path", value_name = "DIR", env = "RUSHMM_HASTE_PATH", global = true)]
    pub haste_path: Option<PathBuf>,
}
