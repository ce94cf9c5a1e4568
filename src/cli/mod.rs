// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for rushmm using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! rush [global options] <command>
//! list
//! enable  <name>...
//! disable <name>...
//! install <file>...
//! version
//! ```

pub mod global;
pub mod mods;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::mods::{InstallArgs, ModNamesArgs};
use clap::{Parser, Subcommand};

/// Rush Mod Manager
///
/// Installs and toggles BepInEx mods for Haste: Broken Worlds.
#[derive(Debug, Parser)]
#[command(
    name = "rush",
    author,
    version,
    about = "Rush Mod Manager for Haste: Broken Worlds",
    long_about = "rushmm Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Installs and toggles BepInEx mods for Haste: Broken Worlds.\n\n\
                  Mods are staged in ~/rushmm/mods by `rush install` and copied\n\
                  into the game's BepInEx/plugins folder by `rush enable`.",
    after_help = "WORKSPACE:\n\n\
                  On first run rush creates ~/rushmm containing config.toml,\n\
                  enabled.txt and mods/. The game folder is looked up in the\n\
                  standard Steam libraries unless --haste-path is given. Edit\n\
                  hastePath in config.toml to point rush at another install."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists installed mods and whether they are enabled.
    List,

    /// Enables installed mods.
    Enable(ModNamesArgs),

    /// Disables enabled mods.
    Disable(ModNamesArgs),

    /// Installs .dll, .pdb or .zip files into the mods folder.
    Install(InstallArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
