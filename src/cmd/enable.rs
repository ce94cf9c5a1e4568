// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Enable command implementation.

use anyhow::Context;

use crate::cli::mods::ModNamesArgs;
use crate::error::Result;
use crate::mods::ModManager;

/// Enables each named mod in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first error from [`ModManager::enable_mods`].
pub fn run_enable_command(args: &ModNamesArgs, manager: &mut ModManager) -> Result<()> {
    manager
        .enable_mods(&args.names)
        .context("failed to enable mods")
}
