// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Disable command implementation.

use anyhow::Context;

use crate::cli::mods::ModNamesArgs;
use crate::error::Result;
use crate::mods::ModManager;

/// Disables each named mod in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first error from [`ModManager::disable_mods`].
pub fn run_disable_command(args: &ModNamesArgs, manager: &mut ModManager) -> Result<()> {
    manager
        .disable_mods(&args.names)
        .context("failed to disable mods")
}
