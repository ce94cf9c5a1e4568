// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install command implementation.

use anyhow::Context;
use tracing::info;

use crate::cli::mods::InstallArgs;
use crate::error::Result;
use crate::mods::ModManager;

/// Installs each file in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first error from [`ModManager::install_mods`].
pub fn run_install_command(args: &InstallArgs, manager: &ModManager) -> Result<()> {
    let staged = manager
        .install_mods(&args.files)
        .context("failed to install mods")?;
    info!(files = staged.len(), "Install complete, use `rush enable` to activate");
    Ok(())
}
