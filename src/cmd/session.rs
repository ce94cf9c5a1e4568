// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session setup shared by the mod commands.
//!
//! ```text
//! --home / $HOME --> Workspace --verify(locator)--> ModManager::open
//!                                                        |
//!                                              handler(&mut manager)
//!                                                        |
//!                                                 manager.close()
//! ```

use anyhow::Context;
use tracing::debug;

use crate::cli::global::GlobalOptions;
use crate::error::Result;
use crate::locator::{FixedLocator, GameLocator, SteamLocator};
use crate::mods::ModManager;
use crate::workspace::Workspace;

/// Workspace selected by the global options.
///
/// # Errors
///
/// Returns an error if no `--home` is given and the home directory is unknown.
pub fn workspace(global: &GlobalOptions) -> Result<Workspace> {
    match &global.home {
        Some(home) => Ok(Workspace::in_home(home)),
        None => Workspace::from_env().context("failed to locate the rushmm workspace"),
    }
}

/// Game locator selected by the global options.
#[must_use]
pub fn locator(global: &GlobalOptions) -> Box<dyn GameLocator> {
    match (&global.haste_path, &global.home) {
        (Some(path), _) => Box::new(FixedLocator::new(path)),
        (None, Some(home)) => Box::new(SteamLocator::with_home(home)),
        (None, None) => Box::new(SteamLocator::new()),
    }
}

/// Verifies the workspace, opens a [`ModManager`] and runs `handler` with it.
///
/// The roster is written whether or not `handler` succeeds. A handler error
/// takes precedence over a failure to write the roster.
///
/// # Errors
///
/// Returns an error if the workspace cannot be prepared, the manager cannot
/// be opened, `handler` fails, or the roster cannot be written.
pub fn run_with_manager<F>(global: &GlobalOptions, handler: F) -> Result<()>
where
    F: FnOnce(&mut ModManager) -> Result<()>,
{
    let workspace = workspace(global)?;
    debug!(root = %workspace.root().display(), "Using workspace");

    workspace
        .verify(locator(global).as_ref())
        .context("failed to prepare the rushmm workspace")?;
    let mut manager = ModManager::open(&workspace)?;

    let outcome = handler(&mut manager);
    let closed = manager.close().context("failed to save the enabled mods");
    outcome.and(closed)
}
