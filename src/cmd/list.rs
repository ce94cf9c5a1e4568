// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for rushmm.

use colored::{ColoredString, Colorize};

use crate::error::Result;
use crate::mods::{ModEntry, ModManager};

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if the mods folder cannot be read.
pub fn run_list_command(manager: &ModManager) -> Result<()> {
    let mods = sorted_by_name(manager.list_mods()?);

    if mods.is_empty() {
        println!("No mods installed");
    } else {
        for entry in &mods {
            println!("{}", colorize(entry));
        }
    }
    Ok(())
}

/// Orders entries by name, the way `list` prints them.
#[must_use]
pub fn sorted_by_name(mut mods: Vec<ModEntry>) -> Vec<ModEntry> {
    mods.sort_by(|a, b| a.name.cmp(&b.name));
    mods
}

fn colorize(entry: &ModEntry) -> ColoredString {
    let line = entry.to_string();
    if entry.enabled {
        line.bright_green()
    } else {
        line.bright_red()
    }
}
