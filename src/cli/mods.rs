// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the mod commands.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `enable` and `disable`.
#[derive(Debug, Clone, Default, Args)]
pub struct ModNamesArgs {
    /// Mod names, without the .dll extension.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

/// Arguments for `install`.
#[derive(Debug, Clone, Default, Args)]
pub struct InstallArgs {
    /// Files to install (.dll, .pdb or .zip).
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}
