// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use rushmm::cli::mods::{InstallArgs, ModNamesArgs};
use rushmm::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["rush", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_help_lists_commands() {
    let err = Cli::try_parse_from(["rush", "--help"]).unwrap_err();
    let help = err.to_string();
    for command in ["list", "enable", "disable", "install", "version"] {
        assert!(help.contains(command), "help is missing {command}");
    }
}

// =============================================================================
// Mod Commands
// =============================================================================

#[test]
fn cli_enable_keeps_argument_order() {
    let cli = Cli::try_parse_from(["rush", "enable", "zeta", "alpha", "zeta"]).unwrap();
    match cli.command {
        Some(Command::Enable(ModNamesArgs { names })) => {
            assert_eq!(names, vec!["zeta", "alpha", "zeta"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_install_mixed_files() {
    let cli = Cli::try_parse_from([
        "rush",
        "install",
        "Downloads/alpha.dll",
        "Downloads/alpha.pdb",
        "Downloads/pack.zip",
    ])
    .unwrap();
    match cli.command {
        Some(Command::Install(InstallArgs { files })) => {
            assert_eq!(files.len(), 3);
            assert_eq!(files[2], PathBuf::from("Downloads/pack.zip"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_list_rejects_arguments() {
    assert!(Cli::try_parse_from(["rush", "list", "extra"]).is_err());
}

#[test]
fn cli_unknown_command() {
    assert!(Cli::try_parse_from(["rush", "uninstall", "alpha"]).is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_workspace_options() {
    let cli = Cli::try_parse_from([
        "rush",
        "--home",
        "/tmp/h",
        "--haste-path",
        "/tmp/h/Games/Haste Broken Worlds Demo",
        "enable",
        "alpha",
    ])
    .unwrap();

    assert_eq!(cli.global.home, Some(PathBuf::from("/tmp/h")));
    assert_eq!(
        cli.global.haste_path,
        Some(PathBuf::from("/tmp/h/Games/Haste Broken Worlds Demo"))
    );
}
