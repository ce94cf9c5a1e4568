// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["rush", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_version_alias() {
    let cli = Cli::try_parse_from(["rush", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_list() {
    let cli = Cli::try_parse_from(["rush", "list"]).unwrap();
    assert!(matches!(cli.command, Some(Command::List)));
}

#[test]
fn test_parse_enable_many() {
    let cli = Cli::try_parse_from(["rush", "enable", "alpha", "beta"]).unwrap();
    let Some(Command::Enable(args)) = cli.command else {
        panic!("expected enable, got {:?}", cli.command);
    };
    assert_eq!(args.names, vec!["alpha", "beta"]);
}

#[test]
fn test_parse_disable() {
    let cli = Cli::try_parse_from(["rush", "disable", "alpha"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Disable(ref args)) if args.names == ["alpha"]));
}

#[test]
fn test_parse_install_paths() {
    let cli = Cli::try_parse_from(["rush", "install", "a.dll", "dl/pack.zip"]).unwrap();
    let Some(Command::Install(args)) = cli.command else {
        panic!("expected install, got {:?}", cli.command);
    };
    assert_eq!(
        args.files,
        vec![PathBuf::from("a.dll"), PathBuf::from("dl/pack.zip")]
    );
}

#[test]
fn test_mod_commands_require_arguments() {
    for command in ["enable", "disable", "install"] {
        let err = Cli::try_parse_from(["rush", command]).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::MissingRequiredArgument,
            "{command} without arguments"
        );
    }
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "rush",
        "-l",
        "5",
        "--file-log-level",
        "6",
        "--log-file",
        "/tmp/rush.log",
        "--home",
        "/tmp/home",
        "--haste-path",
        "/games/haste",
        "list",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.file_log_level, Some(6));
    assert_eq!(cli.global.log_file, Some(PathBuf::from("/tmp/rush.log")));
    assert_eq!(cli.global.home, Some(PathBuf::from("/tmp/home")));
    assert_eq!(cli.global.haste_path, Some(PathBuf::from("/games/haste")));
}

#[test]
fn test_global_options_after_command() {
    let cli = Cli::try_parse_from(["rush", "list", "-l", "4"]).unwrap();
    assert_eq!(cli.global.log_level, Some(4));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["rush", "-l", "7", "list"]).is_err());
}

#[test]
fn test_no_command() {
    let cli = Cli::try_parse_from(["rush"]).unwrap();
    assert!(cli.command.is_none());
}
