// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::disable::run_disable_command;
use super::enable::run_enable_command;
use super::install::run_install_command;
use super::list::sorted_by_name;
use super::session::{run_with_manager, workspace};
use crate::cli::global::GlobalOptions;
use crate::cli::mods::{InstallArgs, ModNamesArgs};
use crate::mods::ModEntry;
use std::path::PathBuf;
use tempfile::TempDir;

struct Sandbox {
    temp: TempDir,
    plugins: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let plugins = temp.path().join("haste").join("BepInEx").join("plugins");
        std::fs::create_dir_all(&plugins).unwrap();
        Self { temp, plugins }
    }

    fn global(&self) -> GlobalOptions {
        GlobalOptions {
            home: Some(self.temp.path().to_path_buf()),
            haste_path: Some(self.temp.path().join("haste")),
            ..GlobalOptions::default()
        }
    }

    fn rushmm(&self) -> PathBuf {
        self.temp.path().join("rushmm")
    }
}

fn names(names: &[&str]) -> ModNamesArgs {
    ModNamesArgs {
        names: names.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn test_sorted_by_name() {
    let entry = |name: &str, enabled| ModEntry {
        name: name.to_string(),
        enabled,
    };
    let sorted = sorted_by_name(vec![entry("gamma", true), entry("alpha", false), entry("beta", true)]);
    let order: Vec<_> = sorted.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(order, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_workspace_from_home_option() {
    let sandbox = Sandbox::new();
    let ws = workspace(&sandbox.global()).unwrap();
    assert_eq!(ws.root(), sandbox.rushmm());
}

#[test]
fn test_session_initializes_workspace() {
    let sandbox = Sandbox::new();

    run_with_manager(&sandbox.global(), |_| Ok(())).unwrap();

    assert!(sandbox.rushmm().join("config.toml").is_file());
    assert!(sandbox.rushmm().join("enabled.txt").is_file());
    assert!(sandbox.rushmm().join("mods").is_dir());
}

#[test]
fn test_install_then_enable_then_disable() {
    let sandbox = Sandbox::new();
    let global = sandbox.global();
    let download = sandbox.temp.path().join("alpha.dll");
    std::fs::write(&download, b"binary").unwrap();

    let install = InstallArgs {
        files: vec![download],
    };
    run_with_manager(&global, |m| run_install_command(&install, m)).unwrap();
    run_with_manager(&global, |m| run_enable_command(&names(&["alpha"]), m)).unwrap();

    assert_eq!(std::fs::read(sandbox.plugins.join("alpha.dll")).unwrap(), b"binary");
    assert_eq!(
        std::fs::read_to_string(sandbox.rushmm().join("enabled.txt")).unwrap(),
        "alpha"
    );

    run_with_manager(&global, |m| run_disable_command(&names(&["alpha"]), m)).unwrap();

    assert!(!sandbox.plugins.join("alpha.dll").exists());
    assert_eq!(
        std::fs::read_to_string(sandbox.rushmm().join("enabled.txt")).unwrap(),
        ""
    );
}

#[test]
fn test_failed_handler_still_saves_roster() {
    let sandbox = Sandbox::new();
    let global = sandbox.global();
    run_with_manager(&global, |_| Ok(())).unwrap();
    std::fs::write(sandbox.rushmm().join("mods").join("alpha.dll"), b"a").unwrap();

    let err = run_with_manager(&global, |m| {
        run_enable_command(&names(&["alpha", "ghost"]), m)
    })
    .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.starts_with("failed to enable mods: "), "{message}");
    assert!(message.contains("ghost.dll"), "{message}");
    assert_eq!(
        std::fs::read_to_string(sandbox.rushmm().join("enabled.txt")).unwrap(),
        "alpha"
    );
}

#[test]
fn test_session_fails_without_loader() {
    let sandbox = Sandbox::new();
    std::fs::remove_dir(&sandbox.plugins).unwrap();

    let err = run_with_manager(&sandbox.global(), |_| Ok(())).unwrap_err();

    assert!(format!("{err:#}").contains("BepInEx is not installed"));
}

#[test]
fn test_session_fails_when_game_is_missing() {
    let sandbox = Sandbox::new();
    let global = GlobalOptions {
        haste_path: Some(sandbox.temp.path().join("nowhere")),
        ..sandbox.global()
    };

    let err = run_with_manager(&global, |_| Ok(())).unwrap_err();

    assert!(format!("{err:#}").contains("unable to find the Haste folder"));
    assert!(!sandbox.rushmm().join("config.toml").exists());
}
