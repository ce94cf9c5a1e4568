// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ignore_missing, is_missing_or_empty, read, remove_file, write, write_atomic};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_read_missing_is_classified() {
    let temp = temp_dir();
    let err = read(&temp.path().join("absent.dll")).unwrap_err();
    assert!(err.is_missing(), "expected Missing, got {err:?}");
}

#[test]
fn test_write_then_read() {
    let temp = temp_dir();
    let path = temp.path().join("mod.dll");

    write(&path, b"first").unwrap();
    write(&path, b"2nd").unwrap();

    assert_eq!(read(&path).unwrap(), b"2nd");
}

#[test]
fn test_remove_file_missing() {
    let temp = temp_dir();
    let result = ignore_missing(remove_file(&temp.path().join("gone.pdb")));
    assert!(matches!(result, Ok(None)));
}

#[test]
fn test_ignore_missing_passes_values_through() {
    let temp = temp_dir();
    let path = temp.path().join("here.pdb");
    std::fs::write(&path, b"pdb").unwrap();

    let content = ignore_missing(read(&path)).unwrap();
    assert_eq!(content.as_deref(), Some(&b"pdb"[..]));
}

#[test]
fn test_write_atomic_replaces_content() {
    let temp = temp_dir();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "stale").unwrap();

    write_atomic(&path, b"fresh").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    let leftovers = std::fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(leftovers, 1, "temporary file should be renamed away");
}

#[test]
fn test_is_missing_or_empty() {
    let temp = temp_dir();
    let dir = temp.path().join("rushmm");

    assert!(is_missing_or_empty(&dir).unwrap());

    std::fs::create_dir(&dir).unwrap();
    assert!(is_missing_or_empty(&dir).unwrap());

    std::fs::write(dir.join("enabled.txt"), "").unwrap();
    assert!(!is_missing_or_empty(&dir).unwrap());
}
