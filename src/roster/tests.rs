// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Roster, parse};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_parse_trims_and_skips_blank_lines() {
    assert_eq!(
        parse("alpha  \r\nbeta\n\n gamma\t\n"),
        vec!["alpha", "beta", " gamma"]
    );
    assert!(parse("").is_empty());
    assert!(parse("\n\n").is_empty());
}

#[test]
fn test_open_missing_file_is_empty() {
    let temp = temp_dir();
    let roster = Roster::open(temp.path().join("enabled.txt")).unwrap();
    assert!(roster.is_empty());
    assert_eq!(roster.index_of("alpha"), None);
}

#[test]
fn test_open_reads_names_in_order() {
    let temp = temp_dir();
    let path = temp.path().join("enabled.txt");
    std::fs::write(&path, "alpha\nbeta\n").unwrap();

    let roster = Roster::open(&path).unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get(0), Some("alpha"));
    assert_eq!(roster.get(1), Some("beta"));
    assert_eq!(roster.get(2), None);
    assert!(roster.has("beta"));
    assert!(!roster.has("gamma"));
    assert_eq!(roster.index_of("beta"), Some(1));
}

#[test]
fn test_append_and_remove() {
    let temp = temp_dir();
    let mut roster = Roster::open(temp.path().join("enabled.txt")).unwrap();

    roster.append("alpha");
    roster.append("beta");
    roster.append("gamma");
    let removed = roster.remove_at(1);

    assert_eq!(removed, "beta");
    assert_eq!(roster.iter().collect::<Vec<_>>(), vec!["alpha", "gamma"]);
}

#[test]
#[should_panic(expected = "not a valid roster index")]
fn test_remove_out_of_range_panics() {
    let temp = temp_dir();
    let mut roster = Roster::open(temp.path().join("enabled.txt")).unwrap();
    roster.append("alpha");
    roster.remove_at(1);
}

#[test]
fn test_close_truncates_file() {
    let temp = temp_dir();
    let path = temp.path().join("enabled.txt");
    std::fs::write(&path, "alpha\nbeta\ngamma-with-a-long-name\n").unwrap();

    let mut roster = Roster::open(&path).unwrap();
    let index = roster.index_of("gamma-with-a-long-name").unwrap();
    roster.remove_at(index);
    roster.close().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "alpha\nbeta");
}

#[test]
fn test_close_creates_missing_file() {
    let temp = temp_dir();
    let path = temp.path().join("enabled.txt");

    let mut roster = Roster::open(&path).unwrap();
    roster.append("alpha");
    roster.close().unwrap();

    let reopened = Roster::open(&path).unwrap();
    assert_eq!(reopened.iter().collect::<Vec<_>>(), vec!["alpha"]);
}

#[test]
fn test_open_rejects_invalid_utf8() {
    let temp = temp_dir();
    let path = temp.path().join("enabled.txt");
    let bytes = b"alpha\n\xff\xfebeta\n";
    std::fs::write(&path, bytes).unwrap();

    let err = Roster::open(&path).unwrap_err();

    assert!(!err.is_missing());
    assert!(err.to_string().contains("enabled.txt"));
    assert_eq!(std::fs::read(&path).unwrap(), bytes, "file left as is");
}
