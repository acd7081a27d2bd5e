//! Exit protocol of the `folio` binary
//!
//! Runs the real binary with HOME pointed at a scratch directory so the log
//! file never lands in the user's home.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

fn folio(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("FOLIO_LOG")
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn missing_file_exits_with_open_diagnostic() {
    let home = tempdir().unwrap();
    let missing = home.path().join("does-not-exist.txt");

    for strategy in ["raw", "lines"] {
        let out = folio(&home, &[path_str(&missing), "--strategy", strategy, "--print"]);

        assert!(!out.status.success());
        assert_eq!(out.status.code(), Some(1));
        assert!(out.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains(&format!("Failed to open file: {}", missing.display())));
    }
}

#[test]
fn empty_file_is_fatal_for_raw() {
    let home = tempdir().unwrap();
    let empty = home.path().join("empty.txt");
    fs::write(&empty, "").unwrap();

    let out = folio(&home, &[path_str(&empty), "--strategy", "raw", "--print"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(&format!("File is empty: {}", empty.display())));
}

#[test]
fn empty_file_loads_as_nothing_for_lines() {
    let home = tempdir().unwrap();
    let empty = home.path().join("empty.txt");
    fs::write(&empty, "").unwrap();

    let out = folio(&home, &[path_str(&empty), "--strategy", "lines", "--print"]);

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn print_normalizes_line_endings() {
    let home = tempdir().unwrap();
    let file = home.path().join("crlf.txt");
    fs::write(&file, "hello\r\nworld").unwrap();

    let out = folio(&home, &[path_str(&file), "--print"]);

    assert!(out.status.success());
    assert_eq!(out.stdout, b"hello\nworld\n");
}

#[test]
fn print_raw_is_verbatim() {
    let home = tempdir().unwrap();
    let file = home.path().join("x.txt");
    fs::write(&file, "x").unwrap();

    let out = folio(&home, &[path_str(&file), "--strategy", "raw", "--print"]);

    assert!(out.status.success());
    assert_eq!(out.stdout, b"x");
}
