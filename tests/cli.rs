//! Integration tests for the `smartfold` command-line interface.
//!
//! This module validates:
//! - Reading documents from a file or standard input
//! - Cursor parsing and range checking
//! - Double-tap escalation through `--taps` and `--interval-ms`
//! - Silent no-ops when nothing can be folded

use std::fs;

use tempfile::tempdir;

#[macro_use]
mod prelude;
use prelude::*;

const NESTED: &str = "# A\n- x\n  - y\n    - z\n";

#[test]
fn test_cli_version_flag() {
    smartfold()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("smartfold {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_requires_cursor() {
    smartfold().write_stdin("# A\n").assert().failure();
}

/// Folding a heading read from standard input hides its section and keeps the
/// cursor where it was.
#[test]
fn test_cli_folds_heading_from_stdin() {
    smartfold()
        .args(["--cursor", "2"])
        .write_stdin("# A\n## B\n- x\n  - y\n")
        .assert()
        .success()
        .stdout("# A\n## B …\ncursor: 2:1\n");
}

/// A leaf list item folds its parent; the hidden cursor stays on the parent.
#[test]
fn test_cli_folds_list_parent_from_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file = dir.path().join("outline.md");
    fs::write(&file, "# A\n## B\n- x\n  - y\n").expect("failed to write input");
    smartfold()
        .arg(&file)
        .args(["--cursor", "4:5"])
        .assert()
        .success()
        .stdout("# A\n## B\n- x …\ncursor: 3:3\n");
}

#[rstest]
#[case(&["--taps", "2", "--interval-ms", "100"], "# A\n- x …\ncursor: 2:3\n")]
#[case(
    &["--taps", "2", "--interval-ms", "500"],
    "# A\n- x\n  - y\n    - z\ncursor: 3:1\n"
)]
#[case(
    &["--taps", "2", "--interval-ms", "100", "--no-parent-escalation"],
    "# A\n- x\n  - y\n    - z\ncursor: 3:1\n"
)]
#[case(
    &["--taps", "2", "--interval-ms", "600", "--window-ms", "5000"],
    "# A\n- x …\ncursor: 2:3\n"
)]
fn test_cli_double_tap(#[case] args: &[&str], #[case] expected: &str) {
    smartfold()
        .args(["--cursor", "3"])
        .args(args)
        .write_stdin(NESTED)
        .assert()
        .success()
        .stdout(expected.to_string());
}

/// Escalating to a heading whose marker is followed by a no-break space parks
/// the cursor after the whole separator, not inside it.
#[test]
fn test_cli_heading_with_wide_separator() {
    smartfold()
        .args(["--cursor", "3:3", "--taps", "2", "--interval-ms", "100"])
        .write_stdin("#\u{a0}Title\n- x\n  - y\n")
        .assert()
        .success()
        .stdout("#\u{a0}Title …\ncursor: 1:4\n");
}

#[test]
fn test_cli_nothing_to_fold_is_silent() {
    smartfold()
        .args(["--cursor", "2"])
        .write_stdin("text\n\n")
        .assert()
        .success()
        .stdout("text\n\ncursor: 2:1\n");
}

#[rstest]
#[case("9")]
#[case("0")]
#[case("1:x")]
fn test_cli_rejects_bad_cursor(#[case] cursor: &str) {
    smartfold()
        .args(["--cursor", cursor])
        .write_stdin(NESTED)
        .assert()
        .failure()
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn test_cli_missing_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    smartfold()
        .arg(dir.path().join("absent.md"))
        .args(["--cursor", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.md"));
}
