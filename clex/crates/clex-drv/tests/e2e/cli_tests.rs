//! CLI Interface E2E Tests
//!
//! These tests run the `clex` binary against fixture files and check the
//! report, the stderr messages, and the exit status.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// A `clex` command isolated from the caller's environment and config.
fn clex() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clex"));
    cmd.current_dir(fixtures_dir())
        .env_remove("RUST_LOG")
        .env_remove("CLEX_VERBOSE")
        .env_remove("CLEX_CONFIG");
    cmd
}

#[test]
fn test_cli_help() {
    clex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("clex")));
}

#[test]
fn test_cli_version() {
    clex()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_argument() {
    clex()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: No input file specified"))
        .stderr(predicate::str::contains("Usage: clex <filename.c>"));
}

#[test]
fn test_unreadable_file() {
    clex()
        .arg("does_not_exist.c")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Unable to open file 'does_not_exist.c'",
        ))
        .stderr(predicate::str::contains("Details:"));
}

#[test]
fn test_clean_file_report() {
    clex()
        .arg("clean.c")
        .assert()
        .success()
        .stdout(predicate::str::contains("LEXICAL ANALYSIS REPORT"))
        .stdout(predicate::str::contains("Source File: clean.c"))
        .stdout(predicate::str::contains("LINE     | TOKEN                     | TYPE"))
        .stdout(predicate::str::contains("4        | static                    | KEYWORD"))
        .stdout(predicate::str::contains("13       | 3.14e-10                  | CONSTANT"))
        .stdout(predicate::str::contains("20       | <<=                       | OPERATOR"))
        .stdout(predicate::str::contains("\"Hello World\""))
        .stdout(predicate::str::contains("Analysis Complete - No errors detected"))
        .stdout(predicate::str::contains("stdio").not())
        .stdout(predicate::str::contains("shift").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_error_file_report() {
    clex()
        .arg("errors.c")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "2        | ERROR: Invalid octal constant '0789' (digit '8' out of range)",
        ))
        .stdout(predicate::str::contains("2        | 0789                      | UNKNOWN"))
        .stdout(predicate::str::contains(
            "3        | ERROR: Incomplete hexadecimal constant '0x'",
        ))
        .stdout(predicate::str::contains("ERROR: Multiple decimal points in '1.2.3'"))
        .stdout(predicate::str::contains("ERROR: Invalid exponent format in '3.14e'"))
        .stdout(predicate::str::contains(
            "6        | ERROR: Unterminated string '\"never closed;'",
        ))
        .stdout(predicate::str::contains("7        | ok"))
        .stdout(predicate::str::contains("8        | ERROR: Unrecognized character '`'"))
        .stdout(predicate::str::contains("Analysis Complete - 6 error(s) found"));
}

#[test]
fn test_unterminated_block_comment() {
    clex()
        .arg("open_comment.c")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "\n\n3        | ERROR: Unterminated block comment (started at line 2)\n",
        ))
        .stdout(predicate::str::contains("Analysis Complete - 1 error(s) found"));
}

#[test]
fn test_extension_warning() {
    clex()
        .arg("notes.txt")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Warning: Input file should have .c extension",
        ))
        .stdout(predicate::str::contains("1        | int"));
}

#[test]
fn test_json_format() {
    let output = clex()
        .args(["--format", "json", "errors.c"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be a JSON document");
    assert_eq!(report["source"], "errors.c");
    assert_eq!(report["error_count"], 6);
    assert_eq!(report["tokens"][0]["text"], "int");
    assert_eq!(report["tokens"][0]["type"], "keyword");
    assert_eq!(report["diagnostics"][0]["code"], "E1003");
    assert_eq!(report["diagnostics"][0]["line"], 2);
}

#[test]
fn test_config_file_sets_defaults() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(
        dir.path().join("clex.toml"),
        "[lexer]\nmax_token_length = 4\n\n[report]\nwarn_on_extension = false\n",
    )
    .unwrap();
    fs::write(dir.path().join("long.txt"), "abcdef\n").unwrap();

    Command::new(env!("CARGO_BIN_EXE_clex"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("CLEX_CONFIG")
        .arg("long.txt")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("1        | abc  "))
        .stdout(predicate::str::contains("1        | def  "));
}

#[test]
fn test_cli_flag_overrides_config() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[report]\nformat = \"json\"\n").unwrap();

    clex()
        .arg("--config")
        .arg(&config)
        .args(["--format", "text", "clean.c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LEXICAL ANALYSIS REPORT"));
}

#[test]
fn test_invalid_config_is_fatal() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[lexer]\nmax_token_length = 0\n").unwrap();

    clex()
        .arg("-c")
        .arg(&config)
        .arg("clean.c")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Configuration error"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    clex()
        .args(["--verbose", "--no-color", "clean.c"])
        .assert()
        .success()
        .stderr(predicate::str::contains("analysis complete"))
        .stdout(predicate::str::contains("analysis complete").not());
}
