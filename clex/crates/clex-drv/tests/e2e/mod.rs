//! End-to-end tests for the `clex` binary.
//!
//! Each test runs the built binary against the files in `tests/fixtures`.

mod cli_tests;
