//! clex-drv - Driver for the clex lexical analyzer.
//!
//! Ties the pipeline together: command-line parsing ([`cli`]),
//! configuration ([`config`]), the streaming analysis [`session`], and
//! report rendering ([`report`]).
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use clex_drv::{Config, Session, TextReport};
//!
//! let mut session = Session::new(Config::default());
//! let mut report = TextReport::new(Vec::new());
//! let summary = session
//!     .analyze("demo.c", Cursor::new("int x = 08;\n"), &mut report)
//!     .unwrap();
//!
//! assert_eq!(summary.error_count, 1);
//! let text = String::from_utf8(report.into_inner()).unwrap();
//! assert!(text.contains("ERROR: Invalid octal constant '08' (digit '8' out of range)"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod session;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use tracing::{debug, info};

pub use cli::Cli;
pub use config::{Config, ReportFormat};
pub use error::{ClexError, Result};
pub use report::{JsonReport, ReportSink, TextReport};
pub use session::{Session, Summary};

/// Name the binary is invoked as.
pub const BIN_NAME: &str = "clex";

/// Runs the analyzer for parsed command-line arguments.
///
/// Returns the analysis summary; the caller maps it to an exit status.
pub fn run(cli: &Cli) -> Result<Summary> {
    let path = cli.file.as_deref().ok_or(ClexError::MissingInput)?;

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    config.validate()?;
    debug!(?config, "effective configuration");

    if config.report.warn_on_extension && !has_c_extension(path) {
        eprintln!("Warning: Input file should have .c extension");
    }

    let file = File::open(path).map_err(|source| ClexError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "analyzing");

    let source = path.display().to_string();
    let reader = BufReader::new(file);
    let stdout = io::stdout();
    let out = io::BufWriter::new(stdout.lock());

    let format = config.report.format;
    let mut session = Session::new(config);
    match format {
        ReportFormat::Text => session.analyze(&source, reader, &mut TextReport::new(out)),
        ReportFormat::Json => session.analyze(&source, reader, &mut JsonReport::new(out)),
    }
}

/// True when the final extension is exactly `c`.
pub fn has_c_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "c")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;

    #[test]
    fn test_extension_check() {
        assert!(has_c_extension(Path::new("main.c")));
        assert!(has_c_extension(Path::new("dir.d/x.c")));
        assert!(!has_c_extension(Path::new("main.cpp")));
        assert!(!has_c_extension(Path::new("main.C")));
        assert!(!has_c_extension(Path::new("Makefile")));
        assert!(!has_c_extension(Path::new("main.c.bak")));
    }

    #[test]
    fn test_run_without_file() {
        let cli = Cli::parse_from(["clex"]);
        assert!(matches!(run(&cli), Err(ClexError::MissingInput)));
    }

    #[test]
    fn test_run_missing_file() {
        let cli = Cli {
            file: Some(PathBuf::from("/definitely/not/here.c")),
            verbose: false,
            config: None,
            no_color: true,
            format: None,
            max_token_length: None,
        };
        match run(&cli) {
            Err(ClexError::OpenInput { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.c"))
            },
            other => panic!("expected open failure, got {other:?}"),
        }
    }
}
