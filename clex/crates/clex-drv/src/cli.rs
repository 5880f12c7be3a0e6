//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ReportFormat};

/// clex - lexical analyzer for C source files
///
/// Reads a C source file line by line and prints every token with its
/// line number and category, flagging malformed lexical constructs.
#[derive(Parser, Debug)]
#[command(name = "clex")]
#[command(author = "Clex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for C source files", long_about = None)]
pub struct Cli {
    /// C source file to analyze
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long, env = "CLEX_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CLEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color in log output
    #[arg(long, env = "CLEX_NO_COLOR")]
    pub no_color: bool,

    /// Report format (default: from config)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Token buffer size; tokens keep at most N-1 characters (default: from config)
    #[arg(long, value_name = "N")]
    pub max_token_length: Option<usize>,
}

impl Cli {
    /// Applies flag overrides on top of file configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.report.format = format;
        }
        if let Some(max) = self.max_token_length {
            config.lexer.max_token_length = max;
        }
    }
}
