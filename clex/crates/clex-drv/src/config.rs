//! Configuration for the clex driver.
//!
//! Settings come from `clex.toml`, searched in the current directory and
//! then in the user configuration directory. Command-line flags override
//! file values.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use clex_lex::DEFAULT_MAX_TOKEN_LENGTH;
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::error::{ClexError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "clex.toml";

/// Accepted range for `lexer.max_token_length`.
pub const TOKEN_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 2..=4096;

/// Report rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Fixed-width table
    #[default]
    Text,
    /// Single JSON document
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scanner settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Scanner settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LexerConfig {
    /// Token buffer size; a token stores at most one less character.
    #[serde(default = "default_max_token_length")]
    pub max_token_length: usize,
}

/// Report settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Output format.
    #[serde(default)]
    pub format: ReportFormat,

    /// Warn when the input file does not end in `.c`.
    #[serde(default = "default_true")]
    pub warn_on_extension: bool,
}

fn default_max_token_length() -> usize {
    DEFAULT_MAX_TOKEN_LENGTH
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_token_length: default_max_token_length(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            warn_on_extension: default_true(),
        }
    }
}

impl Config {
    /// Loads configuration from `explicit` if given, otherwise from the
    /// first `clex.toml` found, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => match Self::find_config_file() {
                Some(path) => Self::load_from_path(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Loads and validates configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClexError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ClexError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Finds the configuration file in standard locations.
    pub fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }

        config_dir()
            .map(|dir| dir.join("clex").join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if !TOKEN_LENGTH_RANGE.contains(&self.lexer.max_token_length) {
            return Err(ClexError::Config(format!(
                "max_token_length must be between {} and {}, got {}",
                TOKEN_LENGTH_RANGE.start(),
                TOKEN_LENGTH_RANGE.end(),
                self.lexer.max_token_length
            )));
        }
        Ok(())
    }
}
