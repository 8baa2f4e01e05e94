//! Configuration for the gtfo command line
//!
//! This module provides the flag surface of the binary and the helpers that
//! turn it into paths and log levels.

use std::path::PathBuf;

use clap::Parser;
use gtfo_format::DEFAULT_FORMAT;

/// Reads `go test -json` from stdin and prints one line per failing test
#[derive(Parser, Debug, Clone)]
#[command(name = "gtfo")]
#[command(version, about, long_about = None)]
#[command(after_help = "Usage:\n  go test -json ./... | gtfo [flags]")]
pub struct Config {
    /// Format applied to each failing test
    ///
    /// Fields: {{.FullPackage}}, {{.Package}}, {{.Module}}, {{.File}},
    /// {{.FullPath}}, {{.Path}}, {{.Line}}, {{.Output}}. The sequences
    /// \n, \r and \t are expanded.
    #[arg(short, long, env = "GTFO_FORMAT", default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Directory holding the go.mod used to shorten package paths
    ///
    /// Defaults to the current working directory.
    #[arg(short = 'C', long, env = "GTFO_DIR")]
    pub dir: Option<PathBuf>,

    /// Print each failing test as a JSON object instead of formatting it
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the formatted output.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            dir: None,
            json: false,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Get the directory to look for go.mod in, using current directory as default
    ///
    /// Returns `None` if no directory is specified and the current
    /// directory cannot be determined.
    #[must_use]
    pub fn manifest_dir(&self) -> Option<PathBuf> {
        self.dir.clone().or_else(|| std::env::current_dir().ok())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is specified but doesn't exist or is
    /// not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.dir {
            if !dir.exists() {
                return Err(ConfigError::DirectoryNotFound(dir.clone()));
            }
            if !dir.is_dir() {
                return Err(ConfigError::NotADirectory(dir.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Directory not found
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Path is not a directory
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),
}
