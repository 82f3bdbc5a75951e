//! Configuration management for cvet.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (project or user level)

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::parser::{ParseOptions, RowWidth};

/// Project-level config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".cvet.toml";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command-line arguments for cvet
#[derive(Debug, Parser)]
#[command(name = "cvet")]
#[command(about = "Vet CSV files for rows with empty fields")]
#[command(version)]
pub struct Args {
    /// CSV files to vet
    pub paths: Vec<PathBuf>,

    /// Reject records whose field count differs from the header
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,

    /// Accept any field count, even if the config file sets `strict`
    #[arg(long, overrides_with = "strict")]
    pub no_strict: bool,

    /// Pretty-print the JSON output
    #[arg(long, overrides_with = "no_pretty")]
    pub pretty: bool,

    /// Print compact JSON, even if the config file sets `pretty`
    #[arg(long, overrides_with = "pretty")]
    pub no_pretty: bool,

    /// Path to a cvet TOML config file, used instead of the discovered one
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Settings read from a TOML config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub strict: bool,
    pub pretty: bool,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML: {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Files to vet, in output order
    pub paths: Vec<PathBuf>,
    pub parse_options: ParseOptions,
    pub pretty: bool,
    pub log_level: String,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            parse_options: ParseOptions::default(),
            pretty: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            config_path: None,
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = match &args.config {
            Some(path) => Some(path.clone()),
            None => discover_config_file(),
        };

        let file = match &config_path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self::merge(args, file, config_path))
    }

    /// Command-line flags take precedence over the file
    pub fn merge(args: Args, file: FileConfig, config_path: Option<PathBuf>) -> Self {
        let strict = cli_switch(args.strict, args.no_strict).unwrap_or(file.strict);
        let row_width = if strict {
            RowWidth::Strict
        } else {
            RowWidth::Flexible
        };

        Config {
            paths: args.paths,
            parse_options: ParseOptions { row_width },
            pretty: cli_switch(args.pretty, args.no_pretty).unwrap_or(file.pretty),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            config_path,
        }
    }
}

/// A `--flag` / `--no-flag` pair; `None` when neither was given
fn cli_switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// First existing config file: project directory, then user config directory
fn discover_config_file() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(PROJECT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("cvet").join("config.toml"));
    }

    candidates.into_iter().find(|path| path.is_file())
}
