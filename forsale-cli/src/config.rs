//! Command-line arguments and configuration file handling.
//!
//! Precedence: command-line flags, then the TOML file, then built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use forsale_core::ForsaleError;
use forsale_toolbox::ResolverSettings;
use serde::Deserialize;

/// Check whether domains are marked for sale via `_for-sale` TXT records
#[derive(Debug, Parser)]
#[command(name = "forsale", version, about)]
pub struct Args {
    /// Domains to check (Unicode or punycode)
    #[arg(required = true)]
    pub domains: Vec<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Nameserver IP address (defaults to the system resolver)
    #[arg(long)]
    pub nameserver: Option<String>,

    /// Overall deadline per lookup in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Attempts per nameserver
    #[arg(long)]
    pub attempts: Option<usize>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Log filter, e.g. `info` or `forsale_core=debug`
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// `[resolver]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverSection {
    pub nameserver: Option<String>,
    pub timeout_ms: u64,
    pub attempts: usize,
}

impl Default for ResolverSection {
    fn default() -> Self {
        let defaults = ResolverSettings::default();
        Self {
            nameserver: None,
            timeout_ms: u64::try_from(defaults.timeout.as_millis()).unwrap_or(u64::MAX),
            attempts: defaults.attempts,
        }
    }
}

/// `[log]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: String,
    pub json: bool,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Contents of the TOML configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub resolver: ResolverSection,
    pub log: LogSection,
}

impl FileConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration file")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In {}", path.display()))
    }
}

/// Effective settings after merging flags over the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub resolver: ResolverSettings,
    pub log_level: String,
    pub json_logs: bool,
    pub compact: bool,
}

impl AppConfig {
    pub fn load(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    fn merge(args: &Args, file: FileConfig) -> Result<Self> {
        let nameserver = args
            .nameserver
            .clone()
            .or(file.resolver.nameserver)
            .unwrap_or_default();
        let timeout_ms = args.timeout_ms.unwrap_or(file.resolver.timeout_ms);
        if timeout_ms == 0 {
            return Err(
                ForsaleError::Config("lookup timeout must be greater than zero".to_string()).into(),
            );
        }

        let resolver = ResolverSettings::default()
            .with_nameserver(&nameserver)?
            .with_timeout(Duration::from_millis(timeout_ms))
            .with_attempts(args.attempts.unwrap_or(file.resolver.attempts));

        Ok(Self {
            resolver,
            log_level: args.log_level.clone().unwrap_or(file.log.level),
            json_logs: args.json_logs || file.log.json,
            compact: args.compact,
        })
    }
}
