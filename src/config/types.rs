//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_WHOIS_CACHE_DIR, WHOIS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format for extracted feature vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line, keys in feature order
    Jsonl,
    /// One header row plus one row per URL
    Csv,
}

/// Feature extraction configuration.
///
/// Parsed from the command line by the binary, or built programmatically:
///
/// ```no_run
/// use phish_features::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("urls.txt"),
///     enable_whois: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "phish_features",
    version,
    about = "Extracts phishing-classifier features from URLs"
)]
pub struct Config {
    /// File to read URLs from (one per line, `-` for stdin)
    pub file: PathBuf,

    /// Write features here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Jsonl)]
    pub format: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Maximum URLs processed concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Timeout for a single WHOIS lookup in seconds
    #[arg(long, default_value_t = WHOIS_TIMEOUT_SECS)]
    pub whois_timeout_secs: u64,

    /// Perform WHOIS lookups (disable with --no-whois; registration features become -1)
    #[arg(long = "no-whois", action = clap::ArgAction::SetFalse)]
    pub enable_whois: bool,

    /// Cache WHOIS results on disk (bare flag uses `.whois_cache`)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_WHOIS_CACHE_DIR)]
    pub whois_cache_dir: Option<PathBuf>,

    /// Public Suffix List file to use instead of the built-in list
    #[arg(long)]
    pub suffix_list: Option<PathBuf>,

    /// File with phishing keywords (one per line) replacing the defaults
    #[arg(long)]
    pub keywords: Option<PathBuf>,

    /// File with URL shortener domains (one per line) replacing the defaults
    #[arg(long)]
    pub shorteners: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("urls.txt"),
            output: None,
            format: OutputFormat::Jsonl,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            whois_timeout_secs: WHOIS_TIMEOUT_SECS,
            enable_whois: true,
            whois_cache_dir: None,
            suffix_list: None,
            keywords: None,
            shorteners: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_concurrency, 10);
        assert_eq!(config.whois_timeout_secs, 5);
        assert!(config.enable_whois);
        assert_eq!(config.format, OutputFormat::Jsonl);
        assert!(config.output.is_none());
        assert!(config.whois_cache_dir.is_none());
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = Config::parse_from(["phish_features", "urls.txt"]);
        assert_eq!(config.file, PathBuf::from("urls.txt"));
        assert!(config.enable_whois);
        assert_eq!(config.format, OutputFormat::Jsonl);
    }

    #[test]
    fn test_config_parse_no_whois_and_csv() {
        let config = Config::parse_from([
            "phish_features",
            "-",
            "--no-whois",
            "--format",
            "csv",
            "--max-concurrency",
            "4",
        ]);
        assert_eq!(config.file, PathBuf::from("-"));
        assert!(!config.enable_whois);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.max_concurrency, 4);
    }

    #[test]
    fn test_config_parse_bare_cache_flag() {
        let config = Config::parse_from(["phish_features", "urls.txt", "--whois-cache-dir"]);
        assert_eq!(
            config.whois_cache_dir,
            Some(PathBuf::from(DEFAULT_WHOIS_CACHE_DIR))
        );
    }

    #[test]
    fn test_config_parse_rejects_unknown_format() {
        let result = Config::try_parse_from(["phish_features", "urls.txt", "--format", "xml"]);
        assert!(result.is_err());
    }
}
