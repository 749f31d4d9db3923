//! Tests for command-line parsing into `Config`.

use clap::Parser;
use phish_features::config::{DEFAULT_MAX_CONCURRENCY, WHOIS_TIMEOUT_SECS};
use phish_features::{Config, LogFormat, LogLevel, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_defaults_from_minimal_args() {
    let config = Config::try_parse_from(["phish_features", "urls.txt"]).unwrap();
    assert_eq!(config.file, PathBuf::from("urls.txt"));
    assert_eq!(config.output, None);
    assert_eq!(config.format, OutputFormat::Jsonl);
    assert!(matches!(config.log_level, LogLevel::Info));
    assert!(matches!(config.log_format, LogFormat::Plain));
    assert_eq!(config.max_concurrency, DEFAULT_MAX_CONCURRENCY);
    assert_eq!(config.whois_timeout_secs, WHOIS_TIMEOUT_SECS);
    assert!(config.enable_whois);
    assert!(config.whois_cache_dir.is_none());
}

#[test]
fn test_all_flags() {
    let config = Config::try_parse_from([
        "phish_features",
        "-",
        "--output",
        "out.csv",
        "--format",
        "csv",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--max-concurrency",
        "3",
        "--whois-timeout-secs",
        "9",
        "--no-whois",
        "--whois-cache-dir",
        "/tmp/whois",
        "--suffix-list",
        "psl.dat",
        "--keywords",
        "keywords.txt",
        "--shorteners",
        "shorteners.txt",
    ])
    .unwrap();

    assert_eq!(config.file.as_os_str(), "-");
    assert_eq!(config.output, Some(PathBuf::from("out.csv")));
    assert_eq!(config.format, OutputFormat::Csv);
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.max_concurrency, 3);
    assert_eq!(config.whois_timeout_secs, 9);
    assert!(!config.enable_whois);
    assert_eq!(config.whois_cache_dir, Some(PathBuf::from("/tmp/whois")));
    assert_eq!(config.suffix_list, Some(PathBuf::from("psl.dat")));
    assert_eq!(config.keywords, Some(PathBuf::from("keywords.txt")));
    assert_eq!(config.shorteners, Some(PathBuf::from("shorteners.txt")));
}

#[test]
fn test_missing_file_argument_is_rejected() {
    assert!(Config::try_parse_from(["phish_features"]).is_err());
}

#[test]
fn test_invalid_values_are_rejected() {
    for args in [
        vec!["phish_features", "urls.txt", "--format", "parquet"],
        vec!["phish_features", "urls.txt", "--log-level", "loud"],
        vec!["phish_features", "urls.txt", "--max-concurrency", "-1"],
        vec!["phish_features", "urls.txt", "--whois-timeout-secs", "soon"],
    ] {
        assert!(
            Config::try_parse_from(args.iter().copied()).is_err(),
            "{args:?} should be rejected"
        );
    }
}
