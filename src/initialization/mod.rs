//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger (plain or JSON)
//! - Public suffix rules (compiled-in or loaded from a PSL file)
//! - Extractor configuration (keyword and shortener overrides)
//! - Registration lookup (WHOIS client, optionally behind the disk cache)
//!
//! All initialization functions return proper error types for error handling.

mod logger;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::sync::Semaphore;

use crate::config::Config;
use crate::domain::{PublicSuffixList, RuleSuffixList, SuffixList};
use crate::error_handling::InitializationError;
use crate::features::ExtractorConfig;
use crate::whois::{CachedLookup, RegistrationLookup, WhoisLookup};

// Re-export public API
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// Limits the number of URLs whose features are being extracted at once, which
/// in practice bounds the number of open WHOIS connections.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.max(1)))
}

fn read_config_file(path: &Path) -> Result<String, InitializationError> {
    std::fs::read_to_string(path).map_err(|source| InitializationError::ConfigFileError {
        path: path.display().to_string(),
        source,
    })
}

/// Reads a one-entry-per-line list, skipping blank lines and `#` comments.
fn read_list_file(path: &Path) -> Result<Vec<String>, InitializationError> {
    let content = read_config_file(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Initializes the public suffix rules.
///
/// Without a path the compiled-in list from the `psl` crate is used. With a
/// path the file is parsed once in Public Suffix List format (ICANN section).
///
/// # Errors
///
/// Returns `InitializationError::ConfigFileError` if the file cannot be read,
/// `InitializationError::EmptySuffixListError` if it holds no rules and
/// `InitializationError::SuffixListParseError` if a rule is malformed.
pub fn init_suffix_list(path: Option<&Path>) -> Result<Arc<dyn SuffixList>, InitializationError> {
    let Some(path) = path else {
        return Ok(Arc::new(PublicSuffixList));
    };

    let text = read_config_file(path)?;
    let has_rules = text
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with("//"));
    if !has_rules {
        return Err(InitializationError::EmptySuffixListError(
            path.display().to_string(),
        ));
    }

    let list = RuleSuffixList::from_psl_text(&text).map_err(|e| {
        InitializationError::SuffixListParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;
    info!("Loaded {} suffix rules from {}", list.len(), path.display());
    Ok(Arc::new(list))
}

/// Builds the shared extractor configuration from CLI settings.
///
/// # Errors
///
/// Returns an `InitializationError` if the suffix list, keyword or shortener
/// files cannot be read.
pub fn init_extractor_config(config: &Config) -> Result<Arc<ExtractorConfig>, InitializationError> {
    let suffixes = init_suffix_list(config.suffix_list.as_deref())?;
    let mut extractor_config = ExtractorConfig::new(suffixes)
        .with_lookup_timeout(Duration::from_secs(config.whois_timeout_secs));

    if let Some(path) = &config.keywords {
        let keywords = read_list_file(path)?;
        info!("Loaded {} keywords from {}", keywords.len(), path.display());
        extractor_config = extractor_config.with_keywords(keywords);
    }
    if let Some(path) = &config.shorteners {
        let shorteners = read_list_file(path)?;
        info!("Loaded {} shorteners from {}", shorteners.len(), path.display());
        extractor_config = extractor_config.with_shorteners(shorteners);
    }

    Ok(Arc::new(extractor_config))
}

/// Initializes the registration lookup, or `None` when WHOIS is disabled.
///
/// With a cache directory the WHOIS client is wrapped in `CachedLookup`.
///
/// # Errors
///
/// Returns `InitializationError::WhoisClientError` if the WHOIS client cannot
/// be created.
pub async fn init_lookup(
    config: &Config,
) -> Result<Option<Arc<dyn RegistrationLookup>>, InitializationError> {
    if !config.enable_whois {
        info!("WHOIS lookups disabled; registration features will be -1");
        return Ok(None);
    }

    let client = WhoisLookup::new().await?;
    let lookup: Arc<dyn RegistrationLookup> = match &config.whois_cache_dir {
        Some(dir) => {
            info!("Caching WHOIS results in {}", dir.display());
            Arc::new(CachedLookup::new(client, dir.clone()))
        }
        None => Arc::new(client),
    };
    Ok(Some(lookup))
}
