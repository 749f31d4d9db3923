//! On-disk WHOIS cache.
//!
//! `CachedLookup` wraps another `RegistrationLookup` and stores successful
//! records as JSON files keyed by domain. Failures are never cached, and a
//! broken cache entry is treated as a miss.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;

use super::types::{RegistrationLookup, RegistrationRecord};
use crate::config::WHOIS_CACHE_TTL_SECS;
use crate::error_handling::LookupFailure;

/// Metadata about a cached WHOIS lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    record: RegistrationRecord,
    cached_at: SystemTime,
    domain: String,
}

/// Percent-encodes the domain into a file name, so distinct domains never share an entry.
fn cache_file(cache_path: &Path, domain: &str) -> PathBuf {
    let name: String = byte_serialize(domain.as_bytes()).collect();
    cache_path.join(format!("{name}.json"))
}

/// Loads a cached record from disk, deleting it if older than `ttl`.
fn load_from_cache(cache_path: &Path, domain: &str, ttl: Duration) -> Result<Option<RegistrationRecord>> {
    let file = cache_file(cache_path, domain);

    if !file.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&file).context("Failed to read cache file")?;
    let entry: CacheEntry = serde_json::from_str(&content).context("Failed to parse cache file")?;

    let age = entry.cached_at.elapsed().unwrap_or_default();
    if age > ttl {
        let _ = std::fs::remove_file(&file);
        return Ok(None);
    }

    Ok(Some(entry.record))
}

/// Saves a record to the disk cache.
fn save_to_cache(cache_path: &Path, domain: &str, record: &RegistrationRecord) -> Result<()> {
    std::fs::create_dir_all(cache_path).context("Failed to create cache directory")?;

    let entry = CacheEntry {
        record: record.clone(),
        cached_at: SystemTime::now(),
        domain: domain.to_string(),
    };

    let content =
        serde_json::to_string_pretty(&entry).context("Failed to serialize cache entry")?;
    std::fs::write(cache_file(cache_path, domain), content).context("Failed to write cache file")?;

    Ok(())
}

/// A registration lookup backed by a disk cache.
pub struct CachedLookup<L> {
    inner: L,
    cache_path: PathBuf,
    ttl: Duration,
}

impl<L: RegistrationLookup> CachedLookup<L> {
    /// Wraps `inner`, storing entries under `cache_path` for seven days.
    pub fn new(inner: L, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            cache_path: cache_path.into(),
            ttl: Duration::from_secs(WHOIS_CACHE_TTL_SECS),
        }
    }

    /// Sets how long an entry stays valid.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

#[async_trait]
impl<L: RegistrationLookup> RegistrationLookup for CachedLookup<L> {
    async fn lookup(&self, domain: &str) -> Result<RegistrationRecord, LookupFailure> {
        match load_from_cache(&self.cache_path, domain, self.ttl) {
            Ok(Some(record)) => {
                log::debug!("WHOIS cache hit for {domain}");
                return Ok(record);
            }
            Ok(None) => {}
            Err(e) => log::debug!("Ignoring unreadable WHOIS cache entry for {domain}: {e:#}"),
        }

        let record = self.inner.lookup(domain).await?;
        if let Err(e) = save_to_cache(&self.cache_path, domain, &record) {
            log::warn!("Failed to cache WHOIS result for {domain}: {e:#}");
        }
        Ok(record)
    }
}
