//! Immutable extraction context.
//!
//! `ExtractorConfig` groups everything feature computation reads but never
//! changes: the suffix rules, the keyword and shortener sets, the IP pattern
//! and the lookup timeout. It is built once at startup and shared through an
//! `Arc`, so tests can build their own with a fake suffix list.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use regex::Regex;

use crate::config::{DEFAULT_KEYWORDS, DEFAULT_SHORTENERS, WHOIS_TIMEOUT_SECS};
use crate::domain::{PublicSuffixList, SuffixList};

/// Dotted-quad hostnames. Full match only; IPv6 is not recognized.
const IP_PATTERN: &str = r"^\d+\.\d+\.\d+\.\d+$";

/// Shared, read-only configuration for `FeatureExtractor`.
#[derive(Clone)]
pub struct ExtractorConfig {
    /// Public suffix rules for domain splitting
    pub suffixes: Arc<dyn SuffixList>,
    /// Lowercase keywords matched as substrings of the lowercased URL
    pub keywords: Vec<String>,
    /// `domain.suffix` names of URL shorteners
    pub shorteners: HashSet<String>,
    /// Compiled dotted-quad pattern
    pub ip_pattern: Regex,
    /// Upper bound on one registration lookup
    pub lookup_timeout: Duration,
}

impl ExtractorConfig {
    /// Builds a config with the default keyword and shortener sets.
    pub fn new(suffixes: Arc<dyn SuffixList>) -> Self {
        Self {
            suffixes,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            shorteners: DEFAULT_SHORTENERS.iter().map(|s| s.to_string()).collect(),
            ip_pattern: Regex::new(IP_PATTERN).expect("IP pattern is a valid regex"),
            lookup_timeout: Duration::from_secs(WHOIS_TIMEOUT_SECS),
        }
    }

    /// Replaces the keyword set. Keywords are lowercased and blanks dropped.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    /// Replaces the shortener set. Entries are lowercased and blanks dropped.
    pub fn with_shorteners<I, S>(mut self, shorteners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.shorteners = shorteners
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// Sets the timeout for each registration lookup.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }
}

impl Default for ExtractorConfig {
    /// Uses the compiled-in Public Suffix List.
    fn default() -> Self {
        Self::new(Arc::new(PublicSuffixList))
    }
}

impl std::fmt::Debug for ExtractorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorConfig")
            .field("keywords", &self.keywords)
            .field("shorteners", &self.shorteners)
            .field("lookup_timeout", &self.lookup_timeout)
            .finish_non_exhaustive()
    }
}
