//! Configuration constants.
//!
//! This module defines the constants used throughout the application, including
//! the fixed feature key order, the default keyword and shortener sets, and the
//! WHOIS timeouts.

/// Feature keys in the order the downstream classifier was trained on.
///
/// Every `FeatureVector` serializes exactly these keys, in exactly this order.
pub const FEATURE_KEYS: [&str; 24] = [
    "url",
    "url_len",
    "host_len",
    "path_len",
    "query_len",
    "is_https",
    "count_dots",
    "count_hyphen",
    "count_at",
    "count_qm",
    "count_eq",
    "count_slash",
    "count_digits",
    "has_ip",
    "has_https",
    "has_shortener",
    "has_keyword",
    "subdomain_len",
    "domain",
    "suffix",
    "domain_entropy",
    "domain_age",
    "days_to_expire",
    "registration_length",
];

/// Sentinel for registration-derived features that could not be computed.
pub const MISSING_REGISTRATION_VALUE: i64 = -1;

/// Keywords commonly found in phishing URLs (matched case-insensitively).
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "secure", "account", "update", "free", "lucky", "bonus", "click", "offer", "winner", "login",
    "verify", "banking", "confirm", "password", "signin",
];

/// Known URL-shortening service domains (`domain.suffix`).
pub const DEFAULT_SHORTENERS: &[&str] = &[
    "bit.ly",
    "t.co",
    "tinyurl.com",
    "goo.gl",
    "ow.ly",
    "is.gd",
    "buff.ly",
    "cutt.ly",
];

// WHOIS lookups
/// Timeout for a whole registration lookup in seconds.
/// Most WHOIS queries complete in <2s; 5s fails fast on unresponsive registries.
pub const WHOIS_TIMEOUT_SECS: u64 = 5;
/// Default directory for the opt-in WHOIS disk cache.
pub const DEFAULT_WHOIS_CACHE_DIR: &str = ".whois_cache";
/// WHOIS cache TTL: 7 days (registration data changes infrequently)
pub const WHOIS_CACHE_TTL_SECS: u64 = 7 * 24 * 60 * 60;

// Batch runs
/// Default number of URLs processed concurrently.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;
/// Progress is logged every this many URLs.
pub const LOGGING_INTERVAL: usize = 100;
