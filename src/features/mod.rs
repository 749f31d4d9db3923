//! Feature computation.
//!
//! `FeatureExtractor` turns one URL into a complete `FeatureVector`: lexical
//! and structural features from the decomposed URL, plus three age features
//! from a single registration lookup. Extraction never fails; a failed or
//! slow lookup only degrades the registration features to `-1`.

mod context;
mod lexical;
mod vector;

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use log::warn;

use crate::domain::decompose;
use crate::error_handling::{ExtractionStats, LookupFailure};
use crate::whois::{derive_registration_features, RegistrationFeatures, RegistrationLookup};

pub use context::ExtractorConfig;
pub use lexical::{char_len, contains_keyword, domain_entropy, is_ip_host, tally_chars, CharTally};
pub use vector::{FeatureValue, FeatureVector};

fn flag(value: bool) -> i64 {
    i64::from(value)
}

/// Computes feature vectors for URLs.
///
/// Cheap to clone; clones share configuration, lookup and statistics.
#[derive(Clone)]
pub struct FeatureExtractor {
    config: Arc<ExtractorConfig>,
    lookup: Option<Arc<dyn RegistrationLookup>>,
    stats: Arc<ExtractionStats>,
}

impl FeatureExtractor {
    /// Creates an extractor that queries `lookup` once per URL.
    pub fn new(config: Arc<ExtractorConfig>, lookup: Arc<dyn RegistrationLookup>) -> Self {
        Self {
            config,
            lookup: Some(lookup),
            stats: Arc::new(ExtractionStats::new()),
        }
    }

    /// Creates an extractor that never performs registration lookups.
    ///
    /// Registration features are always `-1`.
    pub fn without_lookup(config: Arc<ExtractorConfig>) -> Self {
        Self {
            config,
            lookup: None,
            stats: Arc::new(ExtractionStats::new()),
        }
    }

    /// Records outcomes into a shared statistics tracker.
    pub fn with_stats(mut self, stats: Arc<ExtractionStats>) -> Self {
        self.stats = stats;
        self
    }

    /// The shared extractor configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The statistics tracker outcomes are recorded into.
    pub fn stats(&self) -> &Arc<ExtractionStats> {
        &self.stats
    }

    /// Extracts all features from `url`, measuring ages against the current time.
    pub async fn extract_features(&self, url: &str) -> FeatureVector {
        self.extract_features_at(url, Utc::now().naive_utc()).await
    }

    /// Extracts all features from `url`, measuring ages against `now`.
    ///
    /// `now` is a UTC time without an offset.
    pub async fn extract_features_at(&self, url: &str, now: NaiveDateTime) -> FeatureVector {
        let mut features = self.lexical_features(url);
        let lookup_domain = format!("{}.{}", features.domain, features.suffix);

        let registration = self.registration_features(&lookup_domain, now).await;
        features.domain_age = registration.domain_age;
        features.days_to_expire = registration.days_to_expire;
        features.registration_length = registration.registration_length;

        self.stats.increment_extracted();
        features
    }

    /// Every feature that does not need the network.
    ///
    /// Registration fields are set to `-1`.
    pub fn lexical_features(&self, url: &str) -> FeatureVector {
        let config = &self.config;
        let parts = decompose(config.suffixes.as_ref(), url);
        let url_lower = url.to_lowercase();
        let tally = tally_chars(url);
        let lookup_domain = parts.lookup_domain();
        #[allow(clippy::cast_possible_wrap)]
        let count_dots = parts.hostname.matches('.').count() as i64;

        FeatureVector {
            url: url.to_string(),
            url_len: char_len(url),
            host_len: char_len(&parts.hostname),
            path_len: char_len(&parts.path),
            query_len: char_len(&parts.query),
            is_https: flag(parts.scheme == "https"),
            count_dots,
            count_hyphen: tally.hyphens,
            count_at: tally.at_signs,
            count_qm: tally.question_marks,
            count_eq: tally.equals_signs,
            count_slash: tally.slashes,
            count_digits: tally.digits,
            has_ip: flag(is_ip_host(&config.ip_pattern, &parts.hostname)),
            has_https: flag(url_lower.starts_with("https")),
            has_shortener: flag(config.shorteners.contains(&lookup_domain)),
            has_keyword: flag(contains_keyword(&config.keywords, &url_lower)),
            subdomain_len: char_len(&parts.subdomain),
            domain_entropy: domain_entropy(&parts.hostname),
            domain: parts.registrable_domain,
            suffix: parts.public_suffix,
            domain_age: RegistrationFeatures::MISSING.domain_age,
            days_to_expire: RegistrationFeatures::MISSING.days_to_expire,
            registration_length: RegistrationFeatures::MISSING.registration_length,
        }
    }

    /// Performs the single registration lookup for `domain` and derives the
    /// age features, converting any failure to sentinels.
    async fn registration_features(
        &self,
        domain: &str,
        now: NaiveDateTime,
    ) -> RegistrationFeatures {
        let Some(lookup) = &self.lookup else {
            self.stats.increment_lookup_skipped();
            return RegistrationFeatures::MISSING;
        };

        let timeout = self.config.lookup_timeout;
        let outcome = match tokio::time::timeout(timeout, lookup.lookup(domain)).await {
            Ok(result) => result,
            Err(_) => Err(LookupFailure::Timeout(timeout.as_secs())),
        };

        match outcome.and_then(|record| derive_registration_features(&record, now)) {
            Ok(features) => {
                log::debug!("Registration features for {domain}: {features:?}");
                self.stats.increment_lookup_success();
                features
            }
            Err(failure) => {
                warn!("Registration lookup failed for {domain}: {failure}");
                self.stats.increment_failure(failure.kind());
                RegistrationFeatures::MISSING
            }
        }
    }
}
