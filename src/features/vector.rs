//! The feature vector handed to the classifier.

use serde::{Deserialize, Serialize};

use crate::config::FEATURE_KEYS;

/// One feature value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Counts, lengths, flags and day differences
    Int(i64),
    /// `domain_entropy`
    Float(f64),
    /// `url`, `domain` and `suffix`
    Text(String),
}

/// Features extracted from one URL.
///
/// Field order is the classifier's column order (`FEATURE_KEYS`); serde and
/// CSV output follow it. Flags are `0` or `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// The input URL, unchanged
    pub url: String,
    /// Characters in the URL
    pub url_len: i64,
    /// Characters in the lowercased hostname
    pub host_len: i64,
    /// Characters in the path
    pub path_len: i64,
    /// Characters in the query
    pub query_len: i64,
    /// Scheme is exactly `https`
    pub is_https: i64,
    /// `.` in the URL
    pub count_dots: i64,
    /// `-` in the URL
    pub count_hyphen: i64,
    /// `@` in the URL
    pub count_at: i64,
    /// `?` in the URL
    pub count_qm: i64,
    /// `=` in the URL
    pub count_eq: i64,
    /// `/` in the URL
    pub count_slash: i64,
    /// ASCII digits in the URL
    pub count_digits: i64,
    /// Hostname is a dotted-quad IPv4 address
    pub has_ip: i64,
    /// Lowercased URL starts with `https`
    pub has_https: i64,
    /// `domain.suffix` is a known shortener
    pub has_shortener: i64,
    /// Lowercased URL contains a keyword
    pub has_keyword: i64,
    /// Characters in the subdomain
    pub subdomain_len: i64,
    /// Registrable label
    pub domain: String,
    /// Public suffix
    pub suffix: String,
    /// Shannon entropy of the hostname, in bits
    pub domain_entropy: f64,
    /// Days since registration
    pub domain_age: i64,
    /// Days until expiry
    pub days_to_expire: i64,
    /// Days between registration and expiry
    pub registration_length: i64,
}

impl FeatureVector {
    /// All features as `(key, value)` pairs in `FEATURE_KEYS` order.
    pub fn entries(&self) -> Vec<(&'static str, FeatureValue)> {
        use FeatureValue::{Float, Int, Text};

        let values = [
            Text(self.url.clone()),
            Int(self.url_len),
            Int(self.host_len),
            Int(self.path_len),
            Int(self.query_len),
            Int(self.is_https),
            Int(self.count_dots),
            Int(self.count_hyphen),
            Int(self.count_at),
            Int(self.count_qm),
            Int(self.count_eq),
            Int(self.count_slash),
            Int(self.count_digits),
            Int(self.has_ip),
            Int(self.has_https),
            Int(self.has_shortener),
            Int(self.has_keyword),
            Int(self.subdomain_len),
            Text(self.domain.clone()),
            Text(self.suffix.clone()),
            Float(self.domain_entropy),
            Int(self.domain_age),
            Int(self.days_to_expire),
            Int(self.registration_length),
        ];
        FEATURE_KEYS.into_iter().zip(values).collect()
    }

    /// Looks up one feature by key.
    pub fn get(&self, key: &str) -> Option<FeatureValue> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Feature values without the raw `url`, in training column order.
    pub fn classifier_row(&self) -> Vec<(&'static str, FeatureValue)> {
        self.entries()
            .into_iter()
            .filter(|(key, _)| *key != "url")
            .collect()
    }
}
