//! phish_features library: URL feature extraction for phishing classifiers
//!
//! This library turns URL strings into fixed, ordered feature vectors:
//! lexical counts, structural properties, a public-suffix-aware domain split
//! and three domain age features from a WHOIS lookup. Extraction never fails;
//! a missing or failed lookup yields `-1` for the age features.
//!
//! # Example
//!
//! ```no_run
//! use phish_features::{ExtractorConfig, FeatureExtractor, WhoisLookup};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = FeatureExtractor::new(
//!     Arc::new(ExtractorConfig::default()),
//!     Arc::new(WhoisLookup::new().await?),
//! );
//!
//! let features = extractor.extract_features("https://secure-login.example.com/verify").await;
//! println!("{} has_keyword={} domain_age={}", features.url, features.has_keyword, features.domain_age);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Extraction is async and requires a Tokio runtime (the lookup timeout uses
//! `tokio::time`). `FeatureExtractor::lexical_features` is synchronous.

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod features;
pub mod initialization;
mod run;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat, FEATURE_KEYS};
pub use domain::{decompose, DecomposedUrl, PublicSuffixList, RuleSuffixList, SuffixList};
pub use error_handling::{ExtractionStats, LookupFailure};
pub use features::{ExtractorConfig, FeatureExtractor, FeatureValue, FeatureVector};
pub use run::{extract_all, run_extraction, RunReport};
pub use whois::{CachedLookup, RegistrationLookup, RegistrationRecord, WhoisLookup};
