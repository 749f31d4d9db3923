//! Error handling and extraction statistics.
//!
//! This module provides:
//! - Error type definitions (initialization errors, lookup failures)
//! - Extraction statistics tracking (lookup outcomes per failure kind)

mod stats;
mod types;

// Re-export public API
pub use stats::ExtractionStats;
pub use types::{InitializationError, LookupFailure, LookupFailureKind};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_extraction_stats_initialization() {
        let stats = ExtractionStats::new();
        for kind in LookupFailureKind::iter() {
            assert_eq!(stats.get_failure_count(kind), 0);
        }
        assert_eq!(stats.extracted(), 0);
        assert_eq!(stats.total_failures(), 0);
    }

    #[test]
    fn test_extraction_stats_increment() {
        let stats = ExtractionStats::new();
        stats.increment_extracted();
        stats.increment_lookup_success();
        stats.increment_failure(LookupFailureKind::Timeout);
        stats.increment_failure(LookupFailureKind::Timeout);
        stats.increment_failure(LookupFailureKind::NoRecord);

        assert_eq!(stats.extracted(), 1);
        assert_eq!(stats.lookups_succeeded(), 1);
        assert_eq!(stats.get_failure_count(LookupFailureKind::Timeout), 2);
        assert_eq!(stats.get_failure_count(LookupFailureKind::NoRecord), 1);
        assert_eq!(stats.total_failures(), 3);
    }

    #[test]
    fn test_lookup_failure_kind_mapping() {
        assert_eq!(
            LookupFailure::Timeout(5).kind(),
            LookupFailureKind::Timeout
        );
        assert_eq!(
            LookupFailure::NoRecord("x.test".into()).kind(),
            LookupFailureKind::NoRecord
        );
        assert_eq!(
            LookupFailure::MalformedDate("nested list".into()).kind(),
            LookupFailureKind::MalformedDate
        );
    }

    #[test]
    fn test_lookup_failure_display() {
        assert_eq!(
            LookupFailure::Timeout(5).to_string(),
            "WHOIS lookup timed out after 5s"
        );
    }
}
