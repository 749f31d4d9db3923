//! Extraction statistics tracking.
//!
//! This module provides thread-safe counters for registration lookup outcomes
//! during a batch run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use strum::IntoEnumIterator;

use super::types::LookupFailureKind;

/// Thread-safe extraction statistics tracker.
///
/// Counts successful, skipped and failed registration lookups using atomic
/// counters so it can be shared across tasks through an `Arc`. Every failure
/// kind is initialized to zero on creation.
pub struct ExtractionStats {
    extracted: AtomicUsize,
    lookups_succeeded: AtomicUsize,
    lookups_skipped: AtomicUsize,
    failures: HashMap<LookupFailureKind, AtomicUsize>,
}

impl ExtractionStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in LookupFailureKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }

        ExtractionStats {
            extracted: AtomicUsize::new(0),
            lookups_succeeded: AtomicUsize::new(0),
            lookups_skipped: AtomicUsize::new(0),
            failures,
        }
    }

    /// Counts one URL whose features were extracted.
    pub fn increment_extracted(&self) {
        self.extracted.fetch_add(1, Ordering::SeqCst);
    }

    /// Counts one lookup that returned a record.
    pub fn increment_lookup_success(&self) {
        self.lookups_succeeded.fetch_add(1, Ordering::SeqCst);
    }

    /// Counts one URL extracted without a lookup.
    pub fn increment_lookup_skipped(&self) {
        self.lookups_skipped.fetch_add(1, Ordering::SeqCst);
    }

    /// Increment a failure counter.
    ///
    /// The map is populated for every `LookupFailureKind` in `new()`, so the
    /// lookup cannot miss.
    pub fn increment_failure(&self, kind: LookupFailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// URLs extracted so far.
    pub fn extracted(&self) -> usize {
        self.extracted.load(Ordering::SeqCst)
    }

    /// Lookups that returned a record.
    pub fn lookups_succeeded(&self) -> usize {
        self.lookups_succeeded.load(Ordering::SeqCst)
    }

    /// URLs extracted without a lookup.
    pub fn lookups_skipped(&self) -> usize {
        self.lookups_skipped.load(Ordering::SeqCst)
    }

    /// Failed lookups of the given kind.
    pub fn get_failure_count(&self, kind: LookupFailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Failed lookups of every kind.
    pub fn total_failures(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Logs a summary of the run, listing only failure kinds that occurred.
    pub fn log_summary(&self) {
        info!(
            "Extracted features for {} URL(s): {} WHOIS lookups succeeded, {} failed, {} skipped",
            self.extracted(),
            self.lookups_succeeded(),
            self.total_failures(),
            self.lookups_skipped()
        );
        for kind in LookupFailureKind::iter() {
            let count = self.get_failure_count(kind);
            if count > 0 {
                info!("   WHOIS {}: {}", kind.as_str(), count);
            }
        }
    }
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}
