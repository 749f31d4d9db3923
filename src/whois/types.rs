//! Registration data structures.
//!
//! Registries disagree on how they report dates: a single timestamp, nothing,
//! or several candidate values (historical records, duplicated keys). These
//! types keep that shape until `normalize_date` reduces it to one value.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error_handling::LookupFailure;

/// A timestamp as reported by a registry, with or without an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryTimestamp {
    /// No offset given
    Naive(NaiveDateTime),
    /// With the offset the registry printed
    Aware(DateTime<FixedOffset>),
}

impl RegistryTimestamp {
    /// Drops the offset, keeping the wall-clock time as reported.
    pub fn to_naive(&self) -> NaiveDateTime {
        match self {
            RegistryTimestamp::Naive(naive) => *naive,
            RegistryTimestamp::Aware(aware) => aware.naive_local(),
        }
    }
}

/// One date field of a registry response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RegistryDate {
    /// Field absent or unparseable
    #[default]
    Null,
    /// A single value
    Timestamp(RegistryTimestamp),
    /// Several candidate values, possibly nested one level
    List(Vec<RegistryDate>),
}

impl RegistryDate {
    /// Builds a date field from candidate values in response order.
    ///
    /// No candidates is `Null`, one candidate is that value, more become a list.
    pub fn from_candidates(mut candidates: Vec<RegistryDate>) -> Self {
        match candidates.len() {
            0 => RegistryDate::Null,
            1 => candidates.remove(0),
            _ => RegistryDate::List(candidates),
        }
    }
}

/// Creation and expiration dates returned by a registration lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistrationRecord {
    /// When the domain was registered
    pub creation_date: RegistryDate,
    /// When the registration runs out
    pub expiration_date: RegistryDate,
}

/// Source of domain registration data.
///
/// One call per extraction. Implementations report every problem as a
/// `LookupFailure` instead of panicking; the caller turns failures into
/// sentinel features.
#[async_trait]
pub trait RegistrationLookup: Send + Sync {
    /// Looks up the registration dates of `domain` (`example.com`, not a URL).
    async fn lookup(&self, domain: &str) -> Result<RegistrationRecord, LookupFailure>;
}

/// Reduces a registry date field to a single timezone-naive timestamp.
///
/// Lists are flattened one level, nulls dropped, and the **first** remaining
/// value is taken (not the earliest or latest). A value that is still a list
/// after one level of flattening is malformed.
pub fn normalize_date(value: &RegistryDate) -> Result<Option<NaiveDateTime>, LookupFailure> {
    let items = match value {
        RegistryDate::Null => return Ok(None),
        RegistryDate::Timestamp(ts) => return Ok(Some(ts.to_naive())),
        RegistryDate::List(items) => items,
    };

    let mut flat: Vec<&RegistryDate> = Vec::with_capacity(items.len());
    for item in items {
        match item {
            RegistryDate::List(inner) => flat.extend(inner.iter()),
            other => flat.push(other),
        }
    }

    match flat.into_iter().find(|v| !matches!(v, RegistryDate::Null)) {
        None => Ok(None),
        Some(RegistryDate::Timestamp(ts)) => Ok(Some(ts.to_naive())),
        Some(_) => Err(LookupFailure::MalformedDate(
            "date list nested more than one level".to_string(),
        )),
    }
}
