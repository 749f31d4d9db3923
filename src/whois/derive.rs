//! Age-based features derived from registration dates.

use chrono::{NaiveDateTime, TimeDelta};

use super::types::{normalize_date, RegistrationRecord};
use crate::config::MISSING_REGISTRATION_VALUE;
use crate::error_handling::LookupFailure;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// The three registration-derived features, in days.
///
/// Each field is `-1` when the dates it needs are unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationFeatures {
    /// Days from creation to now
    pub domain_age: i64,
    /// Days from now to expiration
    pub days_to_expire: i64,
    /// Days from creation to expiration
    pub registration_length: i64,
}

impl RegistrationFeatures {
    /// All three features set to the sentinel.
    pub const MISSING: RegistrationFeatures = RegistrationFeatures {
        domain_age: MISSING_REGISTRATION_VALUE,
        days_to_expire: MISSING_REGISTRATION_VALUE,
        registration_length: MISSING_REGISTRATION_VALUE,
    };
}

/// Whole days in `delta`, rounded toward negative infinity.
fn floor_days(delta: TimeDelta) -> i64 {
    delta.num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Derives registration features from a lookup result.
///
/// `now` is the current UTC time without an offset; registry timestamps are
/// made naive the same way before subtracting.
///
/// # Errors
///
/// Returns `LookupFailure::MalformedDate` if either date field cannot be
/// normalized. The caller then discards both dates.
pub fn derive_registration_features(
    record: &RegistrationRecord,
    now: NaiveDateTime,
) -> Result<RegistrationFeatures, LookupFailure> {
    let creation = normalize_date(&record.creation_date)?;
    let expiration = normalize_date(&record.expiration_date)?;

    let domain_age = creation
        .map(|c| floor_days(now - c))
        .unwrap_or(MISSING_REGISTRATION_VALUE);
    let days_to_expire = expiration
        .map(|e| floor_days(e - now))
        .unwrap_or(MISSING_REGISTRATION_VALUE);
    let registration_length = match (creation, expiration) {
        (Some(c), Some(e)) => floor_days(e - c),
        _ => MISSING_REGISTRATION_VALUE,
    };

    Ok(RegistrationFeatures {
        domain_age,
        days_to_expire,
        registration_length,
    })
}
