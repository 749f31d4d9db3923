//! Domain registration lookups.
//!
//! This module provides:
//! - `RegistrationLookup`, the seam for registry queries, and its result types
//! - `WhoisLookup`, backed by the `whois-service` crate
//! - `CachedLookup`, an opt-in disk cache around any lookup
//! - Date normalization and the derived age features (`domain_age`,
//!   `days_to_expire`, `registration_length`)

mod cache;
mod client;
mod derive;
mod parse;
mod types;

pub use cache::CachedLookup;
pub use client::WhoisLookup;
pub use derive::{derive_registration_features, RegistrationFeatures};
pub use types::{
    normalize_date, RegistrationLookup, RegistrationRecord, RegistryDate, RegistryTimestamp,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::LookupFailure;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn ts(y: i32, m: u32, d: u32) -> RegistryDate {
        RegistryDate::Timestamp(RegistryTimestamp::Naive(at(y, m, d)))
    }

    #[test]
    fn test_normalize_null_and_single() {
        assert_eq!(normalize_date(&RegistryDate::Null).unwrap(), None);
        assert_eq!(normalize_date(&ts(2020, 1, 1)).unwrap(), Some(at(2020, 1, 1)));
    }

    #[test]
    fn test_normalize_list_takes_first_not_earliest() {
        let value = RegistryDate::List(vec![ts(2021, 6, 1), ts(1999, 1, 1)]);
        assert_eq!(normalize_date(&value).unwrap(), Some(at(2021, 6, 1)));
    }

    #[test]
    fn test_normalize_list_drops_nulls_and_flattens_one_level() {
        let value = RegistryDate::List(vec![
            RegistryDate::Null,
            RegistryDate::List(vec![RegistryDate::Null, ts(2010, 5, 5)]),
            ts(2000, 1, 1),
        ]);
        assert_eq!(normalize_date(&value).unwrap(), Some(at(2010, 5, 5)));
    }

    #[test]
    fn test_normalize_all_null_list() {
        let value = RegistryDate::List(vec![RegistryDate::Null, RegistryDate::List(vec![])]);
        assert_eq!(normalize_date(&value).unwrap(), None);
    }

    #[test]
    fn test_normalize_doubly_nested_list_is_malformed() {
        let value = RegistryDate::List(vec![RegistryDate::List(vec![RegistryDate::List(vec![
            ts(2010, 5, 5),
        ])])]);
        assert!(matches!(
            normalize_date(&value),
            Err(LookupFailure::MalformedDate(_))
        ));
    }

    #[test]
    fn test_normalize_aware_drops_offset() {
        let aware = chrono::DateTime::parse_from_rfc3339("2020-01-01T23:00:00-05:00").unwrap();
        let value = RegistryDate::Timestamp(RegistryTimestamp::Aware(aware));
        let naive = normalize_date(&value).unwrap().unwrap();
        assert_eq!(naive, at(2020, 1, 1) + chrono::TimeDelta::hours(23));
    }

    #[test]
    fn test_derive_all_fields() {
        let record = RegistrationRecord {
            creation_date: ts(2020, 1, 1),
            expiration_date: ts(2026, 1, 1),
        };
        let features = derive_registration_features(&record, at(2024, 1, 1)).unwrap();
        assert_eq!(features.domain_age, 1461);
        assert_eq!(features.days_to_expire, 731);
        assert_eq!(features.registration_length, 2192);
    }

    #[test]
    fn test_derive_missing_fields_are_independent() {
        let record = RegistrationRecord {
            creation_date: ts(2020, 1, 1),
            expiration_date: RegistryDate::Null,
        };
        let features = derive_registration_features(&record, at(2020, 1, 11)).unwrap();
        assert_eq!(features.domain_age, 10);
        assert_eq!(features.days_to_expire, -1);
        assert_eq!(features.registration_length, -1);

        let record = RegistrationRecord {
            creation_date: RegistryDate::Null,
            expiration_date: ts(2020, 1, 11),
        };
        let features = derive_registration_features(&record, at(2020, 1, 1)).unwrap();
        assert_eq!(features.domain_age, -1);
        assert_eq!(features.days_to_expire, 10);
        assert_eq!(features.registration_length, -1);
    }

    #[test]
    fn test_derive_floors_partial_days() {
        let record = RegistrationRecord {
            creation_date: RegistryDate::Null,
            // Expired twelve hours ago
            expiration_date: ts(2024, 1, 1),
        };
        let now = at(2024, 1, 1) + chrono::TimeDelta::hours(12);
        let features = derive_registration_features(&record, now).unwrap();
        assert_eq!(features.days_to_expire, -1);

        let record = RegistrationRecord {
            creation_date: ts(2024, 1, 1),
            expiration_date: RegistryDate::Null,
        };
        let features = derive_registration_features(&record, now).unwrap();
        assert_eq!(features.domain_age, 0);
    }

    #[test]
    fn test_derive_malformed_date_fails_whole_record() {
        let record = RegistrationRecord {
            creation_date: ts(2020, 1, 1),
            expiration_date: RegistryDate::List(vec![RegistryDate::List(vec![
                RegistryDate::List(vec![ts(2030, 1, 1)]),
            ])]),
        };
        assert!(derive_registration_features(&record, at(2024, 1, 1)).is_err());
    }
}
