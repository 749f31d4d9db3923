//! Registry date parsing.
//!
//! Registries print dates in many formats. Offset-bearing strings keep their
//! offset; everything else is read as naive wall-clock time.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::types::RegistryTimestamp;

/// Offset-aware formats, tried after RFC 3339.
const AWARE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S %z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y.%m.%d %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
    "%d-%b-%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%d-%b-%Y", "%d.%m.%Y", "%d/%m/%Y", "%d %b %Y", "%Y%m%d",
];

/// Trailing zone names some registries append to naive timestamps.
const ZONE_SUFFIXES: &[&str] = &[" (UTC)", " UTC", " GMT", " (GMT)"];

/// Parses a registry date string.
///
/// Offset-bearing strings become `Aware`; strings with a trailing zone name
/// are parsed as naive wall-clock time.
pub(crate) fn parse_timestamp(raw: &str) -> Option<RegistryTimestamp> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(RegistryTimestamp::Aware(dt));
    }
    for format in AWARE_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(RegistryTimestamp::Aware(dt));
        }
    }

    let s = ZONE_SUFFIXES
        .iter()
        .find_map(|zone| s.strip_suffix(zone))
        .unwrap_or(s)
        .trim();

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(RegistryTimestamp::Naive(naive));
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(RegistryTimestamp::Naive(date.and_hms_opt(0, 0, 0)?));
        }
    }

    None
}
