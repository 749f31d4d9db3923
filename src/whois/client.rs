//! WHOIS lookups through the `whois-service` crate.
//!
//! `whois-service` handles server discovery (RDAP first, then port-43 WHOIS)
//! and field extraction. This wrapper maps its errors and missing data to
//! `LookupFailure` and turns the parsed date strings into `RegistryDate`s.
//! There are no retries.

use async_trait::async_trait;
use log::debug;
use whois_service::WhoisClient;

use super::parse::parse_timestamp;
use super::types::{RegistrationLookup, RegistrationRecord, RegistryDate};
use crate::error_handling::{InitializationError, LookupFailure};

/// Error text that means the registry answered without a record.
const NO_RECORD_MARKERS: &[&str] = &[
    "not found",
    "no match",
    "no data",
    "no entries",
    "invalid domain",
    "unsupported tld",
];

/// Registration lookup backed by `whois_service::WhoisClient`.
pub struct WhoisLookup {
    client: WhoisClient,
}

impl WhoisLookup {
    /// Creates the underlying `whois-service` client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::WhoisClientError` if the client cannot be
    /// set up.
    pub async fn new() -> Result<Self, InitializationError> {
        let client = WhoisClient::new()
            .await
            .map_err(|e| InitializationError::WhoisClientError(e.to_string()))?;
        Ok(Self { client })
    }
}

/// Lookup domains with an empty label or TLD (IP hosts, unknown suffixes).
fn is_degenerate(domain: &str) -> bool {
    match domain.rsplit_once('.') {
        Some((label, tld)) => label.is_empty() || tld.is_empty(),
        None => true,
    }
}

/// Classifies a `whois-service` error message.
fn failure_from_error(domain: &str, message: &str) -> LookupFailure {
    let lower = message.to_lowercase();
    if NO_RECORD_MARKERS.iter().any(|marker| lower.contains(marker)) {
        LookupFailure::NoRecord(domain.to_string())
    } else {
        LookupFailure::Connection(format!("{domain}: {message}"))
    }
}

/// Parses one date string; unparseable values become `Null`.
fn registry_date(raw: Option<&str>) -> RegistryDate {
    raw.and_then(parse_timestamp)
        .map_or(RegistryDate::Null, RegistryDate::Timestamp)
}

/// Builds a record from the parsed creation and expiration strings.
fn record_from_dates(creation: Option<&str>, expiration: Option<&str>) -> RegistrationRecord {
    RegistrationRecord {
        creation_date: registry_date(creation),
        expiration_date: registry_date(expiration),
    }
}

#[async_trait]
impl RegistrationLookup for WhoisLookup {
    async fn lookup(&self, domain: &str) -> Result<RegistrationRecord, LookupFailure> {
        let domain = domain.to_lowercase();
        if is_degenerate(&domain) {
            return Err(LookupFailure::NoRecord(domain));
        }

        debug!("Starting WHOIS lookup for {domain}");
        let response = self
            .client
            .lookup(&domain)
            .await
            .map_err(|e| failure_from_error(&domain, &e.to_string()))?;

        match &response.parsed_data {
            Some(parsed) => Ok(record_from_dates(
                parsed.creation_date.as_deref(),
                parsed.expiration_date.as_deref(),
            )),
            None if response.raw_data.trim().is_empty() => Err(LookupFailure::MalformedResponse(
                format!("empty response for {domain}"),
            )),
            None => Err(LookupFailure::MalformedResponse(format!(
                "no parsed data for {domain}"
            ))),
        }
    }
}
