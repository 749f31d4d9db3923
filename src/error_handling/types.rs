//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! lookup failure categories tracked by `ExtractionStats`.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error reading a configuration file (suffix list, keyword list, ...).
    #[error("Failed to read {path}: {source}")]
    ConfigFileError {
        /// File that could not be read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A suffix list file contained no usable rules.
    #[error("Suffix list {0} contains no rules")]
    EmptySuffixListError(String),

    /// A suffix list file held a rule the parser rejected.
    #[error("Invalid suffix list {path}: {message}")]
    SuffixListParseError {
        /// File that failed to parse
        path: String,
        /// Parser error
        message: String,
    },

    /// The WHOIS client could not be set up.
    #[error("Failed to create WHOIS client: {0}")]
    WhoisClientError(String),
}

/// Why a registration lookup produced no usable data.
///
/// Every variant is converted to sentinel feature values by the extractor;
/// none of them escape `FeatureExtractor::extract_features`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// The lookup did not finish within the configured timeout.
    #[error("WHOIS lookup timed out after {0}s")]
    Timeout(u64),

    /// The registry has no record for the domain.
    #[error("No WHOIS record for {0}")]
    NoRecord(String),

    /// The WHOIS server could not be reached or the connection broke.
    #[error("WHOIS connection error: {0}")]
    Connection(String),

    /// The response could not be interpreted (no registry, empty reply, ...).
    #[error("Malformed WHOIS response: {0}")]
    MalformedResponse(String),

    /// Date data was present but could not be reduced to a single timestamp.
    #[error("Malformed registration date: {0}")]
    MalformedDate(String),
}

impl LookupFailure {
    /// Returns the statistics category for this failure.
    pub fn kind(&self) -> LookupFailureKind {
        match self {
            LookupFailure::Timeout(_) => LookupFailureKind::Timeout,
            LookupFailure::NoRecord(_) => LookupFailureKind::NoRecord,
            LookupFailure::Connection(_) => LookupFailureKind::Connection,
            LookupFailure::MalformedResponse(_) => LookupFailureKind::MalformedResponse,
            LookupFailure::MalformedDate(_) => LookupFailureKind::MalformedDate,
        }
    }
}

/// Categories of registration lookup failures, used for run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupFailureKind {
    /// See `LookupFailure::Timeout`
    Timeout,
    /// See `LookupFailure::NoRecord`
    NoRecord,
    /// See `LookupFailure::Connection`
    Connection,
    /// See `LookupFailure::MalformedResponse`
    MalformedResponse,
    /// See `LookupFailure::MalformedDate`
    MalformedDate,
}

impl LookupFailureKind {
    /// Human-readable label used in the end-of-run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupFailureKind::Timeout => "timeout",
            LookupFailureKind::NoRecord => "no record",
            LookupFailureKind::Connection => "connection error",
            LookupFailureKind::MalformedResponse => "malformed response",
            LookupFailureKind::MalformedDate => "malformed date",
        }
    }
}
