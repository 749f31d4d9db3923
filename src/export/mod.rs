//! Export functionality for feature vectors.
//!
//! This module writes extracted features as JSONL or CSV, to a file or to
//! stdout. Both formats keep the `FEATURE_KEYS` column order.

mod csv;
mod jsonl;
mod pipe;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::OutputFormat;
use crate::features::FeatureVector;

pub use csv::write_csv;
pub use jsonl::write_jsonl;
pub use pipe::IgnoreBrokenPipe;

/// Opens the output destination: the given file, or stdout if `None`.
///
/// Stdout tolerates a closed pipe.
pub fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(IgnoreBrokenPipe::new(io::stdout().lock()))),
    }
}

/// Writes `features` in the requested format. Returns the number of records.
pub fn write_features<W: Write>(
    format: OutputFormat,
    writer: W,
    features: &[FeatureVector],
) -> Result<usize> {
    match format {
        OutputFormat::Jsonl => write_jsonl(writer, features),
        OutputFormat::Csv => write_csv(writer, features),
    }
}
