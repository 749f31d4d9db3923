//! CSV export functionality.
//!
//! One row per URL, columns in `FEATURE_KEYS` order. The header row is
//! always written, even when there are no records.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::io::Write;

use crate::config::FEATURE_KEYS;
use crate::features::FeatureVector;

/// Writes feature vectors as CSV with a `FEATURE_KEYS` header.
///
/// Returns the number of records written.
pub fn write_csv<W: Write>(writer: W, features: &[FeatureVector]) -> Result<usize> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer
        .write_record(FEATURE_KEYS)
        .context("Failed to write CSV header")?;
    for vector in features {
        writer
            .serialize(vector)
            .with_context(|| format!("Failed to write CSV row for {}", vector.url))?;
    }
    writer.flush().context("Failed to flush CSV output")?;

    Ok(features.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_features;

    #[test]
    fn test_write_csv_header_and_rows() {
        let features = sample_features(&["https://www.example.com/login", "http://10.0.0.1/"]);
        let mut out = Vec::new();
        assert_eq!(write_csv(&mut out, &features).unwrap(), 2);

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(headers, FEATURE_KEYS);

        let rows: Vec<FeatureVector> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, features);
    }

    #[test]
    fn test_write_csv_quotes_commas_in_url() {
        let features = sample_features(&["http://example.com/a,b"]);
        let mut out = Vec::new();
        write_csv(&mut out, &features).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"http://example.com/a,b\""));
    }

    #[test]
    fn test_write_csv_empty_still_has_header() {
        let mut out = Vec::new();
        assert_eq!(write_csv(&mut out, &[]).unwrap(), 0);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim_end(), FEATURE_KEYS.join(","));
    }
}
