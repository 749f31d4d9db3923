//! JSONL export functionality.
//!
//! Each line is one JSON object with the keys of `FEATURE_KEYS` in order.
//! This format is ideal for piping to `jq` or loading into a dataframe.

use anyhow::{Context, Result};
use std::io::Write;

use crate::features::FeatureVector;

/// Writes feature vectors as JSON Lines.
///
/// Returns the number of records written.
pub fn write_jsonl<W: Write>(mut writer: W, features: &[FeatureVector]) -> Result<usize> {
    for vector in features {
        serde_json::to_writer(&mut writer, vector)
            .with_context(|| format!("Failed to serialize features for {}", vector.url))?;
        writer
            .write_all(b"\n")
            .context("Failed to write JSONL record")?;
    }
    writer.flush().context("Failed to flush JSONL output")?;
    Ok(features.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FEATURE_KEYS;
    use crate::export::tests::sample_features;

    #[test]
    fn test_write_jsonl_one_line_per_record() {
        let features = sample_features(&["https://example.com", "http://bit.ly/x"]);
        let mut out = Vec::new();
        let count = write_jsonl(&mut out, &features).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(text.ends_with('\n'));

        let parsed: FeatureVector = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.url, features[1].url);
        assert_eq!(parsed.has_shortener, 1);
        assert!((parsed.domain_entropy - features[1].domain_entropy).abs() < 1e-12);
    }

    #[test]
    fn test_write_jsonl_keys_in_order() {
        let features = sample_features(&["https://example.com"]);
        let mut out = Vec::new();
        write_jsonl(&mut out, &features).unwrap();
        let line = String::from_utf8(out).unwrap();

        let positions: Vec<usize> = FEATURE_KEYS
            .iter()
            .map(|key| line.find(&format!("\"{key}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_write_jsonl_empty() {
        let mut out = Vec::new();
        assert_eq!(write_jsonl(&mut out, &[]).unwrap(), 0);
        assert!(out.is_empty());
    }
}
