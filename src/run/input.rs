//! URL input.
//!
//! Reads the URL list from a file or stdin (`-`). Lines are trimmed; blank
//! lines and `#` comments are skipped.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Collects URLs from `reader`, one per line.
///
/// Stops at the first read error.
pub(crate) async fn read_url_lines<R: AsyncBufRead + Unpin>(reader: R) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    let mut lines = reader.lines();
    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("Failed to read line {} of input", urls.len() + 1))?
    {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        urls.push(trimmed.to_string());
    }
    Ok(urls)
}

/// Reads all URLs from `path`, or from stdin when `path` is `-`.
pub(crate) async fn read_urls(path: &Path) -> Result<Vec<String>> {
    let urls = if path.as_os_str() == "-" {
        info!("Reading URLs from stdin");
        read_url_lines(BufReader::new(tokio::io::stdin())).await?
    } else {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;
        read_url_lines(BufReader::new(file))
            .await
            .with_context(|| format!("Failed to read input file: {}", path.display()))?
    };
    info!("Total URLs in input: {}", urls.len());
    Ok(urls)
}
