//! Batch extraction over a URL list.
//!
//! `run_extraction` is the main entry point of the library: it reads URLs,
//! extracts features with bounded concurrency and writes them out in input
//! order.

mod input;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{info, warn};

use crate::config::{Config, LOGGING_INTERVAL};
use crate::error_handling::ExtractionStats;
use crate::export::{open_output, write_features};
use crate::features::{FeatureExtractor, FeatureVector};
use crate::initialization::{init_extractor_config, init_lookup, init_semaphore};

use input::read_urls;

/// Results of an extraction run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of URLs read from the input
    pub total_urls: usize,
    /// Number of feature vectors written
    pub records_written: usize,
    /// Registration lookups that produced features
    pub lookups_succeeded: usize,
    /// Registration lookups that fell back to `-1`
    pub lookups_failed: usize,
    /// URLs extracted without a lookup (`--no-whois`)
    pub lookups_skipped: usize,
    /// Output file, or `None` for stdout
    pub output: Option<PathBuf>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

fn log_progress(start_time: Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Extracted {}/{} URLs in {:.2} seconds (~{:.2} URLs/sec)",
        completed, total, elapsed_secs, rate
    );
}

/// Extracts features for every URL concurrently, returning them in input order.
///
/// At most `max_concurrency` extractions (and so WHOIS connections) are in
/// flight at once. A URL whose task panics is logged and left out.
pub async fn extract_all(
    extractor: &FeatureExtractor,
    urls: Vec<String>,
    max_concurrency: usize,
) -> Vec<FeatureVector> {
    let total = urls.len();
    let semaphore = init_semaphore(max_concurrency);
    let completed = Arc::new(AtomicUsize::new(0));
    let start_time = Instant::now();
    let mut tasks = FuturesUnordered::new();

    for (index, url) in urls.into_iter().enumerate() {
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                warn!("Semaphore closed, skipping URL: {url}");
                continue;
            }
        };

        let extractor = extractor.clone();
        let completed = Arc::clone(&completed);
        tasks.push(tokio::spawn(async move {
            let _permit = permit;
            let features = extractor.extract_features(&url).await;

            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            if done % LOGGING_INTERVAL == 0 {
                log_progress(start_time, done, total);
            }
            (index, features)
        }));
    }

    let mut slots: Vec<Option<FeatureVector>> = vec![None; total];
    while let Some(task_result) = tasks.next().await {
        match task_result {
            Ok((index, features)) => slots[index] = Some(features),
            Err(join_error) => warn!("Extraction task panicked: {join_error:?}"),
        }
    }

    log_progress(start_time, completed.load(Ordering::SeqCst), total);
    slots.into_iter().flatten().collect()
}

/// Runs feature extraction over the URLs in `config.file`.
///
/// # Errors
///
/// Returns an error if initialization fails, the input cannot be read or the
/// output cannot be written. Individual URLs never fail.
///
/// # Example
///
/// ```no_run
/// use phish_features::{run_extraction, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     file: PathBuf::from("urls.txt"),
///     enable_whois: false,
///     ..Default::default()
/// };
/// let report = run_extraction(config).await?;
/// println!("Extracted {} URLs", report.total_urls);
/// # Ok(())
/// # }
/// ```
pub async fn run_extraction(config: Config) -> Result<RunReport> {
    let start_time = Instant::now();

    let extractor_config =
        init_extractor_config(&config).context("Failed to initialize extractor configuration")?;
    let stats = Arc::new(ExtractionStats::new());
    let lookup = init_lookup(&config)
        .await
        .context("Failed to initialize WHOIS lookup")?;
    let extractor = match lookup {
        Some(lookup) => FeatureExtractor::new(extractor_config, lookup),
        None => FeatureExtractor::without_lookup(extractor_config),
    }
    .with_stats(Arc::clone(&stats));

    let urls = read_urls(&config.file).await?;
    let total_urls = urls.len();

    let features = extract_all(&extractor, urls, config.max_concurrency).await;

    let writer = open_output(config.output.as_deref())?;
    let records_written = write_features(config.format, writer, &features)
        .context("Failed to write features")?;

    stats.log_summary();

    Ok(RunReport {
        total_urls,
        records_written,
        lookups_succeeded: stats.lookups_succeeded(),
        lookups_failed: stats.total_failures(),
        lookups_skipped: stats.lookups_skipped(),
        output: config.output,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
