//! Batch processing: match a slice of new URLs against the old-URL corpus,
//! partition into matched/unmatched, and write per-batch CSV outputs.
//!
//! Batches are contiguous fixed-size slices of the new-URL sequence (the last
//! may be shorter) and are 1-indexed in diagnostics and file names.

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::path::Path;

use crate::matching::find_best_match;
use crate::models::{BatchOutcome, MatchResult};
use crate::normalize::ensure_leading_slash;
use crate::progress::emit;

pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Number of batches needed for `total` URLs: ceiling division, so an exact
/// multiple of `batch_size` produces no empty trailing batch.
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    total.div_ceil(batch_size)
}

/// Process one batch of new URLs against the full candidate corpus.
///
/// Every new URL is leading-slash-corrected before matching and output; a
/// matched old URL is slash-corrected too, original casing preserved on both
/// sides. Writes `matched_urls_batch_<N>.csv` and `unmatched_urls_batch_<N>.csv`
/// into `output_dir` (created if missing), skipping whichever list is empty.
/// Returns the per-batch counts for aggregation.
pub fn process_batch(
    batch: &[String],
    old_urls: &[String],
    batch_number: usize,
    output_dir: &Path,
    pb: &ProgressBar,
) -> Result<BatchOutcome> {
    let mut matched: Vec<MatchResult> = Vec::new();
    let mut unmatched: Vec<String> = Vec::new();

    for (i, new_url) in batch.iter().enumerate() {
        let new_url = ensure_leading_slash(new_url);

        match find_best_match(&new_url, old_urls) {
            Some((old_url, score)) => {
                let old_url = ensure_leading_slash(old_url);
                emit(
                    pb,
                    format!(
                        "Batch {}: URL {}/{}: {} -> {} (score: {:.2})",
                        batch_number,
                        i + 1,
                        batch.len(),
                        new_url,
                        old_url,
                        score
                    ),
                );
                matched.push(MatchResult {
                    to_url: new_url,
                    from_url: old_url,
                    score,
                });
            }
            None => {
                emit(
                    pb,
                    format!(
                        "Batch {}: URL {}/{}: {} -> NO MATCH",
                        batch_number,
                        i + 1,
                        batch.len(),
                        new_url
                    ),
                );
                unmatched.push(new_url);
            }
        }
        pb.inc(1);
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    if !matched.is_empty() {
        let path = output_dir.join(format!("matched_urls_batch_{batch_number}.csv"));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        writer.write_record(["cToUrl", "cFromUrl"])?;
        for result in &matched {
            writer.write_record([&result.to_url, &result.from_url])?;
        }
        writer.flush()?;
    }

    if !unmatched.is_empty() {
        let path = output_dir.join(format!("unmatched_urls_batch_{batch_number}.csv"));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        writer.write_record(["cToUrl"])?;
        for url in &unmatched {
            writer.write_record([url])?;
        }
        writer.flush()?;
    }

    Ok(BatchOutcome {
        matched: matched.len(),
        unmatched: unmatched.len(),
    })
}
