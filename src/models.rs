//! Core data models for the redirect mapping run.

use serde::Serialize;

/// Accepted redirect candidate: a new URL paired with its best old URL.
/// Both sides are leading-slash-corrected with original casing preserved.
/// The score is diagnostic only and never written to output files.
#[derive(Clone, Debug)]
pub struct MatchResult {
    pub to_url: String,
    pub from_url: String,
    pub score: f64,
}

/// Counts returned by one batch, aggregated by the orchestrator.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchOutcome {
    pub matched: usize,
    pub unmatched: usize,
}

/// Whole-run statistics for the final summary and optional JSON dump.
#[derive(Default, Debug, Clone, Serialize)]
pub struct RunStats {
    pub total_urls: usize,
    pub total_matched: usize,
    pub total_unmatched: usize,
    pub batches: usize,
    pub elapsed_seconds: f64,
}

impl RunStats {
    /// Record one batch's counts.
    pub fn record(&mut self, outcome: BatchOutcome) {
        self.total_matched += outcome.matched;
        self.total_unmatched += outcome.unmatched;
    }

    /// Match rate as a percentage.
    pub fn match_rate(&self) -> f64 {
        if self.total_urls == 0 {
            0.0
        } else {
            100.0 * self.total_matched as f64 / self.total_urls as f64
        }
    }

    /// Write stats to a JSON file.
    pub fn write_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
