//! Crawl statistics
//!
//! Counters collected by the engine while it runs, reported when the crawl
//! finishes.

use crate::state::PageOutcome;
use chrono::{DateTime, Utc};

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// When the crawl started
    pub started_at: DateTime<Utc>,

    /// When the crawl reached `Done`
    pub finished_at: Option<DateTime<Utc>>,

    /// URLs popped, marked visited and handed to the fetcher
    pub pages_attempted: u64,

    /// Attempts that produced a page record
    pub pages_recorded: u64,

    /// Attempts where the fetcher returned nothing
    pub fetch_failures: u64,

    /// Pops discarded because the URL was already visited
    pub duplicates_skipped: u64,

    /// Links extracted across all recorded pages
    pub links_discovered: u64,

    /// Links pushed onto the frontier
    pub links_enqueued: u64,

    /// Links dropped because the frontier was at the page budget
    pub links_dropped: u64,

    /// Successful persistence events, periodic and final
    pub saves: u64,

    /// URLs still waiting in the frontier when the crawl stopped
    pub frontier_remaining: u64,
}

impl Default for CrawlStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl CrawlStatistics {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_attempted: 0,
            pages_recorded: 0,
            fetch_failures: 0,
            duplicates_skipped: 0,
            links_discovered: 0,
            links_enqueued: 0,
            links_dropped: 0,
            saves: 0,
            frontier_remaining: 0,
        }
    }

    /// Counts one processed URL
    pub fn record_outcome(&mut self, outcome: PageOutcome) {
        if !outcome.is_attempt() {
            self.duplicates_skipped += 1;
            return;
        }

        self.pages_attempted += 1;
        if outcome.is_success() {
            self.pages_recorded += 1;
        } else {
            self.fetch_failures += 1;
        }
    }

    /// Stamps the finish time
    pub fn finish(&mut self, frontier_remaining: usize) {
        self.finished_at = Some(Utc::now());
        self.frontier_remaining = frontier_remaining as u64;
    }

    /// Wall-clock duration, once finished
    pub fn duration_seconds(&self) -> Option<f64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds() as f64 / 1000.0)
    }

    /// Percentage of attempted pages that produced a record
    pub fn success_rate(&self) -> f64 {
        if self.pages_attempted == 0 {
            0.0
        } else {
            (self.pages_recorded as f64 / self.pages_attempted as f64) * 100.0
        }
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Run:");
    println!("  Started: {}", stats.started_at.to_rfc3339());
    if let Some(finished) = stats.finished_at {
        println!("  Finished: {}", finished.to_rfc3339());
    }
    if let Some(duration) = stats.duration_seconds() {
        println!("  Duration: {:.1}s", duration);
    }
    println!();

    println!("Pages:");
    println!("  Attempted: {}", stats.pages_attempted);
    println!("  Recorded: {}", stats.pages_recorded);
    println!("  Fetch failures: {}", stats.fetch_failures);
    println!("  Duplicates skipped: {}", stats.duplicates_skipped);
    println!();

    println!("Links:");
    println!("  Discovered: {}", stats.links_discovered);
    println!("  Enqueued: {}", stats.links_enqueued);
    println!("  Dropped at budget: {}", stats.links_dropped);
    println!("  Left in frontier: {}", stats.frontier_remaining);
    println!();

    println!(
        "Success Rate: {:.1}% ({} / {} pages recorded)",
        stats.success_rate(),
        stats.pages_recorded,
        stats.pages_attempted
    );
}
