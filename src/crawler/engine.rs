//! Crawl engine - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates:
//! - Popping URLs from the frontier (marking them visited)
//! - Fetching and extracting pages, up to `max_concurrent` at a time
//! - Recording pages and admitting their links under the page budget
//! - Periodic and final persistence of the records
//!
//! Results of a batch are applied strictly in pop order, so with
//! `max_concurrent = 1` the crawl is the plain sequential breadth-first loop.

use crate::config::{Config, CrawlerConfig};
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::frontier::{Admission, Frontier, PopResult};
use crate::crawler::parser::{extract_page, ExtractionResult};
use crate::output::{CrawlStatistics, JsonFileSink, PageRecord, ResultSink};
use crate::state::{CrawlState, PageOutcome};
use crate::CrawlError;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;

/// Everything a finished crawl produced
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Page records in the order they were accepted
    pub records: Vec<PageRecord>,

    /// Every URL popped for processing
    pub visited: HashSet<String>,

    /// Counters collected during the run
    pub statistics: CrawlStatistics,
}

/// Main crawl engine
///
/// Owns the frontier, visited set and accumulated records for a single run.
/// A new `Crawler` is built for every crawl.
pub struct Crawler<F, S> {
    fetcher: F,
    sink: S,
    frontier: Frontier,
    records: Vec<PageRecord>,
    state: CrawlState,
    stats: CrawlStatistics,
    max_concurrent: usize,
    save_interval: usize,
}

impl<F, S> Crawler<F, S>
where
    F: PageFetcher,
    S: ResultSink,
{
    /// Creates a new crawler
    ///
    /// # Arguments
    ///
    /// * `seeds` - Starting URLs, crawled in this order
    /// * `config` - Page budget, concurrency and save interval
    /// * `fetcher` - Source of page HTML
    /// * `sink` - Destination for the records
    pub fn new<I>(seeds: I, config: &CrawlerConfig, fetcher: F, sink: S) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            fetcher,
            sink,
            frontier: Frontier::new(seeds, config.max_pages),
            records: Vec::new(),
            state: CrawlState::Running,
            stats: CrawlStatistics::new(),
            max_concurrent: config.max_concurrent.max(1),
            save_interval: config.save_interval.max(1),
        }
    }

    /// Current crawl state
    pub fn state(&self) -> CrawlState {
        self.state
    }

    /// Records accepted so far
    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// The frontier and visited set
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Runs the crawl to completion
    ///
    /// The loop ends when the frontier is empty or the page budget is spent.
    /// Fetch and extraction failures never stop it. A failed periodic save is
    /// logged and the crawl continues; a failed final save is returned.
    pub async fn run(mut self) -> Result<CrawlReport, CrawlError> {
        tracing::info!(
            "Starting crawl from {} seed URLs (budget: {} pages, {} concurrent)",
            self.frontier.len(),
            self.frontier.max_pages(),
            self.max_concurrent
        );

        while !self.state.is_terminal() {
            let batch = self.next_batch();
            if batch.is_empty() {
                self.transition(CrawlState::Done);
                break;
            }

            let fetcher = &self.fetcher;
            let pages: Vec<(String, Option<ExtractionResult>)> = stream::iter(batch)
                .map(|url| async move {
                    let page = fetcher
                        .fetch(&url)
                        .await
                        .map(|html| extract_page(&url, &html));
                    (url, page)
                })
                .buffered(self.max_concurrent)
                .collect()
                .await;

            for (url, page) in pages {
                self.apply(url, page);
            }
        }

        self.stats.finish(self.frontier.len());

        // Final save happens even if the last periodic save covered everything
        self.sink.persist(&self.records)?;
        self.stats.saves += 1;

        tracing::info!(
            "Crawl complete! {} pages saved ({} attempted, {} left in frontier)",
            self.records.len(),
            self.stats.pages_attempted,
            self.stats.frontier_remaining
        );

        Ok(CrawlReport {
            records: self.records,
            visited: self.frontier.into_visited(),
            statistics: self.stats,
        })
    }

    /// Pops up to `max_concurrent` fresh URLs
    ///
    /// Every URL is marked visited as it is popped, so no two entries in a
    /// batch, or in any later batch, share a URL.
    fn next_batch(&mut self) -> Vec<String> {
        let mut batch = Vec::with_capacity(self.max_concurrent);

        while batch.len() < self.max_concurrent {
            match self.frontier.pop_next() {
                PopResult::Fresh(url) => {
                    tracing::debug!("Processing URL: {}", url);
                    batch.push(url);
                }
                PopResult::Duplicate(url) => {
                    tracing::trace!("Skipping already visited URL: {}", url);
                    self.stats.record_outcome(PageOutcome::Duplicate);
                }
                PopResult::Exhausted => break,
            }
        }

        batch
    }

    /// Applies the result of one fetch: record, enqueue links, maybe save
    fn apply(&mut self, url: String, page: Option<ExtractionResult>) {
        let Some(page) = page else {
            tracing::debug!("No page retrieved for {}", url);
            self.stats.record_outcome(PageOutcome::FetchFailed);
            return;
        };

        self.records.push(PageRecord::new(url, page.title, page.description));
        self.stats.record_outcome(PageOutcome::Recorded);
        self.stats.links_discovered += page.links.len() as u64;

        for (index, link) in page.links.iter().enumerate() {
            match self.frontier.admit(link) {
                Admission::Enqueued => self.stats.links_enqueued += 1,
                Admission::AlreadyVisited => {}
                Admission::BudgetReached => {
                    let dropped = page.links.len() - index;
                    tracing::trace!(
                        "Frontier at budget, dropping {} links from {}",
                        dropped,
                        page.url
                    );
                    self.stats.links_dropped += dropped as u64;
                    break;
                }
            }
        }

        if self.records.len() % self.save_interval == 0 {
            tracing::info!("{} pages collected so far...", self.records.len());
            match self.sink.persist(&self.records) {
                Ok(()) => self.stats.saves += 1,
                Err(e) => tracing::warn!("Periodic save failed: {}", e),
            }
        }
    }

    fn transition(&mut self, to: CrawlState) {
        if self.state.can_transition_to(to) {
            tracing::debug!("Crawl state: {} -> {}", self.state, to);
            self.state = to;
        }
    }
}

/// Runs the main crawl operation against the network
///
/// Builds an HTTP fetcher and a JSON file sink from `config`, then runs a
/// fresh [`Crawler`] over the configured seeds.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed and the results document was written
/// * `Err(CrawlError)` - The HTTP client could not be built or the final save failed
///
/// # Example
///
/// ```no_run
/// use web_sweep::config::Config;
/// use web_sweep::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = crawl(Config::default()).await?;
/// println!("{} pages", report.records.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: Config) -> Result<CrawlReport, CrawlError> {
    let fetcher = HttpFetcher::new(&config)?;
    let sink = JsonFileSink::new(&config.output.results_path);
    let crawler = Crawler::new(config.seeds, &config.crawler, fetcher, sink);
    crawler.run().await
}
