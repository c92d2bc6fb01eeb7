//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - HTML parsing and link extraction
//! - The FIFO frontier and visited set
//! - Overall crawl coordination

mod engine;
mod fetcher;
mod frontier;
mod parser;

pub use engine::{crawl, CrawlReport, Crawler};
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use frontier::{Admission, Frontier, PopResult};
pub use parser::{extract_page, ExtractionResult};
