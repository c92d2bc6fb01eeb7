//! Output module for persisting crawl results
//!
//! This module handles:
//! - The page record type written to disk
//! - Result sinks (JSON file, in-memory)
//! - Crawl statistics and their report

mod json;
mod memory;
pub mod stats;
mod traits;

pub use json::{read_records_json, write_records_json, JsonFileSink};
pub use memory::MemorySink;
pub use stats::{print_statistics, CrawlStatistics};
pub use traits::{OutputError, OutputResult, PageRecord, ResultSink};
