//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: Running/Done state of a whole crawl
//! - `PageOutcome`: What happened to a single URL popped from the frontier

mod crawl_state;
mod page_outcome;

// Re-export main types
pub use crawl_state::CrawlState;
pub use page_outcome::PageOutcome;
