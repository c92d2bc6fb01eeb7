//! Configuration module for Web-Sweep
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; [`Config::default`] carries the built-in seed list and
//! crawl limits.
//!
//! # Example
//!
//! ```no_run
//! use web_sweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawl.toml")).unwrap();
//! println!("Crawler will attempt at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_MAX_CONCURRENT,
    DEFAULT_MAX_PAGES, DEFAULT_RESULTS_PATH, DEFAULT_SAVE_INTERVAL, DEFAULT_SEEDS,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
