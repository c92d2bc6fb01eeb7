//! Result sink trait and record types
//!
//! This module defines the trait interface for result sinks and the page
//! record they persist.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// The persisted unit of crawl output
///
/// Created once per successfully fetched page and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// The URL exactly as it was popped from the frontier
    pub url: String,

    /// Trimmed text of the first `<title>`, or empty
    pub title: String,

    /// Trimmed `content` of the first `<meta name="description">`, or empty
    pub description: String,
}

impl PageRecord {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Trait for result sink implementations
///
/// A sink receives the full ordered list of records on every persistence
/// event and replaces whatever it held before. Calling `persist` twice with
/// the same records must leave the same content behind.
pub trait ResultSink {
    /// Persists all records collected so far, overwriting earlier content
    fn persist(&mut self, records: &[PageRecord]) -> OutputResult<()>;
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn persist(&mut self, records: &[PageRecord]) -> OutputResult<()> {
        (**self).persist(records)
    }
}
