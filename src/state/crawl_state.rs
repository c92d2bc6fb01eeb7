//! Crawl-level state definitions
//!
//! A crawl starts `Running` and moves to `Done` exactly once, when the
//! frontier is empty or the page budget has been spent.

use std::fmt;

/// Represents the current state of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrawlState {
    /// The engine is still popping URLs from the frontier
    #[default]
    Running,

    /// The crawl has terminated; only the final save remains
    Done,
}

impl CrawlState {
    /// Returns true if the crawl will not process any more URLs
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns the lowercase name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Done => "done",
        }
    }

    /// Checks whether a transition to `to` is allowed
    ///
    /// `Running -> Done` is the only real transition; staying in the same
    /// state is always allowed.
    pub fn can_transition_to(&self, to: CrawlState) -> bool {
        match (self, to) {
            (Self::Running, _) => true,
            (Self::Done, Self::Done) => true,
            (Self::Done, Self::Running) => false,
        }
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
