//! Per-URL outcome definitions

use std::fmt;

/// Outcome of processing one URL popped from the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageOutcome {
    /// Page fetched and turned into a record
    Recorded,

    /// Fetch failed (network error, timeout or 5xx); URL still counts as visited
    FetchFailed,

    /// URL was already visited when popped; discarded without a fetch
    Duplicate,
}

impl PageOutcome {
    /// Returns true if this outcome counts against the page budget
    pub fn is_attempt(&self) -> bool {
        matches!(self, Self::Recorded | Self::FetchFailed)
    }

    /// Returns true if a record was produced
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Recorded)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recorded => "recorded",
            Self::FetchFailed => "fetch_failed",
            Self::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempts() {
        assert!(PageOutcome::Recorded.is_attempt());
        assert!(PageOutcome::FetchFailed.is_attempt());
        assert!(!PageOutcome::Duplicate.is_attempt());
    }

    #[test]
    fn test_success() {
        assert!(PageOutcome::Recorded.is_success());
        assert!(!PageOutcome::FetchFailed.is_success());
        assert!(!PageOutcome::Duplicate.is_success());
    }

    #[test]
    fn test_display() {
        assert_eq!(PageOutcome::FetchFailed.to_string(), "fetch_failed");
    }
}
