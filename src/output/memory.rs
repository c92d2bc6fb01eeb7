use crate::output::traits::{OutputResult, PageRecord, ResultSink};

/// Sink that keeps every persisted snapshot in memory
///
/// Useful for library callers that want the records without a file, and for
/// checking when periodic saves happened.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    snapshots: Vec<Vec<PageRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All snapshots, oldest first
    pub fn snapshots(&self) -> &[Vec<PageRecord>] {
        &self.snapshots
    }

    /// The most recently persisted records
    pub fn latest(&self) -> Option<&[PageRecord]> {
        self.snapshots.last().map(Vec::as_slice)
    }

    /// Number of persistence events seen
    pub fn save_count(&self) -> usize {
        self.snapshots.len()
    }
}

impl ResultSink for MemorySink {
    fn persist(&mut self, records: &[PageRecord]) -> OutputResult<()> {
        self.snapshots.push(records.to_vec());
        Ok(())
    }
}
