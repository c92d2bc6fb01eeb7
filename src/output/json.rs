//! JSON results document
//!
//! Records are written as an indented JSON array, UTF-8, with non-ASCII
//! characters left as-is. Each save goes to a sibling temporary file which
//! is then renamed over the target, so a reader sees either the previous
//! document or the new one.

use crate::output::traits::{OutputError, OutputResult, PageRecord, ResultSink};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sink that overwrites a JSON file on every persistence event
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
    saves: usize,
}

impl JsonFileSink {
    /// Creates a sink writing to `path`
    ///
    /// Nothing touches the filesystem until the first `persist`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            saves: 0,
        }
    }

    /// Path of the results document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ResultSink for JsonFileSink {
    fn persist(&mut self, records: &[PageRecord]) -> OutputResult<()> {
        write_records_json(&self.path, records)?;
        self.saves += 1;
        tracing::debug!(
            "Saved {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Writes `records` to `path` as a pretty-printed JSON array
///
/// Missing parent directories are created.
///
/// # Arguments
///
/// * `path` - Destination file
/// * `records` - Records in crawl order
///
/// # Returns
///
/// * `Ok(())` - The document at `path` now holds exactly `records`
/// * `Err(OutputError)` - Serialization or filesystem failure; the previous
///   document, if any, is left untouched
pub fn write_records_json(path: &Path, records: &[PageRecord]) -> OutputResult<()> {
    let file_name = path.file_name().ok_or_else(|| {
        OutputError::Write(format!("{} does not name a file", path.display()))
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    if let Err(e) = write_to(&tmp_path, records) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn write_to(path: &Path, records: &[PageRecord]) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

/// Reads a results document back into records
pub fn read_records_json(path: &Path) -> OutputResult<Vec<PageRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
