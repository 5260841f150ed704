//! Run reports for batch repairs
//!
//! Records which exports were repaired in a run, with enough counts to spot
//! a file that merged suspiciously few records.

use crate::error::Result;
use crate::reshape::ReshapeStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One repaired file within a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixEntry {
    /// Source export
    pub input: PathBuf,
    /// Repaired output
    pub output: PathBuf,
    /// Raw lines read from the source
    pub lines_read: usize,
    /// Lines written to the output
    pub lines_written: usize,
    /// What the reshape pass did
    pub stats: ReshapeStats,
}

/// Record of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixReport {
    /// When the run happened
    pub generated_at: DateTime<Utc>,
    /// One entry per repaired file
    pub entries: Vec<FixEntry>,
}

impl FixReport {
    /// Create an empty report stamped with the current time
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            entries: Vec::new(),
        }
    }

    /// Add an entry to the report
    pub fn add_entry(&mut self, entry: FixEntry) {
        self.entries.push(entry);
    }

    /// Total combined records across all entries
    pub fn total_units(&self) -> usize {
        self.entries.iter().map(|e| e.stats.units).sum()
    }

    /// Save the report as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl Default for FixReport {
    fn default() -> Self {
        Self::new()
    }
}
