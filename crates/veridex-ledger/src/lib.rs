//! Veridex Provenance Ledger
//!
//! Append-only audit sinks for [`ProvenanceEntry`] records.
//!
//! - `FileLedger`: newline-delimited JSON, one flushed line per record,
//!   writes serialized through a mutex so concurrent sessions cannot
//!   interleave records
//! - `MemoryLedger`: in-memory sink for tests
//!
//! Durability is best-effort, not transactional: a failed write is
//! reported on the `tracing` channel and never aborts the pipeline.

#![warn(missing_docs)]

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::error;
use veridex_domain::traits::ProvenanceSink;
use veridex_domain::ProvenanceEntry;

/// Errors that can occur while opening a ledger
///
/// Only construction is fallible; appends absorb their own failures.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The ledger file or its parent directory could not be created
    #[error("failed to open ledger at {path}: {source}")]
    Open {
        /// Target ledger path
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}

/// Append-only NDJSON file ledger
///
/// One JSON record per line, written and flushed immediately; the file
/// is opened in append mode and never rewritten.
pub struct FileLedger {
    path: PathBuf,
    writer: Mutex<File>,
}

impl FileLedger {
    /// Open (or create) the ledger file at `path` in append mode
    ///
    /// Parent directories are created as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| LedgerError::Open {
                    path: path.clone(),
                    source,
                })?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LedgerError::Open {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            writer: Mutex::new(file),
        })
    }

    /// Path of the underlying ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProvenanceSink for FileLedger {
    fn record(&self, entry: ProvenanceEntry) {
        let line = match serde_json::to_string(&entry) {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, agent = %entry.agent, "failed to serialize provenance entry");
                return;
            }
        };

        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            error!(error = %e, path = %self.path.display(), "failed to append provenance entry");
        }
    }
}

/// In-memory provenance sink for tests
///
/// Records entries in write order and exposes snapshots.
#[derive(Default)]
pub struct MemoryLedger {
    entries: Mutex<Vec<ProvenanceEntry>>,
}

impl MemoryLedger {
    /// Create an empty in-memory ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries, in write order
    pub fn entries(&self) -> Vec<ProvenanceEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ProvenanceSink for MemoryLedger {
    fn record(&self, entry: ProvenanceEntry) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridex_domain::SessionId;

    fn entry(session: SessionId, action: &str) -> ProvenanceEntry {
        ProvenanceEntry::new(session, "TestAgent", action, "test action")
    }

    #[test]
    fn test_file_ledger_writes_one_json_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("provenance.log");
        let ledger = FileLedger::open(&path).unwrap();

        let session = SessionId::new();
        ledger.record(entry(session, "first"));
        ledger.record(entry(session, "second"));

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["session_id"], session.to_string());
            assert_eq!(value["agent"], "TestAgent");
        }
        // Write order is audit order
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["action_type"], "first");
    }

    #[test]
    fn test_file_ledger_appends_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provenance.log");
        let session = SessionId::new();

        FileLedger::open(&path).unwrap().record(entry(session, "a"));
        FileLedger::open(&path).unwrap().record(entry(session, "b"));

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_memory_ledger_preserves_write_order() {
        let ledger = MemoryLedger::new();
        let session = SessionId::new();
        ledger.record(entry(session, "a"));
        ledger.record(entry(session, "b"));

        let entries = ledger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action_type, "a");
        assert_eq!(entries[1].action_type, "b");
    }
}
