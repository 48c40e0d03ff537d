//! Observer hooks for ingestion outcomes.
//!
//! The ingestion loop is silent by default: malformed rows are dropped and
//! an unreadable source yields an empty result. Attaching an
//! [`IngestObserver`] via [`crate::ingestion::LoadOptions`] surfaces those
//! events without changing the loop's behavior.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::IngestError;

/// Counts reported once per ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Number of data rows read from the source.
    pub rows: usize,
    /// Number of records successfully constructed.
    pub loaded: usize,
    /// Number of rows dropped.
    pub skipped: usize,
}

/// Observer interface for ingestion events.
///
/// All hooks default to no-ops; implement only what you need.
pub trait IngestObserver: Send + Sync {
    /// Called for each dropped row, with its 1-based row number (the header
    /// is row 1).
    fn on_row_skipped(&self, _row: usize, _error: &IngestError) {}

    /// Called when the source cannot be opened or its header read.
    fn on_source_unavailable(&self, _path: &Path, _error: &IngestError) {}

    /// Called once after the row loop finishes.
    fn on_complete(&self, _stats: IngestStats) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestObserver for CompositeObserver {
    fn on_row_skipped(&self, row: usize, error: &IngestError) {
        for o in &self.observers {
            o.on_row_skipped(row, error);
        }
    }

    fn on_source_unavailable(&self, path: &Path, error: &IngestError) {
        for o in &self.observers {
            o.on_source_unavailable(path, error);
        }
    }

    fn on_complete(&self, stats: IngestStats) {
        for o in &self.observers {
            o.on_complete(stats);
        }
    }
}

/// Logs ingestion events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl IngestObserver for StdErrObserver {
    fn on_row_skipped(&self, row: usize, error: &IngestError) {
        eprintln!("[ingest][skip] row={row} err={error}");
    }

    fn on_source_unavailable(&self, path: &Path, error: &IngestError) {
        eprintln!("[ingest][unavailable] path={} err={}", path.display(), error);
    }

    fn on_complete(&self, stats: IngestStats) {
        eprintln!(
            "[ingest][ok] rows={} loaded={} skipped={}",
            stats.rows, stats.loaded, stats.skipped
        );
    }
}

/// Counts dropped rows across one or more ingestion runs.
#[derive(Debug, Default)]
pub struct SkipCounter {
    skipped: AtomicUsize,
}

impl SkipCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows dropped so far.
    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }
}

impl IngestObserver for SkipCounter {
    fn on_row_skipped(&self, _row: usize, _error: &IngestError) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }
}
