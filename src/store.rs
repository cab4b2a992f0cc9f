// src/store.rs
use crate::searchlibs::SnackRecord;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("row {index} is out of range ({count} records)")]
pub struct IndexError {
    pub index: usize,
    pub count: usize,
}

struct Snapshot {
    sequence: u64,
    records: Arc<[SnackRecord]>,
}

/// The list currently on screen.
///
/// Readers get an `Arc` to an immutable slice, so a replace that lands while
/// someone is iterating never shows them a mixed list.
pub struct ResultStore {
    current: RwLock<Snapshot>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Snapshot {
                sequence: 0,
                records: Arc::from(Vec::new()),
            }),
        }
    }

    /// Swaps in `records` unconditionally.
    pub fn replace(&self, records: Vec<SnackRecord>) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        current.records = Arc::from(records);
    }

    /// Swaps in `records` only if `sequence` is newer than the last applied
    /// run. Returns whether the store changed.
    pub fn replace_if_newer(&self, sequence: u64, records: Vec<SnackRecord>) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if sequence <= current.sequence {
            return false;
        }

        current.sequence = sequence;
        current.records = Arc::from(records);
        true
    }

    pub fn applied_sequence(&self) -> u64 {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sequence
    }

    pub fn snapshot(&self) -> Arc<[SnackRecord]> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current.records)
    }

    pub fn count(&self) -> usize {
        self.snapshot().len()
    }

    pub fn at(&self, index: usize) -> Result<SnackRecord, IndexError> {
        let records = self.snapshot();
        records.get(index).cloned().ok_or(IndexError {
            index,
            count: records.len(),
        })
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}
