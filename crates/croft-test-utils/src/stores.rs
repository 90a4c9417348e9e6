//! Failure-injecting buff store.

use croft_core::{BuffRecord, BuffStore, ClaimId, StoreError};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A [`BuffStore`] that fails deterministically after a configurable
/// number of successful operations.
///
/// Useful for testing that store failures never disturb in-memory
/// registry state. Uses `AtomicUsize` for the operation counter so
/// `load_all` (which takes `&self`) can participate in the count.
pub struct FailingStore {
    records: IndexMap<ClaimId, BuffRecord>,
    succeed_count: usize,
    op_count: AtomicUsize,
}

impl FailingStore {
    /// Create a store that succeeds `succeed_count` times then fails
    /// every subsequent operation.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            records: IndexMap::new(),
            succeed_count,
            op_count: AtomicUsize::new(0),
        }
    }

    /// How many operations have been attempted.
    pub fn ops(&self) -> usize {
        self.op_count.load(Ordering::Relaxed)
    }

    fn check(&self) -> Result<(), StoreError> {
        let n = self.op_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(StoreError::Io {
                reason: format!(
                    "deliberate failure after {} successful operations",
                    self.succeed_count
                ),
            });
        }
        Ok(())
    }
}

impl BuffStore for FailingStore {
    fn put(&mut self, claim: ClaimId, record: &BuffRecord) -> Result<(), StoreError> {
        self.check()?;
        self.records.insert(claim, record.clone());
        Ok(())
    }

    fn remove(&mut self, claim: ClaimId) -> Result<(), StoreError> {
        self.check()?;
        self.records.shift_remove(&claim);
        Ok(())
    }

    fn load_all(&self) -> Result<IndexMap<ClaimId, BuffRecord>, StoreError> {
        self.check()?;
        Ok(self.records.clone())
    }
}
