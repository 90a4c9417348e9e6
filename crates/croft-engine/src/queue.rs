//! The transient growth work queue.
//!
//! [`GrowthQueue`] buffers the positions pulled from the index during
//! an enqueue phase until the drain phase consumes them. Entries are
//! never persisted; shutdown discards the queue wholesale.

use croft_core::{BuffRecord, ClaimId, GridPosition};
use std::collections::VecDeque;

/// One unit of drain-phase work.
///
/// Carries a copy of the claim's chance/amount knobs so the drain phase
/// never needs to consult the registry: the values in effect at
/// enqueue time are the values applied, even if the buff is upgraded or
/// expires mid-drain.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkEntry {
    /// Claim the position belongs to.
    pub claim: ClaimId,
    /// The position to process.
    pub pos: GridPosition,
    /// Growth probability for this entry.
    pub growth_chance: f64,
    /// Stages gained on a successful draw.
    pub growth_amount: u8,
}

/// FIFO queue of [`WorkEntry`] values.
///
/// One claim's full position set is appended in a single
/// [`push_claim`](Self::push_claim) call, so a claim's entries are
/// contiguous and a partial enqueue of one claim never interleaves with
/// another claim's.
#[derive(Debug, Default)]
pub struct GrowthQueue {
    entries: VecDeque<WorkEntry>,
}

impl GrowthQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every position of one claim, tagged with the buff's
    /// chance/amount knobs. Returns the number of entries appended.
    pub fn push_claim<I>(&mut self, claim: ClaimId, positions: I, record: &BuffRecord) -> usize
    where
        I: IntoIterator<Item = GridPosition>,
    {
        let before = self.entries.len();
        for pos in positions {
            self.entries.push_back(WorkEntry {
                claim,
                pos,
                growth_chance: record.growth_chance,
                growth_amount: record.growth_amount,
            });
        }
        self.entries.len() - before
    }

    /// Pop the oldest entry.
    pub fn pop(&mut self) -> Option<WorkEntry> {
        self.entries.pop_front()
    }

    /// Entries currently queued.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard all queued entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
