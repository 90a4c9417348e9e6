//! The [`BuffRegistry`] and its activation outcome.

use crate::params::BuffParams;
use croft_core::{BuffRecord, BuffStore, ClaimId, Clock, StoreError, Tier};
use indexmap::IndexMap;
use std::sync::Arc;

// ── Activation ───────────────────────────────────────────────────

/// Outcome of an activation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The buff was applied. `upgraded_from` carries the tier of the
    /// record it replaced, if the claim had a live lower-tier buff.
    Applied {
        /// Tier of the replaced record, absent for a fresh activation.
        upgraded_from: Option<Tier>,
    },
    /// Rejected: the claim already has a live buff at an equal or
    /// higher tier. Nothing was mutated.
    Blocked {
        /// Tier of the buff blocking this activation.
        active_tier: Tier,
        /// Time the blocking buff has left, in milliseconds.
        remaining_ms: u64,
    },
}

// ── BuffRegistry ─────────────────────────────────────────────────

/// Per-claim registry of active growth buffs.
///
/// Holds at most one [`BuffRecord`] per claim. Expired records are
/// treated as absent by every read path and evicted lazily on the spot;
/// [`sweep_expired`](Self::sweep_expired) additionally runs on a slow
/// host cadence for memory hygiene and store consistency.
///
/// Every mutation is mirrored to the durable store. A store failure is
/// never fatal: the in-memory map stays authoritative, the failure is
/// counted, and the most recent error is retained for the host to
/// collect via [`take_store_error`](Self::take_store_error).
pub struct BuffRegistry {
    records: IndexMap<ClaimId, BuffRecord>,
    store: Box<dyn BuffStore>,
    clock: Arc<dyn Clock>,
    store_failures: u64,
    last_store_error: Option<StoreError>,
}

impl BuffRegistry {
    /// Create a registry over a durable store and a clock.
    ///
    /// Starts empty; call [`load`](Self::load) to restore persisted
    /// records.
    pub fn new(store: Box<dyn BuffStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: IndexMap::new(),
            store,
            clock,
            store_failures: 0,
            last_store_error: None,
        }
    }

    /// Activate a buff on a claim.
    ///
    /// A fresh activation (no live record) always applies. Against a
    /// live record, a strictly higher tier replaces it with a fresh
    /// expiry; an equal or lower tier is [`Activation::Blocked`] and
    /// nothing is mutated. An expired incumbent is treated as absent.
    pub fn activate(&mut self, claim: ClaimId, params: &BuffParams) -> Activation {
        let now = self.clock.now_ms();
        self.evict_if_expired(claim, now);

        let upgraded_from = match self.records.get(&claim) {
            Some(existing) if params.tier <= existing.tier => {
                return Activation::Blocked {
                    active_tier: existing.tier,
                    remaining_ms: existing.remaining_ms(now),
                };
            }
            Some(existing) => Some(existing.tier),
            None => None,
        };

        let record = params.to_record(now);
        self.persist_put(claim, &record);
        self.records.insert(claim, record);
        Activation::Applied { upgraded_from }
    }

    /// Whether the claim has a live (non-expired) buff.
    pub fn is_active(&mut self, claim: ClaimId) -> bool {
        let now = self.clock.now_ms();
        self.evict_if_expired(claim, now);
        self.records.contains_key(&claim)
    }

    /// The claim's growth multiplier: `1.0` when no buff is live.
    pub fn multiplier(&mut self, claim: ClaimId) -> f64 {
        let now = self.clock.now_ms();
        self.evict_if_expired(claim, now);
        self.records.get(&claim).map_or(1.0, |r| r.multiplier)
    }

    /// The claim's live record, if any.
    pub fn record(&mut self, claim: ClaimId) -> Option<&BuffRecord> {
        let now = self.clock.now_ms();
        self.evict_if_expired(claim, now);
        self.records.get(&claim)
    }

    /// Remove a claim's buff regardless of expiry. Returns whether a
    /// record was present.
    pub fn deactivate(&mut self, claim: ClaimId) -> bool {
        let removed = self.records.shift_remove(&claim).is_some();
        if removed {
            self.persist_remove(claim);
        }
        removed
    }

    /// Evict every expired record. Returns the claims removed.
    ///
    /// Intended for a slow periodic host cadence (tens of seconds),
    /// independent of the scheduler: the read paths already treat
    /// expired records as absent, so this is hygiene, not correctness.
    pub fn sweep_expired(&mut self) -> Vec<ClaimId> {
        let now = self.clock.now_ms();
        let expired: Vec<ClaimId> = self
            .records
            .iter()
            .filter(|(_, r)| r.is_expired(now))
            .map(|(c, _)| *c)
            .collect();
        for claim in &expired {
            self.records.shift_remove(claim);
            self.persist_remove(*claim);
        }
        expired
    }

    /// Snapshot of every live record, evicting expired ones on the way.
    ///
    /// This is the scheduler's enqueue-phase read path.
    pub fn active_records(&mut self) -> Vec<(ClaimId, BuffRecord)> {
        self.sweep_expired();
        self.records.iter().map(|(c, r)| (*c, r.clone())).collect()
    }

    /// Number of records currently held (including not-yet-evicted
    /// expired ones).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write every held record to the store.
    ///
    /// Unlike the per-mutation mirror writes, this reports the first
    /// failure to the caller: it is an explicit host action (shutdown,
    /// periodic checkpoint) and the host owns the logging.
    pub fn save(&mut self) -> Result<(), StoreError> {
        for (claim, record) in &self.records {
            self.store.put(*claim, record)?;
        }
        Ok(())
    }

    /// Replace in-memory state with the store's contents, dropping any
    /// record that expired while the process was down. Returns the
    /// number of records restored.
    pub fn load(&mut self) -> Result<usize, StoreError> {
        let now = self.clock.now_ms();
        let stored = self.store.load_all()?;
        self.records.clear();
        for (claim, record) in stored {
            if record.is_expired(now) {
                // Stale on disk; drop it there too, best-effort.
                self.persist_remove(claim);
            } else {
                self.records.insert(claim, record);
            }
        }
        Ok(self.records.len())
    }

    /// Store failures observed since construction.
    pub fn store_failures(&self) -> u64 {
        self.store_failures
    }

    /// Take the most recent store error, if one occurred since the last
    /// call. The host logs it; engine state is unaffected.
    pub fn take_store_error(&mut self) -> Option<StoreError> {
        self.last_store_error.take()
    }

    fn evict_if_expired(&mut self, claim: ClaimId, now: u64) {
        let expired = self
            .records
            .get(&claim)
            .is_some_and(|r| r.is_expired(now));
        if expired {
            self.records.shift_remove(&claim);
            self.persist_remove(claim);
        }
    }

    fn persist_put(&mut self, claim: ClaimId, record: &BuffRecord) {
        if let Err(err) = self.store.put(claim, record) {
            self.store_failures += 1;
            self.last_store_error = Some(err);
        }
    }

    fn persist_remove(&mut self, claim: ClaimId) {
        if let Err(err) = self.store.remove(claim) {
            self.store_failures += 1;
            self.last_store_error = Some(err);
        }
    }
}
