//! The [`CropIndex`] concurrent per-claim position set.

use crate::region::{ClaimBounds, ClaimResolver, ScanBand};
use croft_core::{ClaimId, GridPosition};
use indexmap::{IndexMap, IndexSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory index of grid positions known to host a growable,
/// not-yet-mature object, keyed by the claim they sit in.
///
/// Structural events (`add_position` / `remove_position`) may arrive
/// from execution contexts other than the scheduler's, so the map lives
/// behind an `RwLock`; readers take snapshots rather than holding the
/// lock across processing.
///
/// Invariants maintained here:
/// - a claim whose set becomes empty is dropped from the map entirely
///   (no residual empty entries accumulate);
/// - `positions()` never returns "null": an untracked claim reads as an
///   empty set.
///
/// A position belongs to at most one claim because claims themselves are
/// non-overlapping; [`remove_position_any_claim`](Self::remove_position_any_claim)
/// exists for callers that hold a position but not its claim.
#[derive(Debug, Default)]
pub struct CropIndex {
    claims: RwLock<IndexMap<ClaimId, IndexSet<GridPosition>>>,
}

impl CropIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<ClaimId, IndexSet<GridPosition>>> {
        self.claims.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<ClaimId, IndexSet<GridPosition>>> {
        self.claims.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Track a position for a claim. Re-adding a tracked position is a
    /// no-op.
    pub fn add_position(&self, claim: ClaimId, pos: GridPosition) {
        self.write().entry(claim).or_default().insert(pos);
    }

    /// Stop tracking a position. A no-op if the position is absent.
    ///
    /// Drops the claim entry itself when its set becomes empty.
    pub fn remove_position(&self, claim: ClaimId, pos: &GridPosition) {
        let mut map = self.write();
        if let Some(set) = map.get_mut(&claim) {
            // Order within a claim's set carries no meaning.
            set.swap_remove(pos);
            if set.is_empty() {
                map.shift_remove(&claim);
            }
        }
    }

    /// Remove a position from whichever claim tracks it, if any.
    ///
    /// O(claims) scan; only for structural events where the caller does
    /// not know the claim. Never used on the per-tick path.
    pub fn remove_position_any_claim(&self, pos: &GridPosition) {
        let mut map = self.write();
        let mut emptied = None;
        for (claim, set) in map.iter_mut() {
            if set.swap_remove(pos) {
                if set.is_empty() {
                    emptied = Some(*claim);
                }
                break;
            }
        }
        if let Some(claim) = emptied {
            map.shift_remove(&claim);
        }
    }

    /// Snapshot of the positions tracked for a claim.
    ///
    /// Returns an owned set so the caller never holds the index lock
    /// while processing. An untracked claim yields an empty set.
    pub fn positions(&self, claim: ClaimId) -> IndexSet<GridPosition> {
        self.read().get(&claim).cloned().unwrap_or_default()
    }

    /// Number of positions tracked for a claim.
    pub fn count(&self, claim: ClaimId) -> usize {
        self.read().get(&claim).map_or(0, IndexSet::len)
    }

    /// Total positions tracked across all claims.
    pub fn total(&self) -> usize {
        self.read().values().map(IndexSet::len).sum()
    }

    /// Claims currently holding at least one tracked position.
    pub fn claims(&self) -> Vec<ClaimId> {
        self.read().keys().copied().collect()
    }

    /// Whether a claim currently tracks a position.
    pub fn contains(&self, claim: ClaimId, pos: &GridPosition) -> bool {
        self.read().get(&claim).is_some_and(|set| set.contains(pos))
    }

    /// Drop every tracked position for a claim.
    pub fn clear_claim(&self, claim: ClaimId) {
        self.write().shift_remove(&claim);
    }

    /// Drop all tracked state.
    pub fn clear_all(&self) {
        self.write().clear();
    }

    /// Scan a claim's footprint and register every coordinate for which
    /// `predicate` holds, replacing whatever was tracked before.
    ///
    /// The vertical extent is restricted to `band` around the claim's
    /// anchor elevation (see [`ScanBand`]). Returns the number of
    /// positions registered. Cost is proportional to the scanned region
    /// volume; invoke on buff activation only, never per tick.
    pub fn bulk_register<F>(
        &self,
        claim: ClaimId,
        bounds: &ClaimBounds,
        band: ScanBand,
        predicate: F,
    ) -> usize
    where
        F: Fn(&GridPosition) -> bool,
    {
        let (y_lo, y_hi) = bounds.band_span(band);
        let mut found = IndexSet::new();
        for x in bounds.min_x..=bounds.max_x {
            for z in bounds.min_z..=bounds.max_z {
                for y in y_lo..=y_hi {
                    let pos = GridPosition::new(bounds.world, x, y, z);
                    if predicate(&pos) {
                        found.insert(pos);
                    }
                }
            }
        }

        let registered = found.len();
        let mut map = self.write();
        if found.is_empty() {
            map.shift_remove(&claim);
        } else {
            map.insert(claim, found);
        }
        registered
    }

    /// [`bulk_register`](Self::bulk_register) through a [`ClaimResolver`].
    ///
    /// Returns `None` when the claim's bounds are unavailable (transient;
    /// the tracked set is left untouched and the caller retries later).
    pub fn bulk_register_resolved<F>(
        &self,
        resolver: &dyn ClaimResolver,
        claim: ClaimId,
        band: ScanBand,
        predicate: F,
    ) -> Option<usize>
    where
        F: Fn(&GridPosition) -> bool,
    {
        let bounds = resolver.claim_bounds(claim)?;
        Some(self.bulk_register(claim, &bounds, band, predicate))
    }
}
