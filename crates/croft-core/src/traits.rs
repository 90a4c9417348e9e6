//! Collaborator traits: world access, durable storage, and time.

use crate::cell::GrowableCell;
use crate::error::StoreError;
use crate::id::{ClaimId, WorldId};
use crate::pos::GridPosition;
use crate::record::BuffRecord;
use indexmap::IndexMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Read/write access to growable cells in the host world.
///
/// Implementations must be cheap existence checks and direct cell
/// accessors, never load-and-wait. If a region is not resident,
/// [`is_region_resident`](GrowableWorld::is_region_resident) returns
/// `false` and the caller skips the position without side effects.
pub trait GrowableWorld {
    /// Whether the region containing the `(x, z)` column of `world` is
    /// currently loaded and addressable.
    fn is_region_resident(&self, world: WorldId, x: i32, z: i32) -> bool;

    /// Read the growable at a position.
    ///
    /// Returns `None` when the cell does not currently host a growable
    /// object. Callers must check residency first; reading an
    /// unresident position is implementation-defined.
    fn growable(&self, pos: &GridPosition) -> Option<GrowableCell>;

    /// Write a new maturity stage to a cell.
    ///
    /// Only called with stages previously obtained from
    /// [`GrowableCell::advanced`], so the value is already clamped.
    fn set_stage(&mut self, pos: &GridPosition, stage: u8);

    /// Cosmetic hook fired after a successful growth step.
    ///
    /// Default is a no-op; hosts that render particles or sounds
    /// override it. Has no effect on engine behavior.
    fn growth_effect(&mut self, _pos: &GridPosition) {}
}

/// Durable key-value persistence for buff records.
///
/// One record per claim. The registry mirrors every mutation here and
/// reloads the full map at startup.
pub trait BuffStore {
    /// Insert or replace the record for a claim.
    fn put(&mut self, claim: ClaimId, record: &BuffRecord) -> Result<(), StoreError>;

    /// Remove the record for a claim. Removing an absent claim is a no-op.
    fn remove(&mut self, claim: ClaimId) -> Result<(), StoreError>;

    /// Load every stored record.
    fn load_all(&self) -> Result<IndexMap<ClaimId, BuffRecord>, StoreError>;
}

/// Injectable wall-clock source.
///
/// The registry and scheduler share one clock so expiry and eligibility
/// agree on "now". Tests substitute a manually-advanced clock to make
/// time-dependent behavior deterministic.
pub trait Clock: Send + Sync {
    /// Current time, milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

/// The production [`Clock`] backed by [`SystemTime`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // A pre-epoch system clock reads as 0 rather than panicking.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
