//! The [`GridPosition`] coordinate key.

use crate::id::WorldId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A world-qualified cell coordinate.
///
/// This is a pure value key: it does not hold a reference to any live
/// world object. Callers resolve it through
/// [`GrowableWorld`](crate::traits::GrowableWorld) at use time, and that
/// resolution may fail if the containing region is not currently resident
/// in memory, in which case the position is simply left untouched for
/// the current pass.
///
/// Equality and hashing cover all four fields.
///
/// # Examples
///
/// ```
/// use croft_core::{GridPosition, WorldId};
///
/// let a = GridPosition::new(WorldId(0), 12, 64, -3);
/// let b = GridPosition::new(WorldId(0), 12, 64, -3);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "0:12,64,-3");
///
/// // Same coordinates in a different world are a different key.
/// let c = GridPosition::new(WorldId(1), 12, 64, -3);
/// assert_ne!(a, c);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    /// The world this coordinate belongs to.
    pub world: WorldId,
    /// East-west axis.
    pub x: i32,
    /// Vertical axis.
    pub y: i32,
    /// North-south axis.
    pub z: i32,
}

impl GridPosition {
    /// Construct a position from a world and three axes.
    pub fn new(world: WorldId, x: i32, y: i32, z: i32) -> Self {
        Self { world, x, y, z }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{},{},{}", self.world, self.x, self.y, self.z)
    }
}
