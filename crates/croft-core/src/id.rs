//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a land claim.
///
/// Claims are non-overlapping, axis-aligned regions owned by an external
/// protection subsystem; their identifiers are stable for the lifetime of
/// the claim and are the key for every per-claim structure in this
/// workspace (tracked positions, buff records, processing timestamps).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClaimId(pub i64);

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ClaimId {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

/// Identifies a world (dimension) within the host simulation.
///
/// A [`GridPosition`](crate::GridPosition) is only meaningful together
/// with the world it belongs to; two positions with equal coordinates in
/// different worlds are distinct keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldId(pub u32);

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WorldId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Ordinal rank of a growth buff.
///
/// Higher tiers replace lower active ones, never the reverse. The rank is
/// the only field consulted by the upgrade rule; multiplier and chance
/// knobs are carried alongside it but do not participate in ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tier(pub u32);

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Tier {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
