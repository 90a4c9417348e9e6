//! The persisted per-claim growth buff record.

use crate::id::Tier;
use serde::{Deserialize, Serialize};

/// An active growth modifier for one claim.
///
/// At most one record exists per claim at any time. Records are created
/// by activation, replaced only by a strictly higher [`Tier`], and
/// destroyed on expiry or explicit deactivation. Every mutation is
/// mirrored to the durable store so a restart reloads the same state
/// (minus anything that expired while the process was down).
///
/// `multiplier` is a dimensionless factor `>= 1.0` describing the
/// intended average speed-up relative to baseline growth. It is stored
/// and served for display; the realized effect comes from
/// `growth_chance` and `growth_amount`, which the activation caller
/// derives from it.
///
/// # Examples
///
/// ```
/// use croft_core::{BuffRecord, Tier};
///
/// let record = BuffRecord {
///     tier: Tier(1),
///     label: "Basic".into(),
///     multiplier: 1.5,
///     expire_at_ms: 10_000,
///     interval_secs: 30,
///     growth_chance: 0.5,
///     growth_amount: 1,
/// };
/// assert!(!record.is_expired(9_999));
/// assert!(record.is_expired(10_000));
/// assert_eq!(record.remaining_ms(4_000), 6_000);
/// assert_eq!(record.remaining_ms(12_000), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuffRecord {
    /// Ordinal rank; governs the replace-on-upgrade rule.
    pub tier: Tier,
    /// Display name of the tier ("Basic", "Greater", ...).
    pub label: String,
    /// Advertised growth-rate factor, `>= 1.0`.
    pub multiplier: f64,
    /// Wall-clock expiry, milliseconds since the epoch.
    pub expire_at_ms: u64,
    /// Minimum seconds between processing passes over this claim.
    pub interval_secs: u32,
    /// Per-position probability of a growth step in one pass, in `[0, 1]`.
    pub growth_chance: f64,
    /// Stages gained by a successful growth step, `>= 1`.
    pub growth_amount: u8,
}

impl BuffRecord {
    /// Whether the record has expired at `now_ms`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.expire_at_ms <= now_ms
    }

    /// Milliseconds of buff time left at `now_ms` (zero once expired).
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.expire_at_ms.saturating_sub(now_ms)
    }
}
