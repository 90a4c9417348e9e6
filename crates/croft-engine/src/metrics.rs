//! Per-cadence scheduler metrics.
//!
//! [`CadenceMetrics`] captures what one cadence invocation did, for
//! telemetry and testing. The host samples
//! [`GrowthScheduler::last_metrics`](crate::GrowthScheduler::last_metrics)
//! and logs or graphs them itself; the engine carries no logging of its
//! own.

/// Counters for a single cadence invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CadenceMetrics {
    /// Claims whose position sets were appended to the queue this
    /// cadence (zero when the queue was non-empty at cadence start).
    pub claims_enqueued: u32,
    /// Work entries appended this cadence.
    pub entries_enqueued: u32,
    /// Entries popped by the drain phase.
    pub drained: u32,
    /// Positions whose stage advanced.
    pub grown: u32,
    /// Positions that reached their final stage this cadence.
    pub matured: u32,
    /// Positions deregistered from the index (matured, vanished, or
    /// found already mature).
    pub deregistered: u32,
    /// Entries skipped because their region was not resident; these
    /// stay tracked and are retried on a later pass.
    pub skipped_unresident: u32,
    /// Entries left in the queue after the drain phase.
    pub queue_depth: usize,
}
