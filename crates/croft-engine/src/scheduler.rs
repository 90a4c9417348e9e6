//! The [`GrowthScheduler`] two-phase cadence.
//!
//! Per claim, processing moves through Idle → Eligible → Enqueued →
//! Draining and back to Idle: a claim becomes Eligible once its buff's
//! interval has elapsed since the claim was last enqueued, the enqueue
//! phase moves every Eligible claim's full position set into the shared
//! queue, and the drain phase consumes a bounded slice of that queue on
//! every cadence invocation.
//!
//! The enqueue phase only runs when the queue is empty. That ordering
//! rule is what gives round-robin fairness across claims: a claim's set
//! is fully drained before the next batch of claims is appended, so a
//! five-position claim is never starved behind a five-hundred-position
//! one accumulating passes ahead of it.

use crate::config::{ConfigError, SchedulerConfig};
use crate::metrics::CadenceMetrics;
use crate::queue::GrowthQueue;
use croft_buff::BuffRegistry;
use croft_core::{ClaimId, Clock, GrowableWorld};
use croft_index::CropIndex;
use indexmap::IndexMap;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

/// Orchestrator of crop growth processing, and the only writer of world
/// growth-stage data.
///
/// Driven by the host simulation loop: call [`tick`](Self::tick) once
/// per host tick; every `tick_interval_ticks`-th call runs one cadence
/// (enqueue phase if the queue is empty, then a drain of at most
/// `max_per_tick` entries). Everything runs on the host's logical
/// thread; the only cross-thread structure is the [`CropIndex`], which
/// is internally synchronized.
///
/// Nothing in the cadence can fail: an unresident region means the
/// entry is skipped (the position stays tracked), a vanished or
/// already-mature growable means the position is deregistered, and that
/// is the entire failure surface.
pub struct GrowthScheduler {
    config: SchedulerConfig,
    index: Arc<CropIndex>,
    clock: Arc<dyn Clock>,
    queue: GrowthQueue,
    last_processed_ms: IndexMap<ClaimId, u64>,
    host_tick: u64,
    running: bool,
    last_metrics: CadenceMetrics,
}

impl GrowthScheduler {
    /// Construct a scheduler over a shared index and clock.
    ///
    /// Validates the configuration. The scheduler starts disarmed; call
    /// [`start`](Self::start).
    pub fn new(
        config: SchedulerConfig,
        index: Arc<CropIndex>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            index,
            clock,
            queue: GrowthQueue::new(),
            last_processed_ms: IndexMap::new(),
            host_tick: 0,
            running: false,
            last_metrics: CadenceMetrics::default(),
        })
    }

    /// Arm the cadence with a clean slate.
    ///
    /// `tick_interval_ticks` overrides the configured interval (clamped
    /// to at least 1). Any queued work and per-claim timestamps from a
    /// previous run are discarded, so every claim with a live buff is
    /// eligible again on the first cadence.
    pub fn start(&mut self, tick_interval_ticks: u32) {
        self.config.tick_interval_ticks = tick_interval_ticks.max(1);
        self.queue.clear();
        self.last_processed_ms.clear();
        self.host_tick = 0;
        self.running = true;
    }

    /// Disarm the cadence, discarding the in-flight queue and all
    /// per-claim timestamps.
    pub fn stop(&mut self) {
        self.running = false;
        self.queue.clear();
        self.last_processed_ms.clear();
    }

    /// Whether the cadence is armed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Host ticks between cadence invocations.
    pub fn tick_interval(&self) -> u32 {
        self.config.tick_interval_ticks
    }

    /// The shared position index.
    pub fn index(&self) -> &CropIndex {
        &self.index
    }

    /// Metrics of the most recent cadence invocation.
    pub fn last_metrics(&self) -> &CadenceMetrics {
        &self.last_metrics
    }

    /// Entries currently waiting in the work queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Advance one host tick.
    ///
    /// Off-cadence ticks (and ticks while disarmed) return `None` and do
    /// nothing. A cadence tick runs both phases and returns what they
    /// did.
    pub fn tick(
        &mut self,
        buffs: &mut BuffRegistry,
        world: &mut dyn GrowableWorld,
    ) -> Option<CadenceMetrics> {
        if !self.running {
            return None;
        }
        self.host_tick += 1;
        if self.host_tick % u64::from(self.config.tick_interval_ticks) != 0 {
            return None;
        }
        Some(self.run_cadence(buffs, world))
    }

    fn run_cadence(
        &mut self,
        buffs: &mut BuffRegistry,
        world: &mut dyn GrowableWorld,
    ) -> CadenceMetrics {
        let now = self.clock.now_ms();
        let mut metrics = CadenceMetrics::default();
        // Reseeded per cadence so replaying the same tick numbers with
        // the same seed reproduces every chance draw.
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed ^ self.host_tick);

        if self.queue.is_empty() {
            self.enqueue_eligible(now, buffs, &mut metrics);
        }
        self.drain(world, &mut rng, &mut metrics);

        metrics.queue_depth = self.queue.len();
        self.last_metrics = metrics.clone();
        metrics
    }

    /// Enqueue phase: move every Eligible claim's full position set
    /// into the queue.
    fn enqueue_eligible(
        &mut self,
        now: u64,
        buffs: &mut BuffRegistry,
        metrics: &mut CadenceMetrics,
    ) {
        for (claim, record) in buffs.active_records() {
            let last = self.last_processed_ms.get(&claim).copied().unwrap_or(0);
            if now.saturating_sub(last) < u64::from(record.interval_secs) * 1000 {
                continue;
            }
            let positions = self.index.positions(claim);
            if positions.is_empty() {
                // Nothing to do; leave the timestamp alone so the claim
                // is re-checked next cadence at no cost.
                continue;
            }
            let appended = self.queue.push_claim(claim, positions, &record);
            metrics.claims_enqueued += 1;
            metrics.entries_enqueued += appended as u32;
            self.last_processed_ms.insert(claim, now);
        }
    }

    /// Drain phase: consume up to `max_per_tick` entries.
    fn drain(
        &mut self,
        world: &mut dyn GrowableWorld,
        rng: &mut ChaCha8Rng,
        metrics: &mut CadenceMetrics,
    ) {
        for _ in 0..self.config.max_per_tick {
            let Some(entry) = self.queue.pop() else {
                break;
            };
            metrics.drained += 1;

            if !world.is_region_resident(entry.pos.world, entry.pos.x, entry.pos.z) {
                // Transient: neither mutate nor deregister. The position
                // is re-enqueued on a later pass once the region is back.
                metrics.skipped_unresident += 1;
                continue;
            }

            let Some(cell) = world.growable(&entry.pos) else {
                // The crop is gone; self-heal the index.
                self.index.remove_position(entry.claim, &entry.pos);
                metrics.deregistered += 1;
                continue;
            };
            if cell.is_mature() {
                self.index.remove_position(entry.claim, &entry.pos);
                metrics.deregistered += 1;
                continue;
            }

            if rng.random::<f64>() < entry.growth_chance {
                let next = cell.advanced(entry.growth_amount);
                world.set_stage(&entry.pos, next);
                if self.config.growth_effects {
                    world.growth_effect(&entry.pos);
                }
                metrics.grown += 1;
                if next == cell.max_stage {
                    self.index.remove_position(entry.claim, &entry.pos);
                    metrics.matured += 1;
                    metrics.deregistered += 1;
                }
            }
        }
    }
}
