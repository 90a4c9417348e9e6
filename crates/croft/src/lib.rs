//! Croft: a claim-scoped, time-bound crop growth engine for simulated
//! farming worlds.
//!
//! Players activate a consumable growth buff inside a land claim; for a
//! limited time, crops inside that claim mature faster than baseline.
//! Croft applies that effect to thousands of individually-placed crops
//! across many claims without scanning the world per tick and without
//! per-tick processing spikes: a sparse per-claim position index, a
//! tiered buff registry with durable persistence, and an amortized
//! two-phase scheduler that caps mutations per tick.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Croft sub-crates. For most users, adding `croft` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use croft::prelude::*;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! // A ten-cell wheat field standing in for the host world.
//! struct Field {
//!     cells: HashMap<GridPosition, GrowableCell>,
//! }
//!
//! impl GrowableWorld for Field {
//!     fn is_region_resident(&self, _world: WorldId, _x: i32, _z: i32) -> bool {
//!         true
//!     }
//!     fn growable(&self, pos: &GridPosition) -> Option<GrowableCell> {
//!         self.cells.get(pos).copied()
//!     }
//!     fn set_stage(&mut self, pos: &GridPosition, stage: u8) {
//!         if let Some(cell) = self.cells.get_mut(pos) {
//!             cell.stage = stage;
//!         }
//!     }
//! }
//!
//! let clock: Arc<dyn Clock> = Arc::new(SystemClock);
//! let index = Arc::new(CropIndex::new());
//! let mut buffs = BuffRegistry::new(Box::new(MemoryStore::new()), Arc::clone(&clock));
//!
//! // Plant ten seedlings inside claim 7 and track them.
//! let mut field = Field { cells: HashMap::new() };
//! for x in 0..10 {
//!     let pos = GridPosition::new(WorldId(0), x, 64, 0);
//!     field.cells.insert(pos, GrowableCell::new(0, 7));
//!     index.add_position(ClaimId(7), pos);
//! }
//!
//! // Activate a tier-1 buff that grows every visited crop.
//! let params = BuffParams::builder()
//!     .tier(Tier(1))
//!     .label("Basic")
//!     .multiplier(1.5)
//!     .duration_secs(600)
//!     .interval_secs(30)
//!     .growth_chance(1.0)
//!     .growth_amount(1)
//!     .build()
//!     .unwrap();
//! let outcome = buffs.activate(ClaimId(7), &params);
//! assert_eq!(outcome, Activation::Applied { upgraded_from: None });
//! assert_eq!(buffs.multiplier(ClaimId(7)), 1.5);
//!
//! // Run the scheduler: at most four positions mutate per cadence.
//! let config = SchedulerConfig {
//!     max_per_tick: 4,
//!     ..Default::default()
//! };
//! let mut scheduler = GrowthScheduler::new(config, Arc::clone(&index), clock).unwrap();
//! scheduler.start(1);
//! for _ in 0..3 {
//!     let metrics = scheduler.tick(&mut buffs, &mut field).unwrap();
//!     assert!(metrics.drained <= 4);
//! }
//!
//! // Three cadences at cap 4 covered all ten seedlings exactly once.
//! let grown = field.cells.values().filter(|c| c.stage == 1).count();
//! assert_eq!(grown, 10);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `croft-core` | IDs, positions, records, collaborator traits |
//! | [`index`] | `croft-index` | Tracked position sets, claim bounds, bulk scan |
//! | [`buff`] | `croft-buff` | Buff registry, activation params, durable stores |
//! | [`engine`] | `croft-engine` | The amortized growth scheduler |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`croft-core`).
pub use croft_core as types;

/// Tracked position sets and claim geometry (`croft-index`).
pub use croft_index as index;

/// Buff registry, activation parameters, and stores (`croft-buff`).
pub use croft_buff as buff;

/// The amortized growth scheduler (`croft-engine`).
pub use croft_engine as engine;

/// The high-traffic names, importable in one line.
pub mod prelude {
    pub use croft_buff::{Activation, BuffParams, BuffRegistry, JsonFileStore, MemoryStore};
    pub use croft_core::{
        BuffRecord, BuffStore, ClaimId, Clock, GridPosition, GrowableCell, GrowableWorld,
        StoreError, SystemClock, Tier, WorldId,
    };
    pub use croft_engine::{CadenceMetrics, GrowthScheduler, SchedulerConfig};
    pub use croft_index::{ClaimBounds, ClaimResolver, CropIndex, ScanBand};
}
