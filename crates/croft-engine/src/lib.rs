//! Amortized two-phase growth scheduler.
//!
//! [`GrowthScheduler`] is the orchestrator of the crop growth engine
//! and the only writer of world growth-stage data. On a fixed cadence
//! it pulls the tracked positions of buff-eligible claims into a
//! bounded work queue (enqueue phase) and mutates at most
//! [`SchedulerConfig::max_per_tick`] positions per cadence invocation
//! (drain phase), so per-tick cost stays bounded no matter how many
//! positions are tracked world-wide.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod queue;
pub mod scheduler;

pub use config::{ConfigError, SchedulerConfig};
pub use metrics::CadenceMetrics;
pub use queue::{GrowthQueue, WorkEntry};
pub use scheduler::GrowthScheduler;
