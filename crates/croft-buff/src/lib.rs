//! Per-claim growth buff registry.
//!
//! [`BuffRegistry`] owns the activation, upgrade, and expiry rules for
//! growth buffs: at most one [`BuffRecord`](croft_core::BuffRecord) per
//! claim, replaced only by a strictly higher tier, lazily evicted once
//! expired. Every mutation is mirrored to a durable
//! [`BuffStore`](croft_core::BuffStore); two store backends ship here
//! ([`MemoryStore`] and [`JsonFileStore`]).
//!
//! Activation inputs are built and validated through
//! [`BuffParams::builder`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod params;
pub mod registry;
pub mod store;

pub use params::{BuffParams, BuffParamsBuilder};
pub use registry::{Activation, BuffRegistry};
pub use store::{JsonFileStore, MemoryStore};
