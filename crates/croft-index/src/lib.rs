//! Sparse per-claim spatial index of tracked growable positions.
//!
//! [`CropIndex`] is the answer to "which cells inside this claim still
//! need growth processing?" without scanning the world. Placement and
//! removal events feed it incrementally; [`CropIndex::bulk_register`]
//! seeds it from a bounded region scan on buff activation; the scheduler
//! reads snapshots of it each enqueue phase and prunes it as crops
//! mature or vanish.
//!
//! The index knows nothing about buffs or scheduling. It is a
//! concurrent keyed set of [`GridPosition`](croft_core::GridPosition)s
//! and the claim-bounds vocabulary ([`ClaimBounds`], [`ScanBand`],
//! [`ClaimResolver`]) needed to perform the activation-time scan.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod index;
pub mod region;

pub use index::CropIndex;
pub use region::{ClaimBounds, ClaimResolver, ScanBand};
