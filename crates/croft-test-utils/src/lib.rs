//! Test utilities and mock collaborators for Croft development.
//!
//! Provides mock implementations of the collaborator traits
//! ([`GrowableWorld`](croft_core::GrowableWorld),
//! [`ClaimResolver`](croft_index::ClaimResolver),
//! [`BuffStore`](croft_core::BuffStore), [`Clock`](croft_core::Clock))
//! for constructing deterministic test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod clock;
mod stores;
mod worlds;

pub use clock::ManualClock;
pub use stores::FailingStore;
pub use worlds::{MockClaims, MockWorld};
