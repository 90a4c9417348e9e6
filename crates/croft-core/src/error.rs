//! Error types for the Croft workspace.

use std::error::Error;
use std::fmt;

/// Errors from the durable buff store.
///
/// Store failures are never fatal to the engine: the in-memory registry
/// stays authoritative and the host decides whether to log, retry, or
/// alert. See `BuffRegistry::take_store_error` in `croft-buff`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The underlying medium failed (file I/O, connection, ...).
    Io {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// Stored data could not be decoded.
    Corrupt {
        /// What failed to parse.
        reason: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { reason } => write!(f, "store i/o failed: {reason}"),
            Self::Corrupt { reason } => write!(f, "store data corrupt: {reason}"),
        }
    }
}

impl Error for StoreError {}
