//! Pool error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during pool and backing array operations.
///
/// Only conditions a caller can meaningfully react to are modelled here.
/// Misuse such as reading past the end of a record or swapping records
/// across two different storage backends panics instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// The requested element count cannot be addressed by the backend.
    ///
    /// Raised by array construction, `resize`, and pool growth. Never
    /// retried: the caller must pick a wider backend or fail the
    /// higher-level operation.
    CapacityExceeded {
        /// Number of elements requested.
        requested: usize,
        /// Largest element count the backend can address.
        max: usize,
    },
    /// A pool configuration was rejected at construction.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "pool capacity exceeded: requested {requested} elements, backend addresses at most {max}"
                )
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid pool configuration: {reason}")
            }
        }
    }
}

impl Error for PoolError {}
