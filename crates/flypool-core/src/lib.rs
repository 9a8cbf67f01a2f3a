//! Core types and traits for the flypool record arena.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the arena and its consumers: the error type,
//! the record layout constants used by the intrusive free list, the
//! backing storage strategies, and the typed field access traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layout;
pub mod traits;

pub use error::PoolError;
pub use layout::{doubles_for_bytes, Backend};
pub use traits::{ElementRead, ElementWrite};
