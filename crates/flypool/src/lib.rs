//! Flypool: growable pools of fixed-width records with flyweight field access.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the flypool sub-crates. For most users, adding `flypool` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use flypool::prelude::*;
//!
//! // Records of two ints: a value at offset 0 and a link at offset 4.
//! let mut pool = PoolConfig::new(8).with_initial_capacity(2).build().unwrap();
//! let mut access = pool.create_access();
//!
//! let head = pool.create().unwrap();
//! let tail = pool.create().unwrap();
//! pool.rebind_access(&mut access, head);
//! pool.element_mut(&access).put_int(0, 10);
//! pool.element_mut(&access).put_index(4, Some(tail));
//! pool.rebind_access(&mut access, tail);
//! pool.element_mut(&access).put_int(0, 20);
//! pool.element_mut(&access).put_index(4, None);
//!
//! // Growth keeps indices and accesses valid.
//! let third = pool.create().unwrap();
//! assert_eq!(third, 2);
//! assert_eq!(pool.capacity(), 4);
//!
//! let mut sum = 0;
//! let mut next = Some(head);
//! while let Some(index) = next {
//!     pool.rebind_access(&mut access, index);
//!     let rec = pool.element(&access);
//!     sum += rec.get_int(0);
//!     next = rec.get_index(4);
//! }
//! assert_eq!(sum, 30);
//!
//! pool.free(head);
//! assert_eq!(pool.create().unwrap(), head);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `flypool-arena` | Arrays, accesses, pools, factories, iteration |
//! | [`types`] | `flypool-core` | Errors, record layout constants, field access traits |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Record arrays, pools, and accesses (`flypool-arena`).
///
/// [`arena::SingleArrayPool`] is the pool most users want; build one from
/// an [`arena::PoolConfig`] or a factory.
pub use flypool_arena as arena;

/// Errors, layout constants, and field traits (`flypool-core`).
///
/// Contains [`types::PoolError`], [`types::Backend`], and the
/// [`types::ElementRead`] / [`types::ElementWrite`] traits.
pub use flypool_core as types;

/// Common imports for typical flypool usage.
///
/// ```rust
/// use flypool::prelude::*;
/// ```
pub mod prelude {
    // Pools and configuration
    pub use flypool_arena::{MemPool, PoolConfig, PoolCursor, SingleArrayPool};

    // Arrays and factories
    pub use flypool_arena::{
        ArrayFactory, ElementArray, MappedArray, MappedArrayFactory, PoolFactory,
        SingleArrayPoolFactory,
    };

    // Record access
    pub use flypool_arena::{Access, ElementMut, ElementRef};

    // Core types and traits
    pub use flypool_core::{Backend, ElementRead, ElementWrite, PoolError};
}
