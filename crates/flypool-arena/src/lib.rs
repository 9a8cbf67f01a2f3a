//! Growable pools of fixed-width records with flyweight access.
//!
//! A pool stores many small records of one width in a single primitive
//! array instead of as individual heap objects. Records are named by a
//! stable integer index; reading or writing a field means binding a
//! reusable [`Access`] to that index and opening a short-lived view.
//!
//! # Architecture
//!
//! ```text
//! PoolConfig ──build──▶ SingleArrayPool<A> (impl MemPool)
//!                       ├── A: ElementArray
//!                       │   ├── ByteArray   (Vec<u8>, packed records)
//!                       │   ├── DoubleArray (Vec<f64>, records rounded to 8 bytes)
//!                       │   └── MappedArray (either, chosen at runtime)
//!                       ├── FreeList (in-band LIFO chain + RoaringBitmap tombstones)
//!                       └── Access ──▶ ElementRef / ElementMut (typed field views)
//! ```
//!
//! Factories ([`ArrayFactory`], [`PoolFactory`]) capture construction
//! choices so callers can stay generic over the backing strategy.
//!
//! # Growth
//!
//! When the high-water mark reaches capacity the backing array doubles,
//! clamped to the largest record count its strategy can address. Indices
//! and accesses stay valid across growth; views do not outlive it because
//! they borrow the pool.
//!
//! # Threading
//!
//! Pools are single-threaded. They are `Send` and can be moved between
//! threads, but concurrent use needs external synchronization.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod access;
pub mod array;
pub mod codec;
pub mod config;
pub mod factory;
mod free_list;
pub mod iter;
pub mod pool;
pub mod single;

// Public re-exports for the primary API surface.
pub use access::{Access, ElementMut, ElementRef};
pub use array::{ByteArray, DoubleArray, ElementArray, MappedArray};
pub use config::PoolConfig;
pub use factory::{
    ArrayFactory, ByteArrayFactory, DoubleArrayFactory, MappedArrayFactory, PoolFactory,
    SingleArrayPoolFactory,
};
pub use flypool_core::{Backend, ElementRead, ElementWrite, PoolError};
pub use iter::{Indices, PoolCursor};
pub use pool::MemPool;
pub use single::SingleArrayPool;
