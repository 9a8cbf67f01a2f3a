//! The record pool abstraction.
//!
//! A [`MemPool`] hands out stable integer indices for fixed-width records.
//! Each index is either ALLOCATED (returned by [`MemPool::create`] and not
//! yet freed) or FREE. Freed indices are reused last-in first-out before the
//! pool grows.

use flypool_core::PoolError;

use crate::access::{Access, ElementMut, ElementRef};
use crate::array::ElementArray;
use crate::iter::{Indices, PoolCursor};

/// A growable pool of fixed-width records addressed by index.
///
/// Pools are single-threaded. Field access goes through an [`Access`]
/// created by the pool, rebound to an index, and opened with
/// [`element`](MemPool::element) or [`element_mut`](MemPool::element_mut)
/// for the duration of the read or write.
pub trait MemPool {
    /// Backing array type.
    type Array: ElementArray;

    /// Allocate a record and return its index.
    ///
    /// Reuses the most recently freed index if there is one, otherwise
    /// appends past the high-water mark, growing the backing array when
    /// it is full. A reused record still holds whatever bytes it had when
    /// it was freed; appended records start zeroed, even when they reuse
    /// storage left behind by [`clear`](MemPool::clear).
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CapacityExceeded`] when no free index exists and
    /// the backing array cannot grow. The pool is unchanged in that case.
    fn create(&mut self) -> Result<usize, PoolError>;

    /// Release the record at `index`.
    ///
    /// Freeing an index that is already free, or that was never allocated,
    /// does nothing.
    fn free(&mut self, index: usize);

    /// Forget every record without releasing backing memory.
    fn clear(&mut self);

    /// Number of allocated records.
    fn len(&self) -> usize;

    /// Whether no record is allocated.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of records the backing storage currently holds.
    fn capacity(&self) -> usize;

    /// High-water mark: allocated records plus freed-but-unused slots.
    fn allocated_len(&self) -> usize;

    /// Whether `index` refers to an allocated record.
    fn is_allocated(&self, index: usize) -> bool;

    /// Width of one record in bytes.
    fn bytes_per_element(&self) -> usize;

    /// Create an access bound to index 0.
    fn create_access(&self) -> Access;

    /// Bind `access` to the record at `index`.
    fn rebind_access(&self, access: &mut Access, index: usize);

    /// Exchange the bytes of two allocated records.
    fn swap(&mut self, a: usize, b: usize);

    /// Open a read view of the record `access` is bound to.
    fn element(&self, access: &Access) -> ElementRef<'_>;

    /// Open a write view of the record `access` is bound to.
    fn element_mut(&mut self, access: &Access) -> ElementMut<'_>;

    /// The backing array, for collaborators that copy raw record bytes.
    fn data_array(&self) -> &Self::Array;

    /// Iterate allocated indices in ascending order.
    fn iter(&self) -> Indices<'_, Self> {
        Indices::new(self)
    }

    /// A restartable index cursor that can also free what it visits.
    fn cursor(&self) -> PoolCursor {
        PoolCursor::new()
    }
}
