//! Pool backed by exactly one growable array.
//!
//! [`SingleArrayPool`] is the production [`MemPool`]. Growth doubles the
//! backing array, clamped to the array's `max_len`; every existing record
//! is copied, and indices stay valid because accesses address records by
//! index rather than by pointer.

use flypool_core::layout::{clamp_bytes_per_element, MIN_BYTES_PER_ELEMENT};
use flypool_core::PoolError;

use crate::access::{Access, ElementMut, ElementRef};
use crate::array::{ElementArray, MappedArray};
use crate::factory::ArrayFactory;
use crate::free_list::FreeList;
use crate::pool::MemPool;

/// A [`MemPool`] over a single backing array.
#[derive(Clone, Debug)]
pub struct SingleArrayPool<A = MappedArray> {
    array: A,
    /// Internal access used for free list bookkeeping.
    access: Access,
    /// Allocated records.
    len: usize,
    /// High-water mark; indices in `len..allocated_len` are on the free list.
    allocated_len: usize,
    free_list: FreeList,
}

impl<A: ElementArray> SingleArrayPool<A> {
    /// Create a pool with room for `capacity` records of
    /// `bytes_per_element` bytes, using `factory` to build the array.
    ///
    /// `bytes_per_element` is raised to 8 if smaller, so freed records can
    /// hold the free list link.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CapacityExceeded`] if the array factory cannot
    /// address `capacity` records.
    pub fn with_factory<F>(
        factory: &F,
        capacity: usize,
        bytes_per_element: usize,
    ) -> Result<Self, PoolError>
    where
        F: ArrayFactory<Array = A> + ?Sized,
    {
        let array = factory.create_array(capacity, clamp_bytes_per_element(bytes_per_element))?;
        Ok(Self::from_array(array))
    }

    /// Wrap an existing array. Its current length becomes the capacity and
    /// its contents are treated as unallocated; records are zeroed as they
    /// are appended.
    ///
    /// # Panics
    ///
    /// Panics if the array's records are narrower than 8 bytes.
    pub fn from_array(array: A) -> Self {
        assert!(
            array.bytes_per_element() >= MIN_BYTES_PER_ELEMENT,
            "records must be at least {MIN_BYTES_PER_ELEMENT} bytes wide, got {}",
            array.bytes_per_element()
        );
        let access = array.create_access();
        Self {
            array,
            access,
            len: 0,
            allocated_len: 0,
            free_list: FreeList::new(),
        }
    }

    /// Largest number of records the pool can ever hold.
    pub fn max_len(&self) -> usize {
        self.array.max_len()
    }

    /// Overwrite the allocated record at `index` with `bytes`, typically a
    /// copy taken earlier from [`ElementRef::as_bytes`].
    ///
    /// Returns `false` and leaves the pool untouched if `index` is not
    /// allocated.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len()` differs from the record width.
    pub fn restore(&mut self, index: usize, bytes: &[u8]) -> bool {
        assert_eq!(
            bytes.len(),
            self.array.bytes_per_element(),
            "restored bytes must span exactly one record"
        );
        if !self.is_allocated(index) {
            return false;
        }
        self.array.rebind_access(&mut self.access, index);
        self.array.element_mut(&self.access).copy_from_slice(bytes);
        true
    }

    /// Head of the free list: the index the next `create` will reuse.
    pub fn first_free(&self) -> Option<usize> {
        self.free_list.head()
    }

    /// Number of freed slots waiting to be reused.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.array.memory_bytes()
    }

    /// Consume the pool, returning the backing array.
    pub fn into_array(self) -> A {
        self.array
    }

    /// Extend the high-water mark by one, growing the array if it is full.
    fn append(&mut self) -> Result<usize, PoolError> {
        let index = self.allocated_len;
        let capacity = self.array.len();
        if index >= capacity {
            let max = self.array.max_len();
            let grown = capacity.saturating_mul(2).max(1).min(max);
            if grown <= index {
                tracing::warn!(
                    requested = index + 1,
                    max,
                    bytes_per_element = self.array.bytes_per_element(),
                    "pool capacity exceeded"
                );
                return Err(PoolError::CapacityExceeded {
                    requested: index + 1,
                    max,
                });
            }
            tracing::debug!(
                from = capacity,
                to = grown,
                bytes_per_element = self.array.bytes_per_element(),
                backend = ?self.array.backend(),
                "growing pool backing array"
            );
            self.array.resize(grown)?;
        } else {
            // Slots below capacity may still hold bytes from before a clear.
            self.array.rebind_access(&mut self.access, index);
            self.array.element_mut(&self.access).clear();
        }
        self.allocated_len = index + 1;
        Ok(index)
    }
}

impl<A: ElementArray> MemPool for SingleArrayPool<A> {
    type Array = A;

    fn create(&mut self) -> Result<usize, PoolError> {
        let index = match self.free_list.pop(&self.array, &mut self.access) {
            Some(index) => index,
            None => self.append()?,
        };
        self.len += 1;
        Ok(index)
    }

    fn free(&mut self, index: usize) {
        if index >= self.allocated_len {
            return;
        }
        if self.free_list.push(&mut self.array, &mut self.access, index) {
            self.len -= 1;
        }
    }

    fn clear(&mut self) {
        tracing::trace!(
            len = self.len,
            allocated_len = self.allocated_len,
            "clearing pool"
        );
        self.len = 0;
        self.allocated_len = 0;
        self.free_list.clear();
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.array.len()
    }

    fn allocated_len(&self) -> usize {
        self.allocated_len
    }

    fn is_allocated(&self, index: usize) -> bool {
        index < self.allocated_len && !self.free_list.contains(index)
    }

    fn bytes_per_element(&self) -> usize {
        self.array.bytes_per_element()
    }

    fn create_access(&self) -> Access {
        self.array.create_access()
    }

    fn rebind_access(&self, access: &mut Access, index: usize) {
        self.array.rebind_access(access, index);
    }

    /// Swapping a free slot would detach it from the free list, so both
    /// indices must be allocated.
    fn swap(&mut self, a: usize, b: usize) {
        debug_assert!(
            self.is_allocated(a) && self.is_allocated(b),
            "swap of free slot ({a}, {b})"
        );
        self.array.swap_element(a, b);
    }

    fn element(&self, access: &Access) -> ElementRef<'_> {
        self.array.element(access)
    }

    fn element_mut(&mut self, access: &Access) -> ElementMut<'_> {
        self.array.element_mut(access)
    }

    fn data_array(&self) -> &A {
        &self.array
    }
}
