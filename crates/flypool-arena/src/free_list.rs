//! Intrusive free list with an out-of-band tombstone set.
//!
//! Freed records are chained through their own storage: the marker goes at
//! offset 0 and the next free index at offset 4, so the list costs no memory
//! beyond the head. Whether a slot is free is answered by a
//! [`RoaringBitmap`] of freed indices instead of by the in-band marker,
//! so a live record whose first field happens to equal the marker is never
//! mistaken for a free one.

use flypool_core::layout::{FREE_MARKER, FREE_MARKER_OFFSET, NEXT_FREE_OFFSET};
use flypool_core::{ElementRead, ElementWrite};
use roaring::RoaringBitmap;

use crate::access::Access;
use crate::array::ElementArray;

/// Free slot bookkeeping for a single-array pool.
#[derive(Clone, Debug, Default)]
pub(crate) struct FreeList {
    /// Most recently freed index, popped first.
    head: Option<usize>,
    /// Every index currently on the list.
    tombstones: RoaringBitmap,
}

/// Indices are bounded by the array length limit, which fits in a `u32`.
fn key(index: usize) -> u32 {
    debug_assert!(index <= u32::MAX as usize);
    index as u32
}

impl FreeList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn head(&self) -> Option<usize> {
        self.head
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.tombstones.contains(key(index))
    }

    pub(crate) fn len(&self) -> usize {
        self.tombstones.len() as usize
    }

    /// Take the most recently freed index, if any.
    pub(crate) fn pop<A: ElementArray>(&mut self, array: &A, access: &mut Access) -> Option<usize> {
        let index = self.head?;
        array.rebind_access(access, index);
        self.head = array.element(access).get_index(NEXT_FREE_OFFSET);
        self.tombstones.remove(key(index));
        Some(index)
    }

    /// Thread `index` onto the list. Returns `false` if it was already free.
    pub(crate) fn push<A: ElementArray>(
        &mut self,
        array: &mut A,
        access: &mut Access,
        index: usize,
    ) -> bool {
        if self.contains(index) {
            return false;
        }
        // Write the link before touching the bookkeeping, so a record outside
        // the array panics with the list unchanged.
        array.rebind_access(access, index);
        let mut record = array.element_mut(access);
        record.put_int(FREE_MARKER_OFFSET, FREE_MARKER);
        record.put_index(NEXT_FREE_OFFSET, self.head);
        self.tombstones.insert(key(index));
        self.head = Some(index);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.head = None;
        self.tombstones.clear();
    }
}
