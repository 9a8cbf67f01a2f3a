//! Index iteration over allocated records.
//!
//! Both iterators yield indices, not records: bind an [`Access`] to each
//! index to read its fields. Free slots are skipped. The scan is bounded
//! by the pool's `allocated_len` at the time of each step, so records
//! appended mid-iteration may or may not be visited.
//!
//! [`Access`]: crate::access::Access

use crate::pool::MemPool;

/// Borrowing iterator over allocated indices in ascending order.
///
/// Returned by [`MemPool::iter`].
#[derive(Debug)]
pub struct Indices<'a, P: ?Sized> {
    pool: &'a P,
    next: usize,
}

impl<'a, P: MemPool + ?Sized> Indices<'a, P> {
    pub(crate) fn new(pool: &'a P) -> Self {
        Self { pool, next: 0 }
    }
}

impl<P: MemPool + ?Sized> Iterator for Indices<'_, P> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let end = self.pool.allocated_len();
        while self.next < end {
            let index = self.next;
            self.next += 1;
            if self.pool.is_allocated(index) {
                return Some(index);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pool.allocated_len().saturating_sub(self.next);
        (0, Some(remaining))
    }
}

/// Restartable index cursor that does not borrow the pool.
///
/// Because the cursor only remembers a position, the pool can be mutated
/// between steps; in particular [`remove`](PoolCursor::remove) frees the
/// index returned by the last [`next`](PoolCursor::next).
///
/// ```text
/// let mut cursor = pool.cursor();
/// while let Some(index) = cursor.next(&pool) {
///     if expired(&pool, index) {
///         cursor.remove(&mut pool);
///     }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolCursor {
    next: usize,
    last: Option<usize>,
}

impl PoolCursor {
    /// A cursor positioned before index 0.
    pub fn new() -> Self {
        Self::default()
    }

    fn peek<P: MemPool + ?Sized>(&self, pool: &P) -> Option<usize> {
        (self.next..pool.allocated_len()).find(|&index| pool.is_allocated(index))
    }

    /// Whether another allocated index lies ahead of the cursor.
    pub fn has_next<P: MemPool + ?Sized>(&self, pool: &P) -> bool {
        self.peek(pool).is_some()
    }

    /// Advance to the next allocated index.
    pub fn next<P: MemPool + ?Sized>(&mut self, pool: &P) -> Option<usize> {
        let index = self.peek(pool)?;
        self.next = index + 1;
        self.last = Some(index);
        Some(index)
    }

    /// Free the index most recently returned by [`next`](Self::next).
    ///
    /// Returns the freed index, or `None` if nothing was returned since the
    /// last `remove` or [`reset`](Self::reset).
    pub fn remove<P: MemPool + ?Sized>(&mut self, pool: &mut P) -> Option<usize> {
        let index = self.last.take()?;
        pool.free(index);
        Some(index)
    }

    /// Restart the scan from index 0.
    pub fn reset(&mut self) {
        self.next = 0;
        self.last = None;
    }
}
