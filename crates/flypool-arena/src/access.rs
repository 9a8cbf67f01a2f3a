//! Rebindable record accesses and the short-lived views they open.
//!
//! An [`Access`] is the flyweight: a tiny cursor remembering which record it
//! points at. It holds no borrow of the storage, so one access can be
//! reused for millions of records and survives backing array growth.
//! Field reads and writes go through an [`ElementRef`] or [`ElementMut`],
//! opened from an access plus a borrow of the array or pool for exactly as
//! long as the fields are being touched.
//!
//! ```text
//! pool.rebind_access(&mut access, 17);   // O(1), no allocation
//! pool.element_mut(&access).put_int(4, next_edge);
//! pool.create()?;                        // may grow; `access` stays valid
//! pool.element(&access).get_int(4);
//! ```

use flypool_core::{ElementRead, ElementWrite};

use crate::codec;

/// A rebindable cursor onto one record of a backing array.
///
/// Created by `create_access` on an array or pool, initially bound to
/// index 0. Rebinding only updates two integers. Two accesses are needed to
/// look at two records at the same time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Access {
    index: usize,
    base: usize,
}

impl Access {
    pub(crate) fn new() -> Self {
        Self { index: 0, base: 0 }
    }

    /// Point this access at `index`, whose bytes start at `base`.
    pub(crate) fn bind(&mut self, index: usize, base: usize) {
        self.index = index;
        self.base = base;
    }

    /// Index of the record this access is bound to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of the bound record within the backing storage.
    pub fn base(&self) -> usize {
        self.base
    }
}

/// Read-only view of one record.
///
/// The view covers exactly `bytes_per_element` bytes; field offsets are
/// relative to the start of the record and checked against its width.
#[derive(Clone, Copy, Debug)]
pub struct ElementRef<'a> {
    record: &'a [u8],
}

impl<'a> ElementRef<'a> {
    /// Open a view of `width` bytes at `base` within `storage`.
    ///
    /// # Panics
    ///
    /// Panics if the record lies outside `storage`.
    pub(crate) fn new(storage: &'a [u8], base: usize, width: usize) -> Self {
        Self {
            record: &storage[base..base + width],
        }
    }

    /// The raw bytes of the record.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.record
    }
}

impl ElementRead for ElementRef<'_> {
    fn bytes_per_element(&self) -> usize {
        self.record.len()
    }

    fn get_byte(&self, offset: usize) -> u8 {
        codec::get_byte(self.record, offset)
    }

    fn get_bool(&self, offset: usize) -> bool {
        codec::get_bool(self.record, offset)
    }

    fn get_int(&self, offset: usize) -> i32 {
        codec::get_int(self.record, offset)
    }

    fn get_long(&self, offset: usize) -> i64 {
        codec::get_long(self.record, offset)
    }

    fn get_float(&self, offset: usize) -> f32 {
        codec::get_float(self.record, offset)
    }

    fn get_double(&self, offset: usize) -> f64 {
        codec::get_double(self.record, offset)
    }
}

/// Mutable view of one record.
#[derive(Debug)]
pub struct ElementMut<'a> {
    record: &'a mut [u8],
}

impl<'a> ElementMut<'a> {
    /// Open a mutable view of `width` bytes at `base` within `storage`.
    ///
    /// # Panics
    ///
    /// Panics if the record lies outside `storage`.
    pub(crate) fn new(storage: &'a mut [u8], base: usize, width: usize) -> Self {
        Self {
            record: &mut storage[base..base + width],
        }
    }

    /// The raw bytes of the record.
    pub fn as_bytes(&self) -> &[u8] {
        self.record
    }

    /// Overwrite the whole record with `bytes`.
    ///
    /// Used to restore a record previously captured with `as_bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len()` differs from the record width.
    pub fn copy_from_slice(&mut self, bytes: &[u8]) {
        self.record.copy_from_slice(bytes);
    }

    /// Zero every byte of the record.
    pub fn clear(&mut self) {
        self.record.fill(0);
    }
}

impl ElementRead for ElementMut<'_> {
    fn bytes_per_element(&self) -> usize {
        self.record.len()
    }

    fn get_byte(&self, offset: usize) -> u8 {
        codec::get_byte(self.record, offset)
    }

    fn get_bool(&self, offset: usize) -> bool {
        codec::get_bool(self.record, offset)
    }

    fn get_int(&self, offset: usize) -> i32 {
        codec::get_int(self.record, offset)
    }

    fn get_long(&self, offset: usize) -> i64 {
        codec::get_long(self.record, offset)
    }

    fn get_float(&self, offset: usize) -> f32 {
        codec::get_float(self.record, offset)
    }

    fn get_double(&self, offset: usize) -> f64 {
        codec::get_double(self.record, offset)
    }
}

impl ElementWrite for ElementMut<'_> {
    fn put_byte(&mut self, offset: usize, value: u8) {
        codec::put_byte(self.record, offset, value);
    }

    fn put_bool(&mut self, offset: usize, value: bool) {
        codec::put_bool(self.record, offset, value);
    }

    fn put_int(&mut self, offset: usize, value: i32) {
        codec::put_int(self.record, offset, value);
    }

    fn put_long(&mut self, offset: usize, value: i64) {
        codec::put_long(self.record, offset, value);
    }

    fn put_float(&mut self, offset: usize, value: f32) {
        codec::put_float(self.record, offset, value);
    }

    fn put_double(&mut self, offset: usize, value: f64) {
        codec::put_double(self.record, offset, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flypool_core::layout::NO_INDEX;

    #[test]
    fn fresh_access_targets_index_zero() {
        let access = Access::new();
        assert_eq!(access.index(), 0);
        assert_eq!(access.base(), 0);
    }

    #[test]
    fn bind_moves_access() {
        let mut access = Access::new();
        access.bind(3, 48);
        assert_eq!(access.index(), 3);
        assert_eq!(access.base(), 48);
    }

    #[test]
    fn view_offsets_are_record_relative() {
        let mut storage = vec![0u8; 32];
        {
            let mut rec = ElementMut::new(&mut storage, 16, 16);
            rec.put_int(0, 11);
            rec.put_double(8, 2.5);
        }
        assert_eq!(codec::get_int(&storage, 16), 11);
        let rec = ElementRef::new(&storage, 16, 16);
        assert_eq!(rec.get_int(0), 11);
        assert_eq!(rec.get_double(8), 2.5);
        assert_eq!(rec.bytes_per_element(), 16);
    }

    #[test]
    fn all_primitive_fields() {
        let mut storage = vec![0u8; 32];
        let mut rec = ElementMut::new(&mut storage, 0, 32);
        rec.put_byte(0, 0xAB);
        rec.put_bool(1, true);
        rec.put_int(2, -5);
        rec.put_long(6, i64::MIN);
        rec.put_float(14, 1.25);
        rec.put_double(18, -3.75);
        rec.put_index(26, Some(9));
        assert_eq!(rec.get_byte(0), 0xAB);
        assert!(rec.get_bool(1));
        assert_eq!(rec.get_int(2), -5);
        assert_eq!(rec.get_long(6), i64::MIN);
        assert_eq!(rec.get_float(14), 1.25);
        assert_eq!(rec.get_double(18), -3.75);
        assert_eq!(rec.get_index(26), Some(9));
    }

    #[test]
    fn none_index_is_stored_as_minus_one() {
        let mut storage = vec![0u8; 8];
        let mut rec = ElementMut::new(&mut storage, 0, 8);
        rec.put_index(4, None);
        assert_eq!(rec.get_int(4), NO_INDEX);
        assert_eq!(rec.get_index(4), None);
    }

    #[test]
    fn raw_bytes_round_trip_between_records() {
        let mut storage = vec![0u8; 16];
        ElementMut::new(&mut storage, 0, 8).put_long(0, 0x0102_0304_0506_0708);
        let snapshot = ElementRef::new(&storage, 0, 8).as_bytes().to_vec();
        ElementMut::new(&mut storage, 8, 8).copy_from_slice(&snapshot);
        assert_eq!(codec::get_long(&storage, 8), 0x0102_0304_0506_0708);

        ElementMut::new(&mut storage, 0, 8).clear();
        assert!(storage[..8].iter().all(|&b| b == 0));
    }

    #[test]
    #[should_panic]
    fn field_past_record_width_panics() {
        let storage = vec![0u8; 32];
        let rec = ElementRef::new(&storage, 0, 8);
        // The backing storage is large enough; the record is not.
        rec.get_int(6);
    }

    #[test]
    #[should_panic]
    fn record_outside_storage_panics() {
        let storage = vec![0u8; 8];
        ElementRef::new(&storage, 8, 8);
    }
}
