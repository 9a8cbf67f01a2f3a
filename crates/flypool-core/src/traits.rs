//! Typed field access over a single record.
//!
//! Consumers decide what lives at which byte offset of a record (for
//! example "the int at offset 4 is the first outgoing edge"). These traits
//! are the whole contract between that layout and the arena: every offset
//! is relative to the start of the record, and reading or writing past the
//! record's width is a programming error that panics.

/// Read access to the fields of one record.
pub trait ElementRead {
    /// Width of the record in bytes.
    fn bytes_per_element(&self) -> usize;

    /// Read a byte.
    fn get_byte(&self, offset: usize) -> u8;

    /// Read a boolean stored as one byte (non-zero is `true`).
    fn get_bool(&self, offset: usize) -> bool {
        self.get_byte(offset) != 0
    }

    /// Read a 32-bit signed integer.
    fn get_int(&self, offset: usize) -> i32;

    /// Read an element index stored as a 32-bit integer.
    ///
    /// Negative values (conventionally [`NO_INDEX`](crate::layout::NO_INDEX))
    /// read as `None`.
    fn get_index(&self, offset: usize) -> Option<usize> {
        usize::try_from(self.get_int(offset)).ok()
    }

    /// Read a 64-bit signed integer.
    fn get_long(&self, offset: usize) -> i64;

    /// Read a 32-bit float.
    fn get_float(&self, offset: usize) -> f32;

    /// Read a 64-bit float.
    fn get_double(&self, offset: usize) -> f64;
}

/// Write access to the fields of one record.
pub trait ElementWrite: ElementRead {
    /// Write a byte.
    fn put_byte(&mut self, offset: usize, value: u8);

    /// Write a boolean as one byte.
    fn put_bool(&mut self, offset: usize, value: bool) {
        self.put_byte(offset, u8::from(value));
    }

    /// Write a 32-bit signed integer.
    fn put_int(&mut self, offset: usize, value: i32);

    /// Write an element index as a 32-bit integer, `None` as
    /// [`NO_INDEX`](crate::layout::NO_INDEX).
    ///
    /// # Panics
    ///
    /// Panics if the index does not fit in an `i32`.
    fn put_index(&mut self, offset: usize, index: Option<usize>) {
        let raw = match index {
            Some(i) => i32::try_from(i).unwrap_or_else(|_| panic!("index {i} exceeds i32::MAX")),
            None => crate::layout::NO_INDEX,
        };
        self.put_int(offset, raw);
    }

    /// Write a 64-bit signed integer.
    fn put_long(&mut self, offset: usize, value: i64);

    /// Write a 32-bit float.
    fn put_float(&mut self, offset: usize, value: f32);

    /// Write a 64-bit float.
    fn put_double(&mut self, offset: usize, value: f64);
}
