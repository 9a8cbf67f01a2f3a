//! Record layout constants and backing storage strategies.
//!
//! Every pool stores fixed-width records. The first eight bytes of a freed
//! record are borrowed by the pool's intrusive free list:
//!
//! ```text
//! offset 0..4   FREE_MARKER (-2)
//! offset 4..8   next free index, or NO_INDEX (-1) at the tail
//! ```
//!
//! which is why record widths are clamped to [`MIN_BYTES_PER_ELEMENT`].

/// Smallest record width a pool will use, in bytes.
pub const MIN_BYTES_PER_ELEMENT: usize = 8;

/// Value written at [`FREE_MARKER_OFFSET`] of a freed record.
pub const FREE_MARKER: i32 = -2;

/// Index value meaning "no element" (free list tail, unset links).
pub const NO_INDEX: i32 = -1;

/// Byte offset of the free marker within a freed record.
pub const FREE_MARKER_OFFSET: usize = 0;

/// Byte offset of the next-free link within a freed record.
pub const NEXT_FREE_OFFSET: usize = 4;

/// Longest primitive array a backend may allocate, in array elements.
///
/// Mirrors the 32-bit element count limit of the platforms this layout
/// was designed for; it bounds bytes for [`Backend::Bytes`] and doubles for
/// [`Backend::Doubles`].
pub const MAX_ARRAY_LEN: u32 = i32::MAX as u32;

/// Number of whole `f64`s needed to cover `bytes` bytes.
pub fn doubles_for_bytes(bytes: usize) -> usize {
    bytes.div_ceil(std::mem::size_of::<f64>())
}

/// Clamp a requested record width to [`MIN_BYTES_PER_ELEMENT`].
pub fn clamp_bytes_per_element(bytes_per_element: usize) -> usize {
    bytes_per_element.max(MIN_BYTES_PER_ELEMENT)
}

/// Primitive storage a backing array is built on.
///
/// Both strategies behave identically through the element accessors; they
/// differ only in addressing arithmetic and in how many records fit under
/// the array length limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// One `u8` per byte. Records are packed back to back.
    #[default]
    Bytes,
    /// One `f64` per eight bytes. Records are rounded up to whole doubles,
    /// which multiplies the addressable byte range by eight.
    Doubles,
}

impl Backend {
    /// Size in bytes of one primitive array element.
    pub fn unit_bytes(self) -> usize {
        match self {
            Self::Bytes => 1,
            Self::Doubles => std::mem::size_of::<f64>(),
        }
    }

    /// Number of primitive array elements one record occupies.
    pub fn units_per_element(self, bytes_per_element: usize) -> usize {
        match self {
            Self::Bytes => bytes_per_element,
            Self::Doubles => doubles_for_bytes(bytes_per_element),
        }
    }

    /// Distance in bytes between the bases of two consecutive records.
    pub fn stride(self, bytes_per_element: usize) -> usize {
        self.units_per_element(bytes_per_element) * self.unit_bytes()
    }

    /// Largest record count addressable within `max_array_len` array elements.
    pub fn max_elements(self, bytes_per_element: usize, max_array_len: u32) -> usize {
        let units = self.units_per_element(bytes_per_element).max(1);
        max_array_len as usize / units
    }
}
