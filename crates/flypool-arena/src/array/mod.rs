//! Resizable arrays of fixed-width records.
//!
//! An [`ElementArray`] stores `len()` records back to back in a single
//! primitive buffer. Two strategies exist:
//!
//! - [`ByteArray`]: a `Vec<u8>`; record `i` starts at byte `i * bytes_per_element`.
//! - [`DoubleArray`]: a `Vec<f64>`; each record is rounded up to whole
//!   doubles, so record `i` starts at byte `i * 8 * ceil(bytes_per_element / 8)`.
//!
//! Both are read and written through the same byte-level codec, so the
//! element accessors behave identically. [`MappedArray`] selects one of
//! the two at construction time.

mod bytes;
mod doubles;

pub use bytes::ByteArray;
pub use doubles::DoubleArray;

use flypool_core::{Backend, PoolError};

use crate::access::{Access, ElementMut, ElementRef};

/// A growable homogeneous array of fixed-width records.
pub trait ElementArray {
    /// The primitive storage strategy.
    fn backend(&self) -> Backend;

    /// Number of records the array currently holds.
    fn len(&self) -> usize;

    /// Whether the array holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest record count this array can ever be resized to.
    fn max_len(&self) -> usize;

    /// Width of one record in bytes.
    fn bytes_per_element(&self) -> usize;

    /// Distance in bytes between consecutive record bases.
    fn stride(&self) -> usize {
        self.backend().stride(self.bytes_per_element())
    }

    /// Reallocate to hold exactly `num_elements` records.
    ///
    /// The first `min(len, num_elements)` records keep their bytes; new
    /// records are zeroed.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CapacityExceeded`] if `num_elements` is larger
    /// than [`max_len`](Self::max_len). The array is left unchanged.
    fn resize(&mut self, num_elements: usize) -> Result<(), PoolError>;

    /// Exchange the bytes of records `a` and `b` of this array.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    fn swap_element(&mut self, a: usize, b: usize);

    /// Exchange the bytes of record `a` of this array and record `b` of
    /// `other`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range or the record widths differ.
    fn swap_element_with(&mut self, a: usize, other: &mut Self, b: usize)
    where
        Self: Sized;

    /// The whole backing storage as bytes.
    fn as_bytes(&self) -> &[u8];

    /// The whole backing storage as mutable bytes.
    fn as_bytes_mut(&mut self) -> &mut [u8];

    /// Memory usage of the backing storage in bytes.
    fn memory_bytes(&self) -> usize {
        self.as_bytes().len()
    }

    /// Create an access bound to record 0.
    fn create_access(&self) -> Access {
        Access::new()
    }

    /// Bind `access` to record `index` of this array.
    fn rebind_access(&self, access: &mut Access, index: usize) {
        access.bind(index, index * self.stride());
    }

    /// Open a read view of the record `access` is bound to.
    ///
    /// # Panics
    ///
    /// Panics if the access is bound past the end of the array.
    fn element(&self, access: &Access) -> ElementRef<'_> {
        let width = self.bytes_per_element();
        ElementRef::new(self.as_bytes(), access.base(), width)
    }

    /// Open a write view of the record `access` is bound to.
    ///
    /// # Panics
    ///
    /// Panics if the access is bound past the end of the array.
    fn element_mut(&mut self, access: &Access) -> ElementMut<'_> {
        let width = self.bytes_per_element();
        ElementMut::new(self.as_bytes_mut(), access.base(), width)
    }
}

/// A backing array whose strategy is chosen at runtime.
#[derive(Clone, Debug)]
pub enum MappedArray {
    /// Byte-granular storage.
    Bytes(ByteArray),
    /// Double-granular storage.
    Doubles(DoubleArray),
}

impl MappedArray {
    /// Create an array of `num_elements` zeroed records using `backend`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CapacityExceeded`] if `num_elements` records do
    /// not fit in `max_array_len` primitive array elements.
    pub fn new(
        backend: Backend,
        num_elements: usize,
        bytes_per_element: usize,
        max_array_len: u32,
    ) -> Result<Self, PoolError> {
        Ok(match backend {
            Backend::Bytes => Self::Bytes(ByteArray::with_max_array_len(
                num_elements,
                bytes_per_element,
                max_array_len,
            )?),
            Backend::Doubles => Self::Doubles(DoubleArray::with_max_array_len(
                num_elements,
                bytes_per_element,
                max_array_len,
            )?),
        })
    }
}

impl From<ByteArray> for MappedArray {
    fn from(array: ByteArray) -> Self {
        Self::Bytes(array)
    }
}

impl From<DoubleArray> for MappedArray {
    fn from(array: DoubleArray) -> Self {
        Self::Doubles(array)
    }
}

impl ElementArray for MappedArray {
    fn backend(&self) -> Backend {
        match self {
            Self::Bytes(a) => a.backend(),
            Self::Doubles(a) => a.backend(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Bytes(a) => a.len(),
            Self::Doubles(a) => a.len(),
        }
    }

    fn max_len(&self) -> usize {
        match self {
            Self::Bytes(a) => a.max_len(),
            Self::Doubles(a) => a.max_len(),
        }
    }

    fn bytes_per_element(&self) -> usize {
        match self {
            Self::Bytes(a) => a.bytes_per_element(),
            Self::Doubles(a) => a.bytes_per_element(),
        }
    }

    fn resize(&mut self, num_elements: usize) -> Result<(), PoolError> {
        match self {
            Self::Bytes(a) => a.resize(num_elements),
            Self::Doubles(a) => a.resize(num_elements),
        }
    }

    fn swap_element(&mut self, a: usize, b: usize) {
        match self {
            Self::Bytes(arr) => arr.swap_element(a, b),
            Self::Doubles(arr) => arr.swap_element(a, b),
        }
    }

    fn swap_element_with(&mut self, a: usize, other: &mut Self, b: usize) {
        match (self, other) {
            (Self::Bytes(this), Self::Bytes(that)) => this.swap_element_with(a, that, b),
            (Self::Doubles(this), Self::Doubles(that)) => this.swap_element_with(a, that, b),
            (this, that) => panic!(
                "cannot swap records between {:?} and {:?} storage",
                this.backend(),
                that.backend()
            ),
        }
    }

    fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(a) => a.as_bytes(),
            Self::Doubles(a) => a.as_bytes(),
        }
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Bytes(a) => a.as_bytes_mut(),
            Self::Doubles(a) => a.as_bytes_mut(),
        }
    }
}
