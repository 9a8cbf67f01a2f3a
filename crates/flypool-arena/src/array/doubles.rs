//! Double-granular record storage.
//!
//! Records are mapped onto a `Vec<f64>`, each rounded up to whole doubles.
//! Field access goes through a byte view of the buffer, so callers see the
//! same record layout as with [`ByteArray`](super::ByteArray); resize and
//! swap move whole doubles.

use flypool_core::layout::MAX_ARRAY_LEN;
use flypool_core::{doubles_for_bytes, Backend, PoolError};

use super::ElementArray;

/// Records stored in a `Vec<f64>`, `ceil(bytes_per_element / 8)` doubles each.
///
/// With the same array length limit as [`ByteArray`](super::ByteArray) this
/// addresses eight times as many bytes, which is what larger pools need.
#[derive(Clone, Debug)]
pub struct DoubleArray {
    /// Backing storage, exactly `len * doubles_per_element` doubles.
    data: Vec<f64>,
    bytes_per_element: usize,
    doubles_per_element: usize,
    len: usize,
    max_len: usize,
    swap_tmp: Vec<f64>,
}

impl DoubleArray {
    /// Create an array of `num_elements` zeroed records under the default
    /// array length limit.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CapacityExceeded`] if the records cannot be
    /// addressed.
    pub fn new(num_elements: usize, bytes_per_element: usize) -> Result<Self, PoolError> {
        Self::with_max_array_len(num_elements, bytes_per_element, MAX_ARRAY_LEN)
    }

    /// Create an array whose backing `Vec<f64>` may never exceed
    /// `max_array_len` doubles.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CapacityExceeded`] if `num_elements` records
    /// exceed the limit.
    ///
    /// # Panics
    ///
    /// Panics if `bytes_per_element` is zero or `max_array_len` exceeds
    /// [`MAX_ARRAY_LEN`].
    pub fn with_max_array_len(
        num_elements: usize,
        bytes_per_element: usize,
        max_array_len: u32,
    ) -> Result<Self, PoolError> {
        assert!(bytes_per_element > 0, "bytes_per_element must be non-zero");
        assert!(
            max_array_len <= MAX_ARRAY_LEN,
            "max_array_len {max_array_len} exceeds {MAX_ARRAY_LEN}"
        );
        let doubles_per_element = doubles_for_bytes(bytes_per_element);
        let max_len = Backend::Doubles.max_elements(bytes_per_element, max_array_len);
        if num_elements > max_len {
            return Err(PoolError::CapacityExceeded {
                requested: num_elements,
                max: max_len,
            });
        }
        Ok(Self {
            data: vec![0.0; num_elements * doubles_per_element],
            bytes_per_element,
            doubles_per_element,
            len: num_elements,
            max_len,
            swap_tmp: vec![0.0; doubles_per_element],
        })
    }

    /// Number of doubles each record occupies.
    pub fn doubles_per_element(&self) -> usize {
        self.doubles_per_element
    }

    fn range(&self, index: usize) -> std::ops::Range<usize> {
        let start = index * self.doubles_per_element;
        start..start + self.doubles_per_element
    }
}

impl ElementArray for DoubleArray {
    fn backend(&self) -> Backend {
        Backend::Doubles
    }

    fn len(&self) -> usize {
        self.len
    }

    fn max_len(&self) -> usize {
        self.max_len
    }

    fn bytes_per_element(&self) -> usize {
        self.bytes_per_element
    }

    fn resize(&mut self, num_elements: usize) -> Result<(), PoolError> {
        if num_elements > self.max_len {
            return Err(PoolError::CapacityExceeded {
                requested: num_elements,
                max: self.max_len,
            });
        }
        let new_doubles = num_elements * self.doubles_per_element;
        if new_doubles > self.data.len() {
            self.data.reserve_exact(new_doubles - self.data.len());
            self.data.resize(new_doubles, 0.0);
        } else {
            self.data.truncate(new_doubles);
            self.data.shrink_to_fit();
        }
        self.len = num_elements;
        Ok(())
    }

    fn swap_element(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let ra = self.range(a);
        let rb = self.range(b);
        self.swap_tmp.copy_from_slice(&self.data[ra.clone()]);
        self.data.copy_within(rb.clone(), ra.start);
        self.data[rb].copy_from_slice(&self.swap_tmp);
    }

    fn swap_element_with(&mut self, a: usize, other: &mut Self, b: usize) {
        assert_eq!(
            self.bytes_per_element, other.bytes_per_element,
            "record widths differ"
        );
        let ra = self.range(a);
        let rb = other.range(b);
        self.swap_tmp.copy_from_slice(&self.data[ra.clone()]);
        self.data[ra].copy_from_slice(&other.data[rb.clone()]);
        other.data[rb].copy_from_slice(&self.swap_tmp);
    }

    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.data)
    }
}
