//! Factories that build backing arrays and pools.
//!
//! Factories capture the construction choices (storage strategy, array
//! length limit) so that code creating many pools of different record
//! widths can stay generic over how they are backed.

use flypool_core::layout::{clamp_bytes_per_element, MAX_ARRAY_LEN};
use flypool_core::{Backend, PoolError};

use crate::array::{ByteArray, DoubleArray, ElementArray, MappedArray};
use crate::pool::MemPool;
use crate::single::SingleArrayPool;

/// Indices are stored as 32-bit links, so no array may outgrow them.
fn check_max_array_len(max_array_len: u32) {
    assert!(
        max_array_len <= MAX_ARRAY_LEN,
        "max_array_len {max_array_len} exceeds {MAX_ARRAY_LEN}"
    );
}

/// Builds backing arrays of a fixed strategy.
pub trait ArrayFactory {
    /// Array type produced.
    type Array: ElementArray;

    /// Create an array of `num_elements` zeroed records, each
    /// `bytes_per_element` bytes wide.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CapacityExceeded`] if the array cannot address
    /// `num_elements` records.
    fn create_array(
        &self,
        num_elements: usize,
        bytes_per_element: usize,
    ) -> Result<Self::Array, PoolError>;
}

/// Produces [`ByteArray`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteArrayFactory {
    max_array_len: u32,
}

impl ByteArrayFactory {
    /// A factory whose arrays may hold at most `max_array_len` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `max_array_len` exceeds [`MAX_ARRAY_LEN`].
    pub fn with_max_array_len(max_array_len: u32) -> Self {
        check_max_array_len(max_array_len);
        Self { max_array_len }
    }
}

impl Default for ByteArrayFactory {
    fn default() -> Self {
        Self::with_max_array_len(MAX_ARRAY_LEN)
    }
}

impl ArrayFactory for ByteArrayFactory {
    type Array = ByteArray;

    fn create_array(
        &self,
        num_elements: usize,
        bytes_per_element: usize,
    ) -> Result<ByteArray, PoolError> {
        ByteArray::with_max_array_len(num_elements, bytes_per_element, self.max_array_len)
    }
}

/// Produces [`DoubleArray`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoubleArrayFactory {
    max_array_len: u32,
}

impl DoubleArrayFactory {
    /// A factory whose arrays may hold at most `max_array_len` doubles.
    ///
    /// # Panics
    ///
    /// Panics if `max_array_len` exceeds [`MAX_ARRAY_LEN`].
    pub fn with_max_array_len(max_array_len: u32) -> Self {
        check_max_array_len(max_array_len);
        Self { max_array_len }
    }
}

impl Default for DoubleArrayFactory {
    fn default() -> Self {
        Self::with_max_array_len(MAX_ARRAY_LEN)
    }
}

impl ArrayFactory for DoubleArrayFactory {
    type Array = DoubleArray;

    fn create_array(
        &self,
        num_elements: usize,
        bytes_per_element: usize,
    ) -> Result<DoubleArray, PoolError> {
        DoubleArray::with_max_array_len(num_elements, bytes_per_element, self.max_array_len)
    }
}

/// Produces [`MappedArray`]s with the strategy chosen at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappedArrayFactory {
    backend: Backend,
    max_array_len: u32,
}

impl MappedArrayFactory {
    /// A factory for `backend` under the default array length limit.
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            max_array_len: MAX_ARRAY_LEN,
        }
    }

    /// Replace the array length limit.
    ///
    /// # Panics
    ///
    /// Panics if `max_array_len` exceeds [`MAX_ARRAY_LEN`].
    pub fn with_max_array_len(mut self, max_array_len: u32) -> Self {
        check_max_array_len(max_array_len);
        self.max_array_len = max_array_len;
        self
    }

    /// Storage strategy of produced arrays.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Array length limit of produced arrays, in primitive elements.
    pub fn max_array_len(&self) -> u32 {
        self.max_array_len
    }
}

impl Default for MappedArrayFactory {
    fn default() -> Self {
        Self::new(Backend::default())
    }
}

impl ArrayFactory for MappedArrayFactory {
    type Array = MappedArray;

    fn create_array(
        &self,
        num_elements: usize,
        bytes_per_element: usize,
    ) -> Result<MappedArray, PoolError> {
        MappedArray::new(
            self.backend,
            num_elements,
            bytes_per_element,
            self.max_array_len,
        )
    }
}

/// Builds pools of a fixed kind.
pub trait PoolFactory {
    /// Pool type produced.
    type Pool: MemPool;

    /// Create an empty pool with room for `initial_capacity` records of at
    /// least `bytes_per_element` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CapacityExceeded`] if the backing array cannot
    /// hold `initial_capacity` records.
    fn create_pool(
        &self,
        initial_capacity: usize,
        bytes_per_element: usize,
    ) -> Result<Self::Pool, PoolError>;
}

/// Produces [`SingleArrayPool`]s backed by arrays from `F`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SingleArrayPoolFactory<F = MappedArrayFactory> {
    arrays: F,
}

impl<F: ArrayFactory> SingleArrayPoolFactory<F> {
    /// Wrap an array factory.
    pub fn new(arrays: F) -> Self {
        Self { arrays }
    }

    /// The array factory backing produced pools.
    pub fn array_factory(&self) -> &F {
        &self.arrays
    }
}

impl<F: ArrayFactory> PoolFactory for SingleArrayPoolFactory<F> {
    type Pool = SingleArrayPool<F::Array>;

    fn create_pool(
        &self,
        initial_capacity: usize,
        bytes_per_element: usize,
    ) -> Result<Self::Pool, PoolError> {
        let bytes_per_element = clamp_bytes_per_element(bytes_per_element);
        SingleArrayPool::with_factory(&self.arrays, initial_capacity, bytes_per_element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_factories_pick_their_backend() {
        let bytes = ByteArrayFactory::default().create_array(3, 12).unwrap();
        assert_eq!(bytes.backend(), Backend::Bytes);
        assert_eq!(bytes.len(), 3);
        let doubles = DoubleArrayFactory::default().create_array(3, 12).unwrap();
        assert_eq!(doubles.backend(), Backend::Doubles);
        assert_eq!(doubles.stride(), 16);

        for backend in [Backend::Bytes, Backend::Doubles] {
            let array = MappedArrayFactory::new(backend).create_array(2, 8).unwrap();
            assert_eq!(array.backend(), backend);
            assert_eq!(array.bytes_per_element(), 8);
        }
    }

    #[test]
    fn factory_limit_is_applied() {
        let factory = MappedArrayFactory::new(Backend::Doubles).with_max_array_len(12);
        assert_eq!(factory.max_array_len(), 12);
        let array = factory.create_array(0, 24).unwrap();
        assert_eq!(array.max_len(), 4);
        assert!(matches!(
            factory.create_array(5, 24),
            Err(PoolError::CapacityExceeded { requested: 5, max: 4 })
        ));
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn byte_factory_rejects_limit_past_i32() {
        ByteArrayFactory::with_max_array_len(MAX_ARRAY_LEN + 1);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn double_factory_rejects_limit_past_i32() {
        DoubleArrayFactory::with_max_array_len(u32::MAX);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn mapped_factory_rejects_limit_past_i32() {
        MappedArrayFactory::new(Backend::Doubles).with_max_array_len(u32::MAX);
    }

    #[test]
    fn limit_at_i32_max_is_accepted() {
        let factory = DoubleArrayFactory::with_max_array_len(MAX_ARRAY_LEN);
        let array = factory.create_array(0, 8).unwrap();
        assert_eq!(array.max_len(), i32::MAX as usize);
    }

    #[test]
    fn pool_factory_clamps_width() {
        let factory = SingleArrayPoolFactory::new(ByteArrayFactory::default());
        let pool = factory.create_pool(4, 1).unwrap();
        assert_eq!(pool.bytes_per_element(), 8);
        assert_eq!(pool.capacity(), 4);
        assert!(pool.is_empty());
    }

    #[test]
    fn default_pool_factory_is_byte_backed() {
        let factory = SingleArrayPoolFactory::<MappedArrayFactory>::default();
        assert_eq!(factory.array_factory().backend(), Backend::Bytes);
        let mut pool = factory.create_pool(0, 16).unwrap();
        assert_eq!(pool.create().unwrap(), 0);
        assert_eq!(pool.data_array().backend(), Backend::Bytes);
    }

    #[test]
    fn generic_over_pool_kind() {
        fn fill<P: PoolFactory>(factory: &P, n: usize) -> P::Pool {
            let mut pool = factory.create_pool(1, 8).unwrap();
            for _ in 0..n {
                pool.create().unwrap();
            }
            pool
        }
        let pool = fill(&SingleArrayPoolFactory::new(DoubleArrayFactory::default()), 5);
        assert_eq!(pool.len(), 5);
        assert_eq!(pool.capacity(), 8);
    }
}
