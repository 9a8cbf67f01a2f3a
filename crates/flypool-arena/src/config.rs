//! Pool configuration parameters.

use flypool_core::layout::{clamp_bytes_per_element, MAX_ARRAY_LEN};
use flypool_core::{Backend, PoolError};

use crate::factory::MappedArrayFactory;
use crate::single::SingleArrayPool;

/// Configuration for a [`SingleArrayPool`].
///
/// Plain data; call [`validate`](Self::validate) or [`build`](Self::build)
/// to check it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Records the backing array holds before the first growth.
    ///
    /// Default: 16. Zero is allowed; the first `create` grows to one.
    pub initial_capacity: usize,

    /// Requested record width in bytes. Raised to 8 when smaller.
    pub bytes_per_element: usize,

    /// Primitive storage strategy. Default: [`Backend::Bytes`].
    pub backend: Backend,

    /// Longest backing array in primitive elements (bytes or doubles).
    ///
    /// Default: `i32::MAX`. Must be in `1..=i32::MAX`.
    pub max_array_len: u32,
}

impl PoolConfig {
    /// Default initial capacity in records.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

    /// Default array length limit.
    pub const DEFAULT_MAX_ARRAY_LEN: u32 = MAX_ARRAY_LEN;

    /// Create a config for records of `bytes_per_element` bytes.
    ///
    /// Uses default values for all other parameters.
    pub fn new(bytes_per_element: usize) -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            bytes_per_element,
            backend: Backend::default(),
            max_array_len: Self::DEFAULT_MAX_ARRAY_LEN,
        }
    }

    /// Set the initial capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the storage strategy.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Set the array length limit.
    pub fn with_max_array_len(mut self, max_array_len: u32) -> Self {
        self.max_array_len = max_array_len;
        self
    }

    /// Record width after clamping to the free list header size.
    pub fn effective_bytes_per_element(&self) -> usize {
        clamp_bytes_per_element(self.bytes_per_element)
    }

    /// Largest record count a pool built from this config can hold.
    pub fn max_elements(&self) -> usize {
        self.backend
            .max_elements(self.effective_bytes_per_element(), self.max_array_len)
    }

    /// Check the config for consistency.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if `max_array_len` is zero or
    /// above `i32::MAX`, and [`PoolError::CapacityExceeded`] if the initial
    /// capacity is larger than [`max_elements`](Self::max_elements).
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.max_array_len == 0 {
            return Err(PoolError::InvalidConfig {
                reason: "max_array_len must be non-zero".into(),
            });
        }
        if self.max_array_len > MAX_ARRAY_LEN {
            return Err(PoolError::InvalidConfig {
                reason: format!(
                    "max_array_len {} exceeds {MAX_ARRAY_LEN}",
                    self.max_array_len
                ),
            });
        }
        let max = self.max_elements();
        if self.initial_capacity > max {
            return Err(PoolError::CapacityExceeded {
                requested: self.initial_capacity,
                max,
            });
        }
        Ok(())
    }

    /// The array factory this config describes.
    ///
    /// # Panics
    ///
    /// Panics if `max_array_len` exceeds `i32::MAX`; [`build`](Self::build)
    /// validates first and reports that as an error instead.
    pub fn array_factory(&self) -> MappedArrayFactory {
        MappedArrayFactory::new(self.backend).with_max_array_len(self.max_array_len)
    }

    /// Validate and build an empty pool.
    ///
    /// # Errors
    ///
    /// Returns whatever [`validate`](Self::validate) reports.
    pub fn build(&self) -> Result<SingleArrayPool, PoolError> {
        self.validate()?;
        tracing::debug!(
            initial_capacity = self.initial_capacity,
            bytes_per_element = self.effective_bytes_per_element(),
            backend = ?self.backend,
            "building pool"
        );
        SingleArrayPool::with_factory(
            &self.array_factory(),
            self.initial_capacity,
            self.bytes_per_element,
        )
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(flypool_core::layout::MIN_BYTES_PER_ELEMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::ElementArray;
    use crate::pool::MemPool;

    #[test]
    fn defaults() {
        let config = PoolConfig::default();
        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.bytes_per_element, 8);
        assert_eq!(config.backend, Backend::Bytes);
        assert_eq!(config.max_array_len, i32::MAX as u32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn width_is_clamped() {
        let config = PoolConfig::new(2);
        assert_eq!(config.effective_bytes_per_element(), 8);
        let pool = config.build().unwrap();
        assert_eq!(pool.bytes_per_element(), 8);
    }

    #[test]
    fn zero_limit_rejected() {
        let err = PoolConfig::new(8).with_max_array_len(0).validate().unwrap_err();
        assert!(matches!(err, PoolError::InvalidConfig { .. }));
    }

    #[test]
    fn oversized_limit_rejected() {
        let err = PoolConfig::new(8)
            .with_max_array_len(u32::MAX)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn initial_capacity_over_limit_rejected() {
        let config = PoolConfig::new(8)
            .with_max_array_len(64)
            .with_initial_capacity(9);
        assert_eq!(config.max_elements(), 8);
        assert_eq!(
            config.validate(),
            Err(PoolError::CapacityExceeded {
                requested: 9,
                max: 8
            })
        );
    }

    #[test]
    fn build_honours_every_field() {
        let config = PoolConfig::new(20)
            .with_backend(Backend::Doubles)
            .with_initial_capacity(3)
            .with_max_array_len(30);
        let pool = config.build().unwrap();
        assert_eq!(pool.capacity(), 3);
        assert_eq!(pool.max_len(), 10);
        assert_eq!(pool.data_array().backend(), Backend::Doubles);
        assert_eq!(pool.data_array().stride(), 24);
    }
}
