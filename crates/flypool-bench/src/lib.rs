//! Benchmark profiles and utilities for the flypool record arena.
//!
//! Provides pre-built [`PoolConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 32-byte node records on byte storage
//! - [`doubles_profile`]: the same records on double storage
//! - [`populate`]: fill a pool with seeded node records

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use flypool_arena::{Backend, MemPool, PoolConfig, SingleArrayPool};
use flypool_test_utils::{Node, NodeLayout};

/// Byte-backed pool of [`NodeLayout`] records, starting small so growth
/// is part of what gets measured.
pub fn reference_profile() -> PoolConfig {
    PoolConfig::new(NodeLayout::BYTES).with_initial_capacity(64)
}

/// Same as [`reference_profile`] but backed by doubles.
pub fn doubles_profile() -> PoolConfig {
    reference_profile().with_backend(Backend::Doubles)
}

/// Build a pool from `config` and create `count` records, each holding
/// `Node::for_seed(index)`.
///
/// # Panics
///
/// Panics if the config is invalid or the pool cannot hold `count` records.
pub fn populate(config: &PoolConfig, count: usize) -> SingleArrayPool {
    let mut pool = config.build().expect("benchmark profile must be valid");
    let mut access = pool.create_access();
    for _ in 0..count {
        let index = pool.create().expect("benchmark pool ran out of capacity");
        pool.rebind_access(&mut access, index);
        Node::for_seed(index).write(&mut pool.element_mut(&access));
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_fills_records() {
        for config in [reference_profile(), doubles_profile()] {
            let pool = populate(&config, 100);
            assert_eq!(pool.len(), 100);
            let mut access = pool.create_access();
            pool.rebind_access(&mut access, 42);
            assert_eq!(Node::read(&pool.element(&access)), Node::for_seed(42));
        }
    }
}
