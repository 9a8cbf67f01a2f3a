//! Deterministic create/free workloads.
//!
//! A [`ChurnScript`] is a seeded sequence of [`Op`]s. Frees do not name an
//! index directly, since which indices a pool hands out depends on the
//! pool; instead each carries a `pick` that [`LiveModel::resolve`] maps onto
//! whatever is live at that point.

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step of a churn workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Create,
    Free { pick: usize },
}

/// A reproducible sequence of creates and frees.
#[derive(Clone, Debug)]
pub struct ChurnScript {
    ops: Vec<Op>,
}

impl ChurnScript {
    /// Generate `len` ops from `seed`; each op is a free with probability
    /// `free_probability`.
    pub fn generate(seed: u64, len: usize, free_probability: f64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ops = (0..len)
            .map(|_| {
                if rng.random_bool(free_probability) {
                    Op::Free {
                        pick: rng.random_range(0..u32::MAX as usize),
                    }
                } else {
                    Op::Create
                }
            })
            .collect();
        Self { ops }
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of creates in the script.
    pub fn creates(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Create).count()
    }
}

/// Reference set of live indices to check a pool against.
#[derive(Clone, Debug, Default)]
pub struct LiveModel {
    live: BTreeSet<usize>,
}

impl LiveModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a create. Returns `false` if `index` was already live.
    pub fn insert(&mut self, index: usize) -> bool {
        self.live.insert(index)
    }

    /// Record a free. Returns `false` if `index` was not live.
    pub fn remove(&mut self, index: usize) -> bool {
        self.live.remove(&index)
    }

    /// Map a free's `pick` onto a live index, or `None` if nothing is live.
    pub fn resolve(&self, pick: usize) -> Option<usize> {
        if self.live.is_empty() {
            return None;
        }
        self.live.iter().nth(pick % self.live.len()).copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.live.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Live indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        self.live.iter().copied().collect()
    }
}
