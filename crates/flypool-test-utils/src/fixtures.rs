//! Sample record layout and byte patterns.
//!
//! [`NodeLayout`] is a 32-byte record in the style of a graph node:
//!
//! ```text
//! 0..4    id          i32
//! 4..8    first_edge  index (NO_INDEX when absent)
//! 8..16   weight      f64
//! 16      visited     bool
//! 17      tag         u8
//! 20..24  cost        f32
//! 24..32  stamp       i64
//! ```

use flypool_core::{ElementRead, ElementWrite};

/// Field offsets of the sample node record.
pub struct NodeLayout;

impl NodeLayout {
    pub const ID: usize = 0;
    pub const FIRST_EDGE: usize = 4;
    pub const WEIGHT: usize = 8;
    pub const VISITED: usize = 16;
    pub const TAG: usize = 17;
    pub const COST: usize = 20;
    pub const STAMP: usize = 24;
    pub const BYTES: usize = 32;
}

/// Decoded node record.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: i32,
    pub first_edge: Option<usize>,
    pub weight: f64,
    pub visited: bool,
    pub tag: u8,
    pub cost: f32,
    pub stamp: i64,
}

impl Node {
    /// A node whose every field is derived from `seed`.
    pub fn for_seed(seed: usize) -> Self {
        let s = seed as i64;
        Self {
            id: seed as i32,
            first_edge: (seed % 3 != 0).then_some(seed / 2),
            weight: seed as f64 * 0.25 - 3.0,
            visited: seed % 2 == 1,
            tag: (seed % 251) as u8,
            cost: seed as f32 / 8.0,
            stamp: s * 1_000_003 - 17,
        }
    }

    pub fn write<W: ElementWrite + ?Sized>(&self, record: &mut W) {
        record.put_int(NodeLayout::ID, self.id);
        record.put_index(NodeLayout::FIRST_EDGE, self.first_edge);
        record.put_double(NodeLayout::WEIGHT, self.weight);
        record.put_bool(NodeLayout::VISITED, self.visited);
        record.put_byte(NodeLayout::TAG, self.tag);
        record.put_float(NodeLayout::COST, self.cost);
        record.put_long(NodeLayout::STAMP, self.stamp);
    }

    pub fn read<R: ElementRead + ?Sized>(record: &R) -> Self {
        Self {
            id: record.get_int(NodeLayout::ID),
            first_edge: record.get_index(NodeLayout::FIRST_EDGE),
            weight: record.get_double(NodeLayout::WEIGHT),
            visited: record.get_bool(NodeLayout::VISITED),
            tag: record.get_byte(NodeLayout::TAG),
            cost: record.get_float(NodeLayout::COST),
            stamp: record.get_long(NodeLayout::STAMP),
        }
    }
}

/// `len` bytes that differ for every `seed`, with no zero bytes.
pub fn pattern(seed: usize, len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| ((seed.wrapping_mul(31).wrapping_add(i * 7)) % 255) as u8 + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_deterministic_and_non_zero() {
        assert_eq!(pattern(3, 16), pattern(3, 16));
        assert_ne!(pattern(3, 16), pattern(4, 16));
        assert!(pattern(9, 64).iter().all(|&b| b != 0));
    }

    #[test]
    fn seeded_nodes_differ() {
        assert_ne!(Node::for_seed(1), Node::for_seed(2));
        assert_eq!(Node::for_seed(3).first_edge, None);
    }
}
