//! Integration test: raw record bytes move between pools and arrays.
//!
//! Collaborators snapshot records by copying their bytes out of the data
//! array and later restore them into a (possibly different) pool. These
//! tests check that copies round trip across storage strategies and
//! survive growth, and that record swaps between arrays line up.

use flypool_arena::{
    ArrayFactory, Backend, ByteArrayFactory, DoubleArrayFactory, ElementArray, MappedArrayFactory,
    MemPool, PoolFactory, SingleArrayPoolFactory,
};
use flypool_test_utils::{pattern, Node, NodeLayout};

#[test]
fn snapshot_restores_into_other_backend() {
    let mut source = SingleArrayPoolFactory::new(MappedArrayFactory::new(Backend::Bytes))
        .create_pool(4, NodeLayout::BYTES)
        .unwrap();
    let mut target = SingleArrayPoolFactory::new(MappedArrayFactory::new(Backend::Doubles))
        .create_pool(1, NodeLayout::BYTES)
        .unwrap();

    let mut access = source.create_access();
    let mut saved = Vec::new();
    for seed in 0..10 {
        let index = source.create().unwrap();
        source.rebind_access(&mut access, index);
        Node::for_seed(seed).write(&mut source.element_mut(&access));
        saved.push(source.element(&access).as_bytes().to_vec());
    }

    let mut target_access = target.create_access();
    for (seed, bytes) in saved.iter().enumerate() {
        let index = target.create().unwrap();
        target.rebind_access(&mut target_access, index);
        target.element_mut(&target_access).copy_from_slice(bytes);
        assert_eq!(
            Node::read(&target.element(&target_access)),
            Node::for_seed(seed)
        );
    }
    assert_eq!(target.data_array().stride(), NodeLayout::BYTES);
}

#[test]
fn patterns_survive_growth() {
    let width = 13;
    let mut pool = SingleArrayPoolFactory::new(DoubleArrayFactory::default())
        .create_pool(1, width)
        .unwrap();
    let mut access = pool.create_access();
    for i in 0..40 {
        let index = pool.create().unwrap();
        pool.rebind_access(&mut access, index);
        pool.element_mut(&access).copy_from_slice(&pattern(i, width));
    }
    assert_eq!(pool.data_array().stride(), 16);
    for i in 0..40 {
        pool.rebind_access(&mut access, i);
        assert_eq!(pool.element(&access).as_bytes(), pattern(i, width).as_slice());
    }
}

#[test]
fn swap_between_arrays_exchanges_whole_records() {
    let factory = ByteArrayFactory::default();
    let mut left = factory.create_array(3, NodeLayout::BYTES).unwrap();
    let mut right = factory.create_array(3, NodeLayout::BYTES).unwrap();
    let mut access = left.create_access();

    left.rebind_access(&mut access, 2);
    Node::for_seed(11).write(&mut left.element_mut(&access));
    right.rebind_access(&mut access, 0);
    Node::for_seed(22).write(&mut right.element_mut(&access));

    left.swap_element_with(2, &mut right, 0);

    assert_eq!(Node::read(&right.element(&access)), Node::for_seed(11));
    left.rebind_access(&mut access, 2);
    assert_eq!(Node::read(&left.element(&access)), Node::for_seed(22));
}
