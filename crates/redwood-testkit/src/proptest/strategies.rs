//! Insert-sequence strategies.
//!
//! Each strategy produces the order in which values are handed to
//! `RbTree::insert`; the shapes target different rebalancing paths.

use proptest::prelude::*;

/// Arbitrary values in arbitrary order.
pub fn strategy_insert_sequence(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(any::<i32>(), 0..max_len)
}

/// Strictly ascending run, the worst case for an unbalanced BST.
pub fn strategy_ascending_run(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    (any::<i16>(), 0..max_len).prop_map(|(start, len)| {
        let start = i32::from(start);
        (0..len as i32).map(|offset| start + offset).collect()
    })
}

/// Strictly descending run.
pub fn strategy_descending_run(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    strategy_ascending_run(max_len).prop_map(|mut values| {
        values.reverse();
        values
    })
}

/// Values drawn from a tiny domain, so most inserts are duplicates.
pub fn strategy_duplicate_heavy(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(0i32..4, 0..max_len)
}

/// Alternating low/high values that keep producing zig-zag shapes.
pub fn strategy_sawtooth_run(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    (0..max_len).prop_map(|len| {
        (0..len as i32)
            .map(|i| if i % 2 == 0 { i } else { 10_000 - i })
            .collect()
    })
}

/// Any of the shapes above.
pub fn strategy_mixed_sequence(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        strategy_insert_sequence(max_len),
        strategy_ascending_run(max_len),
        strategy_descending_run(max_len),
        strategy_duplicate_heavy(max_len),
        strategy_sawtooth_run(max_len),
    ]
}
