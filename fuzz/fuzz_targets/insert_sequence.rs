//! Fuzz harness for insertion
//!
//! Interprets the input as little-endian i32 values, inserts them in order
//! and checks every red-black invariant after each insert.

#![no_main]

use libfuzzer_sys::fuzz_target;
use redwood_tree::{RbTree, validate};

fuzz_target!(|data: &[u8]| {
    let values: Vec<i32> = data
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    let mut tree = RbTree::new();
    for &value in &values {
        tree.insert(value).unwrap();
        if let Err(violation) = validate(&tree) {
            panic!("invariant broken after inserting {value}: {violation}");
        }
    }

    let report = validate(&tree).unwrap();
    let mut sorted = values.clone();
    sorted.sort_unstable();
    assert_eq!(report.in_order, sorted);
    assert!(report.within_height_bound());

    tree.teardown().unwrap();
    tree.teardown().unwrap();
});
