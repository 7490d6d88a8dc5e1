use redwood_tree::{Color, RbTree};

pub mod proptest;

/// The insert order of the classic demo run, before repetition.
pub const CLASSIC_SEQUENCE: [i32; 8] = [11, 14, 2, 1, 7, 5, 8, 4];

/// How many times the demo run repeats [`CLASSIC_SEQUENCE`].
pub const CLASSIC_REPEAT: usize = 8;

/// The classic demo input: [`CLASSIC_SEQUENCE`] repeated [`CLASSIC_REPEAT`] times.
pub fn classic_demo_values() -> Vec<i32> {
    CLASSIC_SEQUENCE
        .iter()
        .copied()
        .cycle()
        .take(CLASSIC_SEQUENCE.len() * CLASSIC_REPEAT)
        .collect()
}

/// Build a tree by inserting `values` in order.
///
/// Panics if an insert fails; fixtures never set a node limit.
pub fn tree_from(values: &[i32]) -> RbTree {
    let mut tree = RbTree::new();
    tree.insert_all(values.iter().copied())
        .expect("unbounded tree accepts every insert");
    tree
}

/// Pre-order `(depth, value, color)` triples, handy for golden comparisons.
pub fn pre_order(tree: &RbTree) -> Vec<(usize, i32, Color)> {
    tree.traverse()
        .map(|visit| (visit.depth, visit.value, visit.color))
        .collect()
}

/// `values` sorted ascending, i.e. the expected in-order sequence.
pub fn sorted(values: &[i32]) -> Vec<i32> {
    let mut out = values.to_vec();
    out.sort_unstable();
    out
}
