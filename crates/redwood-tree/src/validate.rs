//! Invariant checking for diagnostics and tests.
//!
//! Black height is never stored on the tree; it is derived here on demand.

use crate::node::Node;
use crate::tree::RbTree;
use serde::Serialize;
use thiserror::Error;

/// A broken red-black or ordering invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root {value} is red")]
    RedRoot { value: i32 },
    #[error("red node {parent} has red child {child}")]
    RedRedPair { parent: i32, child: i32 },
    #[error("node {value} has black height {left} on the left and {right} on the right")]
    BlackHeightMismatch { value: i32, left: usize, right: usize },
    #[error("in-order sequence goes from {previous} down to {next}")]
    OutOfOrder { previous: i32, next: i32 },
    #[error("tree tracks {tracked} nodes but {counted} are reachable")]
    LengthMismatch { tracked: usize, counted: usize },
}

/// Summary of a tree that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeReport {
    pub len: usize,
    /// Nodes on the longest root-to-leaf path.
    pub height: usize,
    /// Black nodes on every root-to-empty path.
    pub black_height: usize,
    pub in_order: Vec<i32>,
}

impl TreeReport {
    /// Deepest level reached, counting the root as level 0.
    pub fn max_depth(&self) -> usize {
        self.height.saturating_sub(1)
    }

    /// Whether `height <= 2 * log2(len + 1)`.
    pub fn within_height_bound(&self) -> bool {
        self.height as f64 <= 2.0 * ((self.len + 1) as f64).log2()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Shape {
    height: usize,
    black_height: usize,
}

/// Check invariants 1-4 and the tracked node count.
pub fn validate(tree: &RbTree) -> Result<TreeReport, InvariantViolation> {
    let mut in_order = Vec::with_capacity(tree.len());
    let shape = match tree.root() {
        Some(root) if root.is_red() => {
            return Err(InvariantViolation::RedRoot {
                value: root.value(),
            });
        }
        Some(root) => walk(root, &mut in_order)?,
        None => Shape::default(),
    };

    if let Some(pair) = in_order.windows(2).find(|pair| pair[0] > pair[1]) {
        return Err(InvariantViolation::OutOfOrder {
            previous: pair[0],
            next: pair[1],
        });
    }

    if in_order.len() != tree.len() {
        return Err(InvariantViolation::LengthMismatch {
            tracked: tree.len(),
            counted: in_order.len(),
        });
    }

    Ok(TreeReport {
        len: in_order.len(),
        height: shape.height,
        black_height: shape.black_height,
        in_order,
    })
}

fn walk(node: &Node, in_order: &mut Vec<i32>) -> Result<Shape, InvariantViolation> {
    if node.is_red()
        && let Some(child) = [node.left(), node.right()]
            .into_iter()
            .flatten()
            .find(|child| child.is_red())
    {
        return Err(InvariantViolation::RedRedPair {
            parent: node.value(),
            child: child.value(),
        });
    }

    let left = node
        .left()
        .map(|child| walk(child, in_order))
        .transpose()?
        .unwrap_or_default();
    in_order.push(node.value());
    let right = node
        .right()
        .map(|child| walk(child, in_order))
        .transpose()?
        .unwrap_or_default();

    if left.black_height != right.black_height {
        return Err(InvariantViolation::BlackHeightMismatch {
            value: node.value(),
            left: left.black_height,
            right: right.black_height,
        });
    }

    Ok(Shape {
        height: 1 + left.height.max(right.height),
        black_height: left.black_height + usize::from(!node.is_red()),
    })
}
