//! Pre-order walk used for printing and diagnostics.

use crate::node::{Color, Node};
use serde::{Deserialize, Serialize};

/// One visited node: its depth (root is 0), value and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub depth: usize,
    pub value: i32,
    pub color: Color,
}

/// Lazy pre-order traversal: current node, then left subtree, then right.
#[derive(Debug, Clone)]
pub struct Traverse<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Traverse<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.map(|node| (0, node)).into_iter().collect(),
        }
    }
}

impl Iterator for Traverse<'_> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        let (depth, node) = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push((depth + 1, right));
        }
        if let Some(left) = node.left() {
            self.stack.push((depth + 1, left));
        }
        Some(Visit {
            depth,
            value: node.value(),
            color: node.color(),
        })
    }
}
