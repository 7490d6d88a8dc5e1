use crate::error::TreeError;
use crate::node::{self, Color, Direction, Link, Node};
use crate::traverse::Traverse;

/// Insert-only red-black tree of `i32` values.
///
/// Duplicates are kept; an equal value always descends into the left subtree.
#[derive(Debug, Default)]
pub struct RbTree {
    root: Link,
    len: usize,
    node_limit: Option<usize>,
}

impl RbTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree that refuses to hold more than `limit` nodes.
    ///
    /// Inserting past the limit fails with [`TreeError::OutOfMemory`].
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            node_limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node_limit(&self) -> Option<usize> {
        self.node_limit
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_deref_mut()
    }

    /// Insert `value`, rebalancing on the way back up.
    ///
    /// On error the tree is unchanged.
    pub fn insert(&mut self, value: i32) -> Result<(), TreeError> {
        if let Some(limit) = self.node_limit
            && self.len >= limit
        {
            return Err(TreeError::OutOfMemory { limit });
        }

        let mut root = match self.root.take() {
            Some(root) => insert_at(root, value),
            None => Node::boxed(value, Color::Black),
        };
        root.color = Color::Black;
        self.root = Some(root);
        self.len += 1;
        Ok(())
    }

    /// Insert every value in order, stopping at the first failure.
    pub fn insert_all<I>(&mut self, values: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = i32>,
    {
        values.into_iter().try_for_each(|value| self.insert(value))
    }

    /// Release every node, children before parents.
    ///
    /// Calling this on an empty (or already torn down) tree is a no-op.
    pub fn teardown(&mut self) -> Result<(), TreeError> {
        let released = release(self.root.take());
        let tracked = std::mem::take(&mut self.len);
        debug_assert_eq!(released, tracked, "teardown released an unexpected node count");
        if released != tracked {
            return Err(TreeError::ReleaseMismatch { tracked, released });
        }
        Ok(())
    }

    /// Pre-order walk yielding depth, value and color of each node.
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse::new(self.root())
    }
}

/// Insert below `current`, returning the (possibly rotated) subtree root.
fn insert_at(mut current: Box<Node>, value: i32) -> Box<Node> {
    let dir = Direction::toward(value, current.value);

    let Some(mut child) = current.child_mut(dir).take() else {
        *current.child_mut(dir) = Some(Node::boxed(value, Color::Red));
        return current;
    };

    // Split a node with two red children before descending through it.
    if child.is_red()
        && let Some(other) = current.child_mut(dir.opposite())
        && other.is_red()
    {
        other.color = Color::Black;
        child.color = Color::Black;
        current.color = Color::Red;
    }

    let mut child = insert_at(child, value);
    if child.is_red() {
        if node::is_red(child.child(dir)) {
            // straight line: fall through to the single rotation below
        } else if node::is_red(child.child(dir.opposite())) {
            // zig-zag: straighten it first
            child = node::rotate(child, dir);
        } else {
            *current.child_mut(dir) = Some(child);
            return current;
        }
        child.color = Color::Black;
        current.color = Color::Red;
        *current.child_mut(dir) = Some(child);
        return node::rotate(current, dir.opposite());
    }

    *current.child_mut(dir) = Some(child);
    current
}

/// Post-order release. Returns the number of nodes freed.
fn release(link: Link) -> usize {
    let Some(mut node) = link else {
        return 0;
    };
    let left = release(node.left.take());
    let right = release(node.right.take());
    drop(node);
    left + right + 1
}
