//! Node storage, colors and single rotations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Side of a node, also used as a rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Direction to descend for `value` below a node holding `pivot`.
    /// Equal values go left.
    pub(crate) fn toward(value: i32, pivot: i32) -> Self {
        if value <= pivot {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    pub(crate) fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

pub(crate) type Link = Option<Box<Node>>;

/// A tree node. Nodes are only ever created by insertion and are never cloned.
#[derive(Debug)]
pub struct Node {
    pub(crate) color: Color,
    pub(crate) value: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn boxed(value: i32, color: Color) -> Box<Self> {
        Box::new(Self {
            color,
            value,
            left: None,
            right: None,
        })
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.color.is_red()
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub(crate) fn child(&self, dir: Direction) -> &Link {
        match dir {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, dir: Direction) -> &mut Link {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

pub(crate) fn is_red(link: &Link) -> bool {
    link.as_ref().is_some_and(|node| node.is_red())
}

/// Single rotation of `root` in direction `dir`.
///
/// The child opposite `dir` is promoted to subtree root, its `dir`-side
/// subtree moves under `root`, and `root` becomes its `dir`-side child.
/// In-order sequence and the set of nodes are unchanged.
pub(crate) fn rotate(mut root: Box<Node>, dir: Direction) -> Box<Node> {
    let opposite = dir.opposite();
    let Some(mut promoted) = root.child_mut(opposite).take() else {
        // nothing to promote
        return root;
    };
    *root.child_mut(opposite) = promoted.child_mut(dir).take();
    *promoted.child_mut(dir) = Some(root);
    promoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attach(mut parent: Box<Node>, dir: Direction, child: Box<Node>) -> Box<Node> {
        *parent.child_mut(dir) = Some(child);
        parent
    }

    fn in_order(node: Option<&Node>, out: &mut Vec<i32>) {
        if let Some(n) = node {
            in_order(n.left(), out);
            out.push(n.value());
            in_order(n.right(), out);
        }
    }

    #[test]
    fn rotate_right_promotes_left_child() {
        // 4 <- 2 (with 1 and 3 below), 5 on the right
        let two = attach(
            attach(Node::boxed(2, Color::Red), Direction::Left, Node::boxed(1, Color::Black)),
            Direction::Right,
            Node::boxed(3, Color::Black),
        );
        let root = attach(
            attach(Node::boxed(4, Color::Black), Direction::Left, two),
            Direction::Right,
            Node::boxed(5, Color::Black),
        );

        let rotated = rotate(root, Direction::Right);
        assert_eq!(rotated.value(), 2);
        assert_eq!(rotated.left().map(Node::value), Some(1));
        let four = rotated.right().unwrap();
        assert_eq!(four.value(), 4);
        assert_eq!(four.left().map(Node::value), Some(3));
        assert_eq!(four.right().map(Node::value), Some(5));

        let mut values = Vec::new();
        in_order(Some(&rotated), &mut values);
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotate_left_promotes_right_child() {
        let root = attach(
            Node::boxed(1, Color::Black),
            Direction::Right,
            attach(Node::boxed(3, Color::Red), Direction::Left, Node::boxed(2, Color::Black)),
        );

        let rotated = rotate(root, Direction::Left);
        assert_eq!(rotated.value(), 3);
        let one = rotated.left().unwrap();
        assert_eq!(one.value(), 1);
        assert_eq!(one.right().map(Node::value), Some(2));
        assert!(rotated.right().is_none());
    }

    #[test]
    fn rotate_preserves_colors() {
        let root = attach(Node::boxed(1, Color::Black), Direction::Right, Node::boxed(2, Color::Red));
        let rotated = rotate(root, Direction::Left);
        assert_eq!(rotated.color(), Color::Red);
        assert_eq!(rotated.left().unwrap().color(), Color::Black);
    }

    #[test]
    fn rotate_without_child_is_identity() {
        let root = Node::boxed(7, Color::Black);
        let rotated = rotate(root, Direction::Right);
        assert_eq!(rotated.value(), 7);
        assert!(rotated.left().is_none() && rotated.right().is_none());
    }

    #[test]
    fn equal_values_descend_left() {
        assert_eq!(Direction::toward(5, 5), Direction::Left);
        assert_eq!(Direction::toward(4, 5), Direction::Left);
        assert_eq!(Direction::toward(6, 5), Direction::Right);
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::Red.to_string(), "red");
        assert_eq!(Color::Black.to_string(), "black");
    }
}
