//! Insert-only red-black tree of integers.
//!
//! Insertion descends recursively and rebalances on the way back up. Any node
//! met on the descent path that has two red children is split (children
//! painted black, node painted red) *before* the descent continues; red-red
//! pairs left behind are then repaired with one or two rotations as the
//! recursion unwinds. The root is forced black after every insert.
//!
//! Each recursive step owns the subtree it is working on (`Box<Node>` by
//! value) and hands back the possibly rotated replacement, so no parent
//! pointers are needed.
//!
//! ```
//! use redwood_tree::{Color, RbTree};
//!
//! let mut tree = RbTree::new();
//! tree.insert_all([11, 14, 2, 1, 7, 5, 8, 4]).unwrap();
//!
//! let root = tree.root().unwrap();
//! assert_eq!((root.value(), root.color()), (7, Color::Black));
//! assert!(redwood_tree::validate(&tree).is_ok());
//! ```

mod error;
mod node;
mod traverse;
mod tree;
pub mod validate;

pub use error::TreeError;
pub use node::{Color, Node};
pub use traverse::{Traverse, Visit};
pub use tree::RbTree;
pub use validate::{InvariantViolation, TreeReport, validate};
