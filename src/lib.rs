//! This crate is a plain, unbalanced Binary Search Tree written mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). This tree makes no attempt to keep
//! its height at `O(lg N)`: inserting keys in sorted order builds a chain whose height
//! is `N`. [`Tree::is_balanced`] will tell you when that has happened, and the
//! iterative operations ([`Tree::insert`], [`Tree::find`], [`Tree::remove`],
//! [`Tree::iter`]) keep working on such trees without growing the call stack.
//!
//! BSTs naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree. The [`traversal`] module has that order and
//! the other common ones.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(10).insert(5).insert(15).insert(3).insert(7);
//!
//! assert_eq!(tree.dfs_in_order(), [&3, &5, &7, &10, &15]);
//! assert_eq!(tree.find_second_highest(), Some(&10));
//! assert!(tree.is_balanced());
//!
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.dfs_in_order(), [&3, &7, &10, &15]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod query;
#[cfg(feature = "serde")]
mod serialize;
pub mod traversal;
mod tree;
mod util;

pub use error::TreeError;
pub use node::Node;
pub use traversal::InOrder;
pub use tree::Tree;
