//! Walking every key of a [`Tree`].
//!
//! The depth-first orders are written the textbook way, with one call per node. That costs call
//! stack proportional to the tree's height, which for a tree built from sorted input is its
//! length. [`Tree::dfs_in_order_iterative`] and [`Tree::iter`] keep their stack on the heap
//! instead and are the ones to reach for on large or adversarial input.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let tree: Tree<_> = [10, 5, 15, 3, 7].into_iter().collect();
//!
//! assert_eq!(tree.dfs_pre_order(), [&10, &5, &3, &7, &15]);
//! assert_eq!(tree.dfs_in_order(), [&3, &5, &7, &10, &15]);
//! assert_eq!(tree.dfs_post_order(), [&3, &7, &5, &15, &10]);
//! assert_eq!(tree.bfs(), [&10, &5, &15, &3, &7]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;
use crate::tree::Tree;

impl<K> Tree<K> {
    /// Keys in pre-order: each node, then its left subtree, then its right subtree.
    pub fn dfs_pre_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            root.pre_order(&mut keys);
        }
        keys
    }

    /// Keys in in-order: each node's left subtree, then the node, then its right subtree. For a
    /// search tree that is ascending order.
    pub fn dfs_in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            root.in_order(&mut keys);
        }
        keys
    }

    /// Keys in post-order: each node's left subtree, then its right subtree, then the node.
    pub fn dfs_post_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            root.post_order(&mut keys);
        }
        keys
    }

    /// Keys level by level from the root, left to right within each level.
    pub fn bfs(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut queue: VecDeque<&Node<K>> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            keys.push(node.key());
            queue.extend(node.left());
            queue.extend(node.right());
        }
        keys
    }

    /// The same keys as [`Tree::dfs_in_order`], gathered with an explicit stack rather than
    /// recursion.
    pub fn dfs_in_order_iterative(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// A lazy in-order (ascending) iterator over the keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1].into_iter().collect();
    /// let mut keys = tree.iter();
    ///
    /// assert_eq!(keys.next(), Some(&1));
    /// assert_eq!(keys.next(), Some(&2));
    /// assert_eq!(keys.next(), Some(&3));
    /// assert_eq!(keys.next(), None);
    /// ```
    pub fn iter(&self) -> InOrder<'_, K> {
        InOrder::new(self.root())
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Node<K> {
    fn pre_order<'a>(&'a self, keys: &mut Vec<&'a K>) {
        keys.push(&self.key);
        if let Some(left) = self.left() {
            left.pre_order(keys);
        }
        if let Some(right) = self.right() {
            right.pre_order(keys);
        }
    }

    fn in_order<'a>(&'a self, keys: &mut Vec<&'a K>) {
        if let Some(left) = self.left() {
            left.in_order(keys);
        }
        keys.push(&self.key);
        if let Some(right) = self.right() {
            right.in_order(keys);
        }
    }

    fn post_order<'a>(&'a self, keys: &mut Vec<&'a K>) {
        if let Some(left) = self.left() {
            left.post_order(keys);
        }
        if let Some(right) = self.right() {
            right.post_order(keys);
        }
        keys.push(&self.key);
    }
}

/// Iterator over a subtree's keys in ascending order. Created by [`Tree::iter`].
///
/// The stack holds the nodes whose left subtree is being (or has been) visited but which
/// haven't been yielded yet, so it never grows past the height of the tree.
#[derive(Clone, Debug)]
pub struct InOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.key)
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}
