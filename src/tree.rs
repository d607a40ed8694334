//! An unbalanced, owning BST. Every node owns its children through a `Box`, so the tree is a
//! plain ownership hierarchy with no parent pointers and no `unsafe`. Nothing rebalances the
//! tree; [`Tree::is_balanced`] only reports on its shape.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! // Inserts can be chained.
//! tree.insert(10).insert(5).insert(15);
//! assert_eq!(tree.find(&5).map(|n| *n.key()), Some(5));
//!
//! // Inserting an existing key does nothing.
//! tree.insert(5);
//! assert_eq!(tree.len(), 3);
//!
//! // Removing a node hands its key back.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.remove(&5), None);
//! assert_eq!(tree.dfs_in_order(), [&10, &15]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::error::TreeError;
use crate::node::{Link, Node};
use crate::traversal::InOrder;
use crate::util::{self, Removal};

/// A Binary Search Tree of unique keys. This can be used for inserting, finding, and removing
/// keys, and for walking them in several orders.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Dropping the root `Box` directly would recurse once per level, which a chain-shaped tree
    // can turn into a stack overflow.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: util::clone_link(&self.root),
            len: self.len,
        }
    }
}

impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    /// Trees are equal when they have the same keys arranged in the same shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && util::links_eq(&self.root, &other.root)
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    // Inserting the keys in level order rebuilds the same tree, so this pins down its shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("bfs", &self.bfs())
            .finish()
    }
}

impl<K> From<Node<K>> for Tree<K> {
    fn from(root: Node<K>) -> Self {
        Self::with_root(root)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Wraps a hand-built node graph in a `Tree` without checking it. If the keys aren't
    /// ordered the tree's searches will give wrong answers, so outside of test fixtures prefer
    /// [`Tree::try_with_root`].
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Node, Tree};
    ///
    /// let tree = Tree::with_root(Node::with_children(2, Some(Node::new(1)), None));
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.dfs_pre_order(), [&2, &1]);
    /// ```
    pub fn with_root(root: Node<K>) -> Self {
        let len = InOrder::new(Some(&root)).count();
        trace!(len, "seeded tree with a pre-built root");
        Self {
            root: Some(Box::new(root)),
            len,
        }
    }

    /// Wraps a hand-built node graph in a `Tree` after checking that every key is strictly
    /// between the bounds its ancestors put on it.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Node, Tree, TreeError};
    ///
    /// let good = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// assert!(Tree::try_with_root(good).is_ok());
    ///
    /// let bad = Node::with_children(2, Some(Node::new(3)), None);
    /// assert_eq!(
    ///     Tree::try_with_root(bad),
    ///     Err(TreeError::OutOfOrder { depth: 2 })
    /// );
    /// ```
    pub fn try_with_root(root: Node<K>) -> Result<Self, TreeError>
    where
        K: Ord,
    {
        let len = check_order(&root).map_err(|error| {
            debug!(%error, "rejected pre-built root");
            error
        })?;
        trace!(len, "seeded tree with a validated root");
        Ok(Self {
            root: Some(Box::new(root)),
            len,
        })
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Inserts `key` as a new leaf, walking down from the root with a loop. Inserting a key that
    /// is already present leaves the tree untouched. Returns the tree so inserts can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).insert(1).insert(3).insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.dfs_pre_order(), [&2, &1, &3]);
    /// ```
    pub fn insert(&mut self, key: K) -> &mut Self
    where
        K: Ord,
    {
        let slot = util::locate(&mut self.root, &key);
        if slot.is_some() {
            trace!(len = self.len, "ignored duplicate key");
        } else {
            *slot = Some(Node::new_boxed(key));
            self.len += 1;
            trace!(len = self.len, "inserted key");
        }
        self
    }

    /// Same as [`Tree::insert`] but descends by recursion. Both build identical trees for
    /// identical input.
    pub fn insert_recursive(&mut self, key: K) -> &mut Self
    where
        K: Ord,
    {
        let inserted = if let Some(root) = self.root.as_mut() {
            root.insert(key)
        } else {
            self.root = Some(Node::new_boxed(key));
            true
        };

        if inserted {
            self.len += 1;
            trace!(len = self.len, "inserted key");
        } else {
            trace!(len = self.len, "ignored duplicate key");
        }
        self
    }

    /// Potentially finds the node holding `key`, walking down from the root with a loop. A
    /// missing key gives `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.key()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Same as [`Tree::find`] but descends by recursion.
    pub fn find_recursive(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root().and_then(|root| root.find(key))
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// The smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        self.root().map(Node::min_key)
    }

    /// The largest key, if any.
    pub fn max(&self) -> Option<&K> {
        self.root().map(Node::max_key)
    }

    /// Removes the node holding `key` and returns the key it held. If the tree does not contain
    /// `key`, nothing happens and `None` is returned.
    ///
    /// A node with two children keeps its place in the tree and takes over the key of its
    /// in-order successor, which is unlinked instead. The exception is when the right child is
    /// itself the successor, in which case the right child is moved up.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [10, 5, 15, 3, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.dfs_in_order(), [&3, &7, &10, &15]);
    /// assert_eq!(tree.remove(&5), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let slot = util::locate(&mut self.root, key);
        let Some(mut node) = slot.take() else {
            trace!(len = self.len, "key to remove not found");
            return None;
        };

        let (removed, removal) = match (node.left.take(), node.right.take()) {
            (None, None) => (node.key, Removal::Leaf),
            (Some(child), None) | (None, Some(child)) => {
                *slot = Some(child);
                (node.key, Removal::SingleChild)
            }
            (Some(left), Some(mut right)) => match util::detach_min(&mut right.left) {
                None => {
                    right.left = Some(left);
                    *slot = Some(right);
                    (node.key, Removal::PromotedRight)
                }
                Some(successor) => {
                    let removed = mem::replace(&mut node.key, successor.key);
                    node.left = Some(left);
                    node.right = Some(right);
                    *slot = Some(node);
                    (removed, Removal::Successor)
                }
            },
        };

        self.len -= 1;
        trace!(len = self.len, ?removal, "removed key");
        Some(removed)
    }
}

/// Checks the ordering of every key under `root` against the bounds set by its ancestors and
/// returns how many nodes there are.
fn check_order<K>(root: &Node<K>) -> Result<usize, TreeError>
where
    K: Ord,
{
    let mut pending = vec![(root, None, None, 1)];
    let mut len = 0;

    while let Some((node, lower, upper, depth)) = pending.pop() {
        if let Some(lower) = lower {
            match node.key.cmp(lower) {
                Ordering::Less => return Err(TreeError::OutOfOrder { depth }),
                Ordering::Equal => return Err(TreeError::DuplicateKey { depth }),
                Ordering::Greater => {}
            }
        }
        if let Some(upper) = upper {
            match node.key.cmp(upper) {
                Ordering::Less => {}
                Ordering::Equal => return Err(TreeError::DuplicateKey { depth }),
                Ordering::Greater => return Err(TreeError::OutOfOrder { depth }),
            }
        }

        len += 1;
        if let Some(left) = node.left() {
            pending.push((left, lower, Some(&node.key), depth + 1));
        }
        if let Some(right) = node.right() {
            pending.push((right, Some(&node.key), upper, depth + 1));
        }
    }

    Ok(len)
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts
    /// and removals we have the same set of keys in both.
    fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
    where
        K: Ord + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(k) => {
                    bst.insert(k.clone());
                    set.insert(k.clone());
                }
                Op::InsertRecursive(k) => {
                    bst.insert_recursive(k.clone());
                    set.insert(k.clone());
                }
                Op::Remove(k) => {
                    assert_eq!(bst.remove(k), set.take(k));
                }
                Op::Traverse => {
                    assert!(bst.dfs_in_order().into_iter().eq(set.iter()));
                }
            }
            assert_eq!(bst.len(), set.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            set.iter().all(|key| tree.find(key).map(Node::key) == Some(key))
                && check_order_of(&tree)
        }
    }

    quickcheck::quickcheck! {
        fn iterative_and_recursive_insert_agree(xs: Vec<i8>) -> bool {
            let mut iterative = Tree::new();
            let mut recursive = Tree::new();
            for x in &xs {
                iterative.insert(*x);
                recursive.insert_recursive(*x);
            }

            iterative == recursive
        }
    }

    fn check_order_of<K: Ord>(tree: &Tree<K>) -> bool {
        tree.root()
            .map_or(true, |root| check_order(root) == Ok(tree.len()))
    }
}
