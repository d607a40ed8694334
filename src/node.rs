//! The building block of a [`Tree`][crate::Tree].

use std::fmt;

use crate::util;

/// An owning link to a child. The tree's root is one of these too, which is what lets removal
/// rewrite "the parent's child pointer" without knowing whether the parent is a node or the tree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single element of a [`Tree`][crate::Tree]. A `Node` owns its children outright so the whole
/// structure is a strict ownership tree with no back pointers.
///
/// Nodes are read-only once they are inside a tree. Building them by hand is mostly useful for
/// test fixtures with [`Tree::with_root`][crate::Tree::with_root].
///
/// # Examples
///
/// ```
/// use plain_bst::Node;
///
/// let node = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
///
/// assert_eq!(node.key(), &2);
/// assert_eq!(node.left().map(Node::key), Some(&1));
/// assert_eq!(node.right().map(Node::key), Some(&3));
/// assert!(!node.is_leaf());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

// The derived versions of these recurse once per level, which a chain-shaped subtree turns into
// a stack overflow.

impl<K> Clone for Node<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            left: util::clone_link(&self.left),
            right: util::clone_link(&self.right),
        }
    }
}

impl<K> PartialEq for Node<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && util::links_eq(&self.left, &other.left)
            && util::links_eq(&self.right, &other.right)
    }
}

impl<K> Eq for Node<K> where K: Eq {}

/// Only shows the keys of the immediate children.
impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K> Node<K> {
    /// Creates a leaf holding `key`.
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Creates a node with the given children. Nothing checks that the keys are ordered; use
    /// [`Tree::try_with_root`][crate::Tree::try_with_root] for that.
    pub fn with_children(key: K, left: Option<Node<K>>, right: Option<Node<K>>) -> Self {
        Self {
            key,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self::new(key))
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child, whose subtree only holds smaller keys.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, whose subtree only holds larger keys.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recursively finds the node holding `key` in the subtree rooted here.
    pub(crate) fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            std::cmp::Ordering::Less => self.left(),
            std::cmp::Ordering::Equal => return Some(self),
            std::cmp::Ordering::Greater => self.right(),
        };
        child.and_then(|n| n.find(key))
    }

    /// Recursively attaches a new leaf for `key` below this node. Returns `false`, leaving the
    /// subtree untouched, when `key` is already present.
    pub(crate) fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            std::cmp::Ordering::Less => &mut self.left,
            std::cmp::Ordering::Equal => return false,
            std::cmp::Ordering::Greater => &mut self.right,
        };
        match child {
            Some(n) => n.insert(key),
            None => {
                *child = Some(Self::new_boxed(key));
                true
            }
        }
    }

    /// The largest key in the subtree rooted here, found at the end of its right spine.
    pub(crate) fn max_key(&self) -> &K {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        &current.key
    }

    /// The smallest key in the subtree rooted here, found at the end of its left spine.
    pub(crate) fn min_key(&self) -> &K {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        &current.key
    }
}
