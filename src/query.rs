//! Questions about the tree as a whole. Nothing here is cached; every answer is worked out from
//! the current shape of the tree.

use crate::node::Node;
use crate::tree::Tree;

impl<K> Tree<K> {
    /// The number of nodes on the longest path from the root down. An empty tree has height 0.
    pub fn height(&self) -> usize {
        self.depths().1
    }

    /// Reports whether the deepest path and the shallowest path differ by at most one node.
    ///
    /// A path ends wherever a child is missing, so a node with a single child ends a path on its
    /// empty side. That makes this a whole-tree shape check rather than the per-node balance of
    /// an AVL tree, and nothing is done to fix an unbalanced tree. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let bushy: Tree<_> = [10, 5, 15, 3, 7].into_iter().collect();
    /// assert!(bushy.is_balanced());
    ///
    /// let chain: Tree<_> = (1..=5).collect();
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let (shallowest, deepest) = self.depths();
        deepest - shallowest <= 1
    }

    /// The second largest key, or `None` if there are fewer than two keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), Some(&10));
    ///
    /// let tree: Tree<_> = [10].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), None);
    /// ```
    pub fn find_second_highest(&self) -> Option<&K> {
        let mut current = self.root()?;
        if current.is_leaf() {
            return None;
        }

        loop {
            match current.right() {
                // `current` is the largest key so the runner-up is the largest key below it.
                // `current` is never a leaf here, so that left subtree exists.
                None => return current.left().map(Node::max_key),
                // The right child is the largest key and has nothing under it.
                Some(right) if right.is_leaf() => return Some(&current.key),
                Some(right) => current = right,
            }
        }
    }

    /// The depths, in nodes, of the shallowest node missing a child and of the deepest node.
    /// Worked out one level at a time so a chain-shaped tree doesn't exhaust the call stack.
    fn depths(&self) -> (usize, usize) {
        let mut level: Vec<&Node<K>> = self.root().into_iter().collect();
        let mut shallowest = None;
        let mut depth = 0;

        while !level.is_empty() {
            depth += 1;
            let mut next = Vec::with_capacity(level.len() * 2);
            for node in level {
                if shallowest.is_none() && (node.left.is_none() || node.right.is_none()) {
                    shallowest = Some(depth);
                }
                next.extend(node.left());
                next.extend(node.right());
            }
            level = next;
        }

        (shallowest.unwrap_or(depth), depth)
    }
}
