use std::cmp::Ordering;

use crate::node::{Link, Node};

/// Which of the removal strategies unlinked a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Removal {
    /// The node had no children and was simply detached.
    Leaf,
    /// The node's only child took its place.
    SingleChild,
    /// The node had two children and its right child, having no left child, took its place.
    PromotedRight,
    /// The node had two children and took the key of its in-order successor, which was unlinked
    /// from deeper in the right subtree instead.
    Successor,
}

/// Walks down from `slot` to the link holding `key`, or to the empty link where `key` would be
/// attached. The returned link is the "parent's child pointer" for `key`, which may be the tree's
/// own root.
pub(crate) fn locate<'a, K>(mut slot: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
where
    K: Ord,
{
    loop {
        match slot.as_deref().map(|node| key.cmp(&node.key)) {
            None | Some(Ordering::Equal) => return slot,
            Some(ordering) => {
                let Some(node) = slot else { return slot };
                slot = match ordering {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                };
            }
        }
    }
}

/// Unlinks the leftmost node below `slot`, re-attaching its right child in its place. Returns
/// `None` when `slot` is empty.
pub(crate) fn detach_min<K>(mut slot: &mut Link<K>) -> Link<K> {
    while slot.as_ref().map_or(false, |node| node.left.is_some()) {
        slot = &mut slot.as_mut()?.left;
    }
    let mut min = slot.take()?;
    *slot = min.right.take();
    Some(min)
}

/// Deep copies the subtree under `link`, building each node only after both of its children.
pub(crate) fn clone_link<K>(link: &Link<K>) -> Link<K>
where
    K: Clone,
{
    // `false` means the node's children haven't been queued yet.
    let mut pending: Vec<(&Node<K>, bool)> =
        link.as_deref().map(|n| (n, false)).into_iter().collect();
    let mut built: Vec<Box<Node<K>>> = Vec::new();

    while let Some((node, children_built)) = pending.pop() {
        if children_built {
            // The right subtree was finished last so it's on top.
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
            }));
        } else {
            pending.push((node, true));
            pending.extend(node.right().map(|n| (n, false)));
            pending.extend(node.left().map(|n| (n, false)));
        }
    }

    built.pop()
}

/// Whether the subtrees under `a` and `b` have the same shape and the same keys in it.
pub(crate) fn links_eq<K>(a: &Link<K>, b: &Link<K>) -> bool
where
    K: PartialEq,
{
    let mut pending = vec![(a.as_deref(), b.as_deref())];
    while let Some(pair) = pending.pop() {
        match pair {
            (None, None) => {}
            (Some(a), Some(b)) if a.key == b.key => {
                pending.push((a.left(), b.left()));
                pending.push((a.right(), b.right()));
            }
            _ => return false,
        }
    }
    true
}
