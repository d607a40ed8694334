use plain_bst::{Node, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
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
            Op::Remove(k) => {
                assert_eq!(bst.remove(k), set.take(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let keys = tree.dfs_in_order();

    keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn iterative_in_order_matches_recursive(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.dfs_in_order_iterative() == tree.dfs_in_order()
}

#[quickcheck]
fn traversals_visit_every_key_once(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected: BTreeSet<_> = xs.iter().collect();

    let all_visited = [tree.dfs_pre_order(), tree.dfs_post_order(), tree.bfs()]
        .into_iter()
        .all(|mut keys| {
            keys.sort();
            keys.into_iter().eq(expected.iter().copied())
        });
    all_visited
}

#[quickcheck]
fn pre_order_rebuilds_the_same_tree(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let rebuilt: Tree<_> = tree.dfs_pre_order().into_iter().copied().collect();

    rebuilt == tree
}

#[quickcheck]
fn iterative_and_recursive_agree(xs: Vec<i8>, lookups: Vec<i8>) -> bool {
    let mut iterative = Tree::new();
    let mut recursive = Tree::new();
    for x in &xs {
        iterative.insert(*x);
        recursive.insert_recursive(*x);
    }

    iterative == recursive
        && lookups.iter().all(|p| {
            iterative.find(p).map(Node::key) == recursive.find_recursive(p).map(Node::key)
        })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x).map(Node::key) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn duplicate_inserts_do_not_grow(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let len = tree.len();
    for x in &xs {
        tree.insert(*x);
    }

    tree.len() == len && len == xs.iter().collect::<HashSet<_>>().len()
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut len = tree.len();

    for remove in &removes {
        let removed = tree.remove(remove);
        if removed.is_some() {
            len -= 1;
        }
        if removed.map_or(false, |key| key != *remove) || tree.len() != len {
            return false;
        }
    }

    let mut still_present = xs;
    still_present.retain(|x| !removes.contains(x));

    removes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn second_highest_matches_sorted(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let sorted: BTreeSet<_> = xs.iter().collect();

    tree.find_second_highest() == sorted.iter().rev().nth(1).copied()
}

#[quickcheck]
fn balanced_means_close_depths(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    // A perfectly bushy tree of this many keys can't be shallower than lg(len + 1).
    let min_height = usize::BITS - tree.len().leading_zeros();
    let chain = tree.len() > 2 && tree.height() == tree.len();

    tree.height() >= min_height as usize && !(chain && tree.is_balanced())
}
