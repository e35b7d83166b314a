use binary_trunk::{NodeId, SearchTree, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and rotations we have the same set of keys in both.
fn do_ops(ops: &[Op<i8>], tree: &mut SearchTree<i8>, root: NodeId, set: &mut BTreeSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(root, *k);
                set.insert(*k);
            }
            Op::Rotate(k) => {
                if let Some(node) = tree.find(root, k) {
                    tree.rotate(node);
                }
            }
            Op::Walk => {
                assert!(inorder(tree, tree.root(root)).into_iter().eq(set.iter().copied()));
            }
        }
    }
}

fn inorder(tree: &Tree<i8>, id: NodeId) -> Vec<i8> {
    let mut keys = Vec::new();
    tree.visit_inorder(id, |node, _| keys.push(*node.data()));
    keys
}

/// Every child points back at the node that holds it.
fn linked(tree: &Tree<i8>) -> bool {
    tree.ids().all(|id| {
        tree.children(id)
            .into_iter()
            .all(|child| tree.parent(child) == Some(id))
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let (mut tree, root) = SearchTree::with_root(0);
    let mut set = BTreeSet::from([0]);

    do_ops(&ops, &mut tree, root, &mut set);
    set.iter().all(|key| tree.find(root, key).is_some())
        && tree.len() == set.len()
        && linked(&tree)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let (mut tree, root) = SearchTree::with_root(0);
    for x in &xs {
        tree.insert(root, *x);
    }

    xs.iter()
        .all(|x| tree.find(root, x).map(|n| tree.key(n)) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let (mut tree, root) = SearchTree::with_root(0);
    for x in &xs {
        tree.insert(root, *x);
    }
    let mut added: BTreeSet<_> = xs.into_iter().collect();
    added.insert(0);
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(root, x).is_none())
}

#[quickcheck]
fn rotations_keep_order(xs: Vec<i8>, rotations: Vec<i8>) -> bool {
    let (mut tree, root) = SearchTree::with_root(0);
    for x in &xs {
        tree.insert(root, *x);
    }
    for r in &rotations {
        if let Some(node) = tree.find(root, r) {
            tree.rotate(node);
        }
    }

    let keys = inorder(&tree, tree.root(root));
    keys.windows(2).all(|w| w[0] < w[1]) && linked(&tree)
}

#[quickcheck]
fn clone_matches_subtree(xs: Vec<i8>, at: i8) -> bool {
    let (mut tree, root) = SearchTree::with_root(0);
    for x in &xs {
        tree.insert(root, *x);
    }
    let Some(node) = tree.find(root, &at) else {
        return true;
    };

    let clone = tree.clone_subtree(node);
    tree.parent(clone).is_none()
        && inorder(&tree, clone) == inorder(&tree, node)
        && tree.to_json(clone) == tree.to_json(node)
}
