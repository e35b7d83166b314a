//! A simple, unbalanced Binary Search Tree built on the [`Tree`] arena.
//!
//! Every node's payload is its key. Keys in a node's left subtree are smaller than its own and
//! keys in its right subtree are larger. Nothing rebalances the tree, so inserting keys in sorted
//! order degrades it into a list.
//!
//! # Examples
//!
//! ```
//! use binary_trunk::SearchTree;
//!
//! let (mut tree, root) = SearchTree::with_root(0);
//! for key in 1..=3 {
//!     tree.insert(root, key);
//! }
//!
//! let two = tree.find(root, &2).unwrap();
//! assert_eq!(*tree.key(two), 2);
//! assert_eq!(tree.find(root, &42), None);
//!
//! // Every base tree operation is available too.
//! assert_eq!(tree.root(two), root);
//! assert!(tree.is_leaf(tree.find(root, &3).unwrap()));
//! ```

use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

use crate::export::JsonNode;
use crate::tree::{NodeId, Tree};

/// Type tag of a search tree node.
pub const SEARCH_NODE_NAME: &str = "BinarySearchTree";

/// An arena of search tree nodes keyed by `K`.
///
/// Dereferences to the underlying [`Tree`], so linkage, rotation, traversal and cloning work
/// exactly as they do for plain nodes.
#[derive(Clone, Debug)]
pub struct SearchTree<K> {
    tree: Tree<K>,
}

impl<K> Default for SearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Deref for SearchTree<K> {
    type Target = Tree<K>;

    fn deref(&self) -> &Tree<K> {
        &self.tree
    }
}

impl<K> DerefMut for SearchTree<K> {
    fn deref_mut(&mut self) -> &mut Tree<K> {
        &mut self.tree
    }
}

impl<K> From<Tree<K>> for SearchTree<K> {
    fn from(tree: Tree<K>) -> Self {
        Self { tree }
    }
}

impl<K> SearchTree<K> {
    /// Generate a new, empty arena.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// Generate an arena holding a single node with `key`, and return it with that node.
    pub fn with_root(key: K) -> (Self, NodeId) {
        let mut tree = Self::new();
        let root = tree.new_node(key);
        (tree, root)
    }

    /// The key of `id`.
    pub fn key(&self, id: NodeId) -> &K {
        self.tree.data(id)
    }

    /// Unwraps the underlying arena.
    pub fn into_inner(self) -> Tree<K> {
        self.tree
    }

    /// Human readable name of the nodes in this tree.
    pub fn name(&self) -> &'static str {
        SEARCH_NODE_NAME
    }

    /// Exports the subtree rooted at `id`, tagging every node as a search tree node.
    pub fn to_json(&self, id: NodeId) -> JsonNode {
        self.tree.export(id, SEARCH_NODE_NAME)
    }
}

impl<K> SearchTree<K>
where
    K: Ord,
{
    /// Inserts a node with `key` into the tree containing `from`, searching down from that
    /// tree's root. A key that is already present is not inserted again.
    ///
    /// Returns `from`, not the new node.
    pub fn insert(&mut self, from: NodeId, key: K) -> NodeId {
        let mut node = self.tree.root(from);
        loop {
            match key.cmp(self.key(node)) {
                Ordering::Less => match self.tree.left(node) {
                    Some(left) => node = left,
                    None => {
                        let child = self.tree.new_node(key);
                        self.tree.set_left(node, Some(child));
                        break;
                    }
                },
                Ordering::Equal => {
                    tracing::debug!(?node, "key already present, not inserting");
                    break;
                }
                Ordering::Greater => match self.tree.right(node) {
                    Some(right) => node = right,
                    None => {
                        let child = self.tree.new_node(key);
                        self.tree.set_right(node, Some(child));
                        break;
                    }
                },
            }
        }
        from
    }

    /// Potentially finds the node holding `key` in the tree containing `from`, searching down
    /// from that tree's root. If no node has the key, `None` is returned.
    pub fn find(&self, from: NodeId, key: &K) -> Option<NodeId> {
        let mut node = self.tree.root(from);
        loop {
            node = match key.cmp(self.key(node)) {
                Ordering::Less => self.tree.left(node)?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => self.tree.right(node)?,
            };
        }
    }
}
