//! This crate exposes a general purpose binary tree node and a simple Binary Search Tree built on
//! top of it.
//!
//! ## Binary Tree
//!
//! A binary tree is made of `Node`s. Each `Node` owns at most two children, a left one and a
//! right one, and knows which `Node` it hangs from (its parent). The parent link is only a
//! back-reference: a subtree belongs to whichever `Node` holds it in a child slot. The central
//! invariant is:
//!
//! 1. If a `Node` holds `child` in its left or right slot, then `child`'s parent is that `Node`.
//!
//! Nodes live in a [`Tree`] arena and are addressed with copyable [`NodeId`] handles, so moving
//! nodes around (see [`Tree::rotate`]) is a matter of rewriting a few handles.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Trees can be walked in preorder, inorder or postorder (see [`visit`]). A walk may be cut short
//! by returning [`STOP`] from the visit function.
//!
//! ## Binary Search Tree
//!
//! [`SearchTree`] keys every node and keeps the usual ordering invariants:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less than its own.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key greater than its own.
//!
//! Rotations keep these invariants, which makes the tree a convenient base for self-adjusting
//! trees. This one never balances itself, though.

#![deny(missing_docs)]

pub mod error;
pub mod export;
mod rotate;
pub mod search;
pub mod side;
pub mod tree;
pub mod visit;

pub use error::{Error, Result};
pub use export::{JsonNode, NODE_NAME};
pub use search::{SearchTree, SEARCH_NODE_NAME};
pub use side::{Side, LEFT, RIGHT};
pub use tree::{NodeId, NodeMut, NodeRef, Tree};
pub use visit::{Order, Visit, STOP};
