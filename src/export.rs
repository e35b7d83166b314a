//! Structured and textual dumps of a subtree, for debugging and interop.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tree::{NodeId, NodeRef, Tree};

/// Type tag of a plain binary tree node.
pub const NODE_NAME: &str = "BinaryTreeNode";

/// The nested export of one node: its type tag and the exports of its children, left first.
///
/// Serializes as `{ "name": ..., "children": [...] }`. This is meant for inspection and is not a
/// format a tree can be rebuilt from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonNode {
    /// Human readable type tag of the node.
    pub name: String,
    /// Exports of the present children.
    pub children: Vec<JsonNode>,
}

impl<T> Tree<T> {
    /// Human readable name of the nodes in this tree.
    pub fn name(&self) -> &'static str {
        NODE_NAME
    }

    /// Exports the subtree rooted at `id`.
    ///
    /// ```
    /// use binary_trunk::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let (a, b) = (tree.new_node(()), tree.new_node(()));
    /// let root = tree.with_children((), Some(a), Some(b));
    ///
    /// let json = serde_json::to_value(tree.to_json(root)).unwrap();
    /// assert_eq!(json["name"], "BinaryTreeNode");
    /// assert_eq!(json["children"].as_array().unwrap().len(), 2);
    /// ```
    pub fn to_json(&self, id: NodeId) -> JsonNode {
        self.export(id, NODE_NAME)
    }

    pub(crate) fn export(&self, id: NodeId, name: &str) -> JsonNode {
        // A postorder walk finishes both children right before their parent, so they are the
        // last entries of `built` when the parent is reached.
        let mut built: Vec<JsonNode> = Vec::new();
        self.visit_postorder(id, |node, _| {
            let count = self.children(node.id()).len();
            let children = built.split_off(built.len() - count);
            built.push(JsonNode {
                name: name.to_owned(),
                children,
            });
        });
        built.pop().unwrap_or_else(|| JsonNode {
            name: name.to_owned(),
            children: Vec::new(),
        })
    }
}

/// Unlinks descendants one at a time so dropping a deep export does not recurse.
impl Drop for JsonNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

enum Piece {
    Node(NodeId),
    Text(&'static str),
}

/// Renders `left right`, with absent children as `null` and present ones parenthesized.
impl<T> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree();
        let mut pending = vec![Piece::Node(self.id())];
        while let Some(piece) = pending.pop() {
            let id = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Node(id) => id,
            };
            // Pushed back to front: `(left) (right)`.
            for (i, child) in [tree.right(id), tree.left(id)].into_iter().enumerate() {
                match child {
                    Some(child) => pending.extend([
                        Piece::Text(")"),
                        Piece::Node(child),
                        Piece::Text("("),
                    ]),
                    None => pending.push(Piece::Text("null")),
                }
                if i == 0 {
                    pending.push(Piece::Text(" "));
                }
            }
        }
        Ok(())
    }
}
