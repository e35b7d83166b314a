use crate::tree::{NodeId, Tree};

impl<T> Tree<T> {
    /// Rotate `id` above its parent. This moves `id` up one level and its parent down one level
    /// without changing the in-order sequence of the tree.
    ///
    /// A node without a parent is left alone.
    ///
    /// # Diagram
    ///
    /// Rotating `node` when it is the left child of `parent`:
    ///
    /// ```text
    ///       Option<grandparent>          Option<grandparent>
    ///          /                            /
    ///       parent                        node
    ///       /    \                        /   \
    ///    node     z      rotate ->       x   parent
    ///    /  \                                 /  \
    ///   x    y                               y    z
    /// ```
    ///
    /// Rotating a right child is the mirror image.
    ///
    /// Which side `id` sits on is decided by comparing it against the parent's left slot, so a
    /// node whose parent no longer holds it is treated as a right child. The grandparent slot is
    /// chosen the same way: its left slot is replaced if it held the parent, otherwise its right
    /// slot is.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_trunk::SearchTree;
    ///
    /// let (mut tree, root) = SearchTree::with_root(2);
    /// tree.insert(root, 1);
    /// tree.insert(root, 3);
    ///
    /// let one = tree.find(root, &1).unwrap();
    /// tree.rotate(one);
    ///
    /// assert_eq!(tree.root(root), one);
    /// assert_eq!(tree.right(one), Some(root));
    /// assert_eq!(tree.find(one, &3).map(|n| *tree.key(n)), Some(3));
    /// ```
    pub fn rotate(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            tracing::debug!(node = ?id, "rotate on a node without a parent is a no-op");
            return;
        };
        let grandparent = self.parent(parent);

        if self.left(parent) == Some(id) {
            // The inner grandchild `y` swaps over to the parent.
            let inner = self.right(id);
            self.set_left(parent, inner);
            self.replace_right(id, Some(parent));
        } else {
            let inner = self.left(id);
            self.set_right(parent, inner);
            self.replace_left(id, Some(parent));
        }
        self.set_parent(parent, Some(id));
        self.set_parent(id, grandparent);

        if let Some(grandparent) = grandparent {
            if self.left(grandparent) == Some(parent) {
                self.replace_left(grandparent, Some(id));
            } else {
                self.replace_right(grandparent, Some(id));
            }
        }

        tracing::trace!(node = ?id, ?parent, ?grandparent, "rotated");
    }
}
