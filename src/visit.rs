//! Depth-first traversals with early termination.
//!
//! Each traversal calls a visit function with the node, its depth and a user data value that is
//! passed through unchanged. A visit function may return [`STOP`] to abort the whole traversal;
//! any other return value, including `()`, lets it carry on.

use crate::tree::{NodeId, NodeRef, Tree};

/// What a traversal should do after visiting a node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visit {
    /// Keep walking.
    #[default]
    Continue,
    /// Abort the traversal at every level.
    Stop,
}

/// Return this from a visit function to abort a traversal.
pub const STOP: Visit = Visit::Stop;

impl From<()> for Visit {
    fn from(_: ()) -> Self {
        Visit::Continue
    }
}

fn signal<R: Into<Visit>>(returned: R) -> Visit {
    returned.into()
}

/// When a node is visited relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Visit, left, right.
    Preorder,
    /// Left, visit, right.
    Inorder,
    /// Left, right, visit.
    Postorder,
}

impl<T> Tree<T> {
    /// Walks the subtree at `id` in the given `order`, starting at `depth`. Returns
    /// [`Visit::Stop`] if the visit function aborted the walk.
    pub fn visit<D, R, F>(&self, order: Order, id: NodeId, depth: usize, data: &D, mut f: F) -> Visit
    where
        D: ?Sized,
        R: Into<Visit>,
        F: FnMut(NodeRef<'_, T>, usize, &D) -> R,
    {
        self.walk(order, id, depth, data, &mut f)
    }

    fn walk<D, R, F>(&self, order: Order, id: NodeId, depth: usize, data: &D, f: &mut F) -> Visit
    where
        D: ?Sized,
        R: Into<Visit>,
        F: FnMut(NodeRef<'_, T>, usize, &D) -> R,
    {
        // Frames are popped in visiting order; `true` marks a node whose subtrees are already
        // scheduled, so the next pop of it is the visit itself.
        let mut stack = vec![(id, depth, false)];
        while let Some((id, depth, expanded)) = stack.pop() {
            if expanded {
                if signal(f(self.get(id), depth, data)) == Visit::Stop {
                    return Visit::Stop;
                }
                continue;
            }

            let left = self.left(id).map(|left| (left, depth + 1, false));
            let right = self.right(id).map(|right| (right, depth + 1, false));
            let visit = Some((id, depth, true));
            let frames = match order {
                Order::Preorder => [right, left, visit],
                Order::Inorder => [right, visit, left],
                Order::Postorder => [visit, right, left],
            };
            stack.extend(frames.into_iter().flatten());
        }
        Visit::Continue
    }

    /// Preorder walk (*visit, left, right*) from depth 0.
    ///
    /// ```
    /// use binary_trunk::{SearchTree, Visit, STOP};
    ///
    /// let (mut tree, root) = SearchTree::with_root(0);
    /// for key in [-1, 1] {
    ///     tree.insert(root, key);
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.visit_preorder(root, |node, _depth| keys.push(*node.data()));
    /// assert_eq!(keys, [0, -1, 1]);
    ///
    /// let mut seen = 0;
    /// tree.visit_preorder(root, |node, _depth| {
    ///     seen += 1;
    ///     if *node.data() == -1 { STOP } else { Visit::Continue }
    /// });
    /// assert_eq!(seen, 2);
    /// ```
    pub fn visit_preorder<R, F>(&self, id: NodeId, mut f: F) -> Visit
    where
        R: Into<Visit>,
        F: FnMut(NodeRef<'_, T>, usize) -> R,
    {
        self.visit(Order::Preorder, id, 0, &(), |node, depth, _| f(node, depth))
    }

    /// Inorder walk (*left, visit, right*) from depth 0.
    pub fn visit_inorder<R, F>(&self, id: NodeId, mut f: F) -> Visit
    where
        R: Into<Visit>,
        F: FnMut(NodeRef<'_, T>, usize) -> R,
    {
        self.visit(Order::Inorder, id, 0, &(), |node, depth, _| f(node, depth))
    }

    /// Postorder walk (*left, right, visit*) from depth 0.
    pub fn visit_postorder<R, F>(&self, id: NodeId, mut f: F) -> Visit
    where
        R: Into<Visit>,
        F: FnMut(NodeRef<'_, T>, usize) -> R,
    {
        self.visit(Order::Postorder, id, 0, &(), |node, depth, _| f(node, depth))
    }

    /// Preorder walk with an explicit starting depth and user data.
    pub fn visit_preorder_with<D, R, F>(&self, id: NodeId, depth: usize, data: &D, f: F) -> Visit
    where
        D: ?Sized,
        R: Into<Visit>,
        F: FnMut(NodeRef<'_, T>, usize, &D) -> R,
    {
        self.visit(Order::Preorder, id, depth, data, f)
    }

    /// Inorder walk with an explicit starting depth and user data.
    pub fn visit_inorder_with<D, R, F>(&self, id: NodeId, depth: usize, data: &D, f: F) -> Visit
    where
        D: ?Sized,
        R: Into<Visit>,
        F: FnMut(NodeRef<'_, T>, usize, &D) -> R,
    {
        self.visit(Order::Inorder, id, depth, data, f)
    }

    /// Postorder walk with an explicit starting depth and user data.
    pub fn visit_postorder_with<D, R, F>(&self, id: NodeId, depth: usize, data: &D, f: F) -> Visit
    where
        D: ?Sized,
        R: Into<Visit>,
        F: FnMut(NodeRef<'_, T>, usize, &D) -> R,
    {
        self.visit(Order::Postorder, id, depth, data, f)
    }
}
