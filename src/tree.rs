//! The arena that owns every node of one or more binary trees.
//!
//! Nodes live in a `Vec` and refer to each other through [`NodeId`] handles.
//! The `left` and `right` links are the owning links of a tree; `parent` is a
//! back-reference used only for upward navigation.
//!
//! # Examples
//!
//! ```
//! use binary_trunk::{Side, Tree};
//!
//! let mut tree = Tree::new();
//! let left = tree.new_node(());
//! let right = tree.new_node(());
//! let root = tree.with_children((), Some(left), Some(right));
//!
//! assert_eq!(tree.parent(left), Some(root));
//! assert_eq!(tree.get_side(root, Some(right)), Ok(Side::Right));
//! assert_eq!(tree.sibling(left), Some(right));
//! assert_eq!(tree.root(right), root);
//! ```

use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::side::Side;

/// A handle to a node stored in a [`Tree`].
///
/// A handle is a slot index plus the generation of the slot when the node was created. Freeing
/// a node bumps its slot's generation, so a handle kept after [`Tree::remove_subtree`] never
/// names the node that later reuses the slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// The slot this handle points at.
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// How many times the slot had been freed when this handle was issued.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    data: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// An arena of binary tree nodes carrying a payload of type `T`.
///
/// A plain binary tree uses `()` as its payload. The arena can hold any
/// number of disjoint trees; [`Tree::root`] finds the tree a node belongs to.
///
/// Passing a handle that does not name a live node of this arena to any
/// accessor panics, the same way indexing a slice out of bounds does. Use
/// [`Tree::contains`] to check a handle first.
///
/// Links that still name a freed node (a parent reference left behind by
/// re-linking, for instance) read as absent.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    nodes: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty arena.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Generate a new, empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the arena holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `id` names a live node of this arena.
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(
            self.nodes.get(id.index()),
            Some(Slot { generation, node: Some(_) }) if *generation == id.generation
        )
    }

    /// Handles of every live node, in slot order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.node.as_ref().map(|_| NodeId {
                    index: i as u32,
                    generation: slot.generation,
                })
            })
    }

    /// Creates a standalone node with no children and no parent.
    pub fn new_node(&mut self, data: T) -> NodeId {
        let node = Node {
            data,
            left: None,
            right: None,
            parent: None,
        };
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.nodes[index as usize];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        assert!(
            self.nodes.len() < u32::MAX as usize,
            "binary tree arena is full"
        );
        let id = NodeId {
            index: self.nodes.len() as u32,
            generation: 0,
        };
        self.nodes.push(Slot {
            generation: 0,
            node: Some(node),
        });
        id
    }

    /// Creates a node and links the given children to it through the setters, so their parent
    /// references point at the new node.
    pub fn with_children(
        &mut self,
        data: T,
        left: Option<NodeId>,
        right: Option<NodeId>,
    ) -> NodeId {
        let id = self.new_node(data);
        if left.is_some() {
            self.set_left(id, left);
        }
        if right.is_some() {
            self.set_right(id, right);
        }
        id
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        match self.nodes.get(id.index()) {
            Some(Slot {
                generation,
                node: Some(node),
            }) if *generation == id.generation => node,
            _ => panic!("{id:?} does not name a live node"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.nodes.get_mut(id.index()) {
            Some(Slot {
                generation,
                node: Some(node),
            }) if *generation == id.generation => node,
            _ => panic!("{id:?} does not name a live node"),
        }
    }

    /// The payload of `id`.
    pub fn data(&self, id: NodeId) -> &T {
        &self.node(id).data
    }

    /// The payload of `id`, mutably.
    pub fn data_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.node_mut(id).data
    }

    /// Drops a link to a node that has since been freed.
    fn live(&self, link: Option<NodeId>) -> Option<NodeId> {
        link.filter(|&id| self.contains(id))
    }

    /// The left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.live(self.node(id).left)
    }

    /// The right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.live(self.node(id).right)
    }

    /// The child of `id` on `side`.
    pub fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left(id),
            Side::Right => self.right(id),
        }
    }

    /// The node `id` believes it is attached to, if that node is still alive.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.live(self.node(id).parent)
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.node_mut(id).parent = parent;
    }

    pub(crate) fn replace_left(&mut self, id: NodeId, left: Option<NodeId>) {
        self.node_mut(id).left = left;
    }

    pub(crate) fn replace_right(&mut self, id: NodeId, right: Option<NodeId>) {
        self.node_mut(id).right = right;
    }

    /// Sets the left child of `parent` to `child` and points `child` back at `parent`.
    ///
    /// The previous left child is not detached: its parent reference still names `parent`.
    /// Likewise `child` is not removed from any slot of its previous parent. Returns `parent` so
    /// calls can be chained.
    pub fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) -> NodeId {
        self.replace_left(parent, child);
        if let Some(child) = child {
            self.set_parent(child, Some(parent));
        }
        parent
    }

    /// Sets the right child of `parent` to `child` and points `child` back at `parent`.
    ///
    /// See [`Tree::set_left`] for what happens to the replaced child.
    pub fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) -> NodeId {
        self.replace_right(parent, child);
        if let Some(child) = child {
            self.set_parent(child, Some(parent));
        }
        parent
    }

    /// Sets the child of `parent` on `side`.
    pub fn set_child(&mut self, parent: NodeId, child: Option<NodeId>, side: Side) -> NodeId {
        match side {
            Side::Left => self.set_left(parent, child),
            Side::Right => self.set_right(parent, child),
        }
    }

    /// Sets the child of `parent` on the side named by the token `"left"` or `"right"`.
    ///
    /// Nothing is modified when the token is not recognized.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSide`] for any other token.
    pub fn set_side(&mut self, parent: NodeId, child: Option<NodeId>, side: &str) -> Result<NodeId> {
        let side: Side = side.parse()?;
        Ok(self.set_child(parent, child, side))
    }

    /// Which slot of `parent` holds `child`. An absent `child` matches an empty slot, left first.
    ///
    /// # Errors
    ///
    /// [`Error::NotAChild`] when `child` occupies neither slot.
    pub fn get_side(&self, parent: NodeId, child: Option<NodeId>) -> Result<Side> {
        if child == self.left(parent) {
            Ok(Side::Left)
        } else if child == self.right(parent) {
            Ok(Side::Right)
        } else {
            Err(Error::NotAChild { parent, child })
        }
    }

    /// The present children of `id`, left before right.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.left(id).into_iter().chain(self.right(id)).collect()
    }

    /// The other child of the parent of `id`.
    ///
    /// `None` when `id` has no parent, when the other slot is empty, or when the parent no longer
    /// holds `id` in either slot.
    pub fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        if self.left(parent) == Some(id) {
            self.right(parent)
        } else if self.right(parent) == Some(id) {
            self.left(parent)
        } else {
            None
        }
    }

    /// Whether `id` has no children.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.left(id).is_none() && self.right(id).is_none()
    }

    /// Follows parent references from `id` until reaching a node without one.
    pub fn root(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// A read-only view of `id`.
    pub fn get(&self, id: NodeId) -> NodeRef<'_, T> {
        // Fail on the bad handle here rather than on first use of the view.
        let _ = self.node(id);
        NodeRef { tree: self, id }
    }

    /// A mutable cursor on `id` whose setters chain.
    pub fn get_mut(&mut self, id: NodeId) -> NodeMut<'_, T> {
        let _ = self.node(id);
        NodeMut { tree: self, id }
    }

    /// Frees `id` and every node reachable from it through child links, and clears the slot of
    /// its parent that held it. Returns how many nodes were freed.
    ///
    /// Handles into the freed subtree become invalid, even after their slots are reused. Other
    /// nodes that still reference a freed node (a stale parent reference, or a child slot left
    /// over from re-linking) keep the link, but it reads as absent from then on.
    pub fn remove_subtree(&mut self, id: NodeId) -> usize {
        if let Some(parent) = self.parent(id) {
            let parent = self.node_mut(parent);
            if parent.left == Some(id) {
                parent.left = None;
            } else if parent.right == Some(id) {
                parent.right = None;
            }
        }

        let mut freed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let Some(slot) = self.nodes.get_mut(next.index()) else {
                continue;
            };
            if slot.generation != next.generation {
                continue;
            }
            let Some(node) = slot.node.take() else {
                continue;
            };
            slot.generation = slot.generation.wrapping_add(1);
            stack.extend(node.left);
            stack.extend(node.right);
            self.free.push(next.index);
            self.len -= 1;
            freed += 1;
        }

        tracing::trace!(node = ?id, freed, "removed subtree");
        freed
    }

    /// Copies the subtree rooted at `id` into this arena and returns the copy's root.
    ///
    /// Children of the copy are attached with the setters, so the copy has consistent parent
    /// references. The copy's root has no parent even if `id` does.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId
    where
        T: Clone,
    {
        let data = self.data(id).clone();
        let root = self.new_node(data);
        let mut copied = 1usize;

        let mut stack = vec![(id, root)];
        while let Some((source, copy)) = stack.pop() {
            if let Some(left) = self.left(source) {
                let data = self.data(left).clone();
                let child = self.new_node(data);
                self.set_left(copy, Some(child));
                stack.push((left, child));
                copied += 1;
            }
            if let Some(right) = self.right(source) {
                let data = self.data(right).clone();
                let child = self.new_node(data);
                self.set_right(copy, Some(child));
                stack.push((right, child));
                copied += 1;
            }
        }

        tracing::trace!(source = ?id, clone = ?root, copied, "cloned subtree");
        root
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        self.data(id)
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        self.data_mut(id)
    }
}

/// A read-only view of one node of a [`Tree`].
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    /// The handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The arena this node lives in.
    pub fn tree(&self) -> &'a Tree<T> {
        self.tree
    }

    /// The payload of this node.
    pub fn data(&self) -> &'a T {
        self.tree.data(self.id)
    }

    /// The left child.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.tree.left(self.id).map(|id| self.tree.get(id))
    }

    /// The right child.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.tree.right(self.id).map(|id| self.tree.get(id))
    }

    /// The parent.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.tree.parent(self.id).map(|id| self.tree.get(id))
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.tree.is_leaf(self.id)
    }
}

/// A mutable cursor on one node of a [`Tree`]. The setters return the cursor so calls chain.
///
/// ```
/// use binary_trunk::Tree;
///
/// let mut tree = Tree::new();
/// let (root, a, b) = (tree.new_node(()), tree.new_node(()), tree.new_node(()));
/// tree.get_mut(root).set_left(Some(a)).set_right(Some(b));
///
/// assert_eq!(tree.children(root), vec![a, b]);
/// ```
pub struct NodeMut<'a, T> {
    tree: &'a mut Tree<T>,
    id: NodeId,
}

impl<T> NodeMut<'_, T> {
    /// The handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The payload of this node.
    pub fn data(&mut self) -> &mut T {
        self.tree.data_mut(self.id)
    }

    /// See [`Tree::set_left`].
    pub fn set_left(&mut self, child: Option<NodeId>) -> &mut Self {
        self.tree.set_left(self.id, child);
        self
    }

    /// See [`Tree::set_right`].
    pub fn set_right(&mut self, child: Option<NodeId>) -> &mut Self {
        self.tree.set_right(self.id, child);
        self
    }

    /// See [`Tree::set_side`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSide`] for an unrecognized token.
    pub fn set_side(&mut self, child: Option<NodeId>, side: &str) -> Result<&mut Self> {
        self.tree.set_side(self.id, child, side)?;
        Ok(self)
    }

    /// See [`Tree::rotate`].
    pub fn rotate(&mut self) -> &mut Self {
        self.tree.rotate(self.id);
        self
    }
}
