//! Node module for binary tree representation.

use std::fmt;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

// =#========================================================================#=
// SIDE
// =#========================================================================#=
/// Which child slot of a node is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node (vertex) of a [BinaryTree](crate::model::BinaryTree).
///
/// Nodes live in the arena of their tree and refer to each other only via
/// [NodeIndex]. The tree owns all of them, so none of the references below
/// keeps anything alive.
///
/// # Invariants
/// - `index` is the position of this node in the arena
/// - `left`/`right` are the child slots; `None` means absent, independent of
///   the value stored in the node (a `0` is still a node)
/// - `parent` is `None` exactly for the root
/// - `prev`/`next` link nodes of the same depth from left to right; they are
///   only correct after the connect pass
///   ([`BinaryTree::connect`](crate::model::BinaryTree::connect))
///
/// # Equality
/// Two nodes are equal if their values are equal; children are not compared.
/// Use equality of [BinaryTree](crate::model::BinaryTree) to compare shapes.
#[derive(Debug, Clone)]
pub struct Node<V> {
    index: NodeIndex,
    value: V,
    left: Option<NodeIndex>,
    right: Option<NodeIndex>,
    parent: Option<NodeIndex>,
    prev: Option<NodeIndex>,
    next: Option<NodeIndex>,
}

impl<V> Node<V> {
    /// Creates a new detached node without children, parent or neighbours.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `value` - The payload of this node
    pub fn new(index: NodeIndex, value: V) -> Self {
        Node {
            index,
            value,
            left: None,
            right: None,
            parent: None,
            prev: None,
            next: None,
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns a reference to the value of this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the node, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Returns the index of the left child, if any.
    pub fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    /// Returns the index of the right child, if any.
    pub fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Returns the index of the child on the given side, if any.
    pub fn child(&self, side: Side) -> Option<NodeIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Returns both child slots as `(left, right)`.
    pub fn children(&self) -> (Option<NodeIndex>, Option<NodeIndex>) {
        (self.left, self.right)
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns the previous node on the same level, if connected.
    pub fn prev(&self) -> Option<NodeIndex> {
        self.prev
    }

    /// Returns the next node on the same level, if connected.
    pub fn next(&self) -> Option<NodeIndex> {
        self.next
    }

    /// Returns whether this node has a parent.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns whether this node is a root, i.e. has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns whether this node has neither a left nor a right child.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    // Arena bookkeeping, only the tree may rewire nodes.
    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeIndex>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeIndex>) {
        self.parent = parent;
    }

    pub(crate) fn set_neighbours(&mut self, prev: Option<NodeIndex>, next: Option<NodeIndex>) {
        self.prev = prev;
        self.next = next;
    }

    /// Moves all links of this node by `offset`, used when grafting one
    /// arena into another.
    pub(crate) fn shift(&mut self, offset: usize) {
        self.index += offset;
        self.left = self.left.map(|i| i + offset);
        self.right = self.right.map(|i| i + offset);
        self.parent = self.parent.map(|i| i + offset);
        self.prev = None;
        self.next = None;
    }
}

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: fmt::Display> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.value)
    }
}
