//! Provides the arena-backed binary tree.
//!
//! Provides core data structures for representing binary trees:
//! * [`BinaryTree<V>`] - Main tree structure using the arena pattern,
//!   generic over the node payload `V`.
//! * [Node] as storage unit of a tree, referenced by [NodeIndex]

use crate::model::node::{Node, NodeIndex, Side};
use std::fmt::{self, Write};

/// Index of the root; the root is always the first node in the arena.
const ROOT_INDEX: NodeIndex = 0;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A plain (unbalanced) binary tree represented using the arena pattern
/// on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
/// Aim is to avoid referencing troubles between children and their parent
/// (and level neighbours), as well as to provide efficient memory layout for
/// traversal operations. Dropping the tree drops the arena, so tearing down
/// a deep tree does not recurse.
///
/// # Structure
/// - A tree always has a root; "no tree" is modelled by `Option<BinaryTree>`.
/// - The root sits at index 0, no other order of indices is maintained.
/// - Each node owns nothing; the tree owns all nodes.
/// - Parent links are set whenever a child gets attached.
/// - Level neighbour links (`prev`/`next`) are only correct after
///   [`connect()`](Self::connect), which all bulk constructors run.
///
/// # Equality
/// Two trees are equal if they have the same shape and equal values at every
/// position. Arena indices are not compared. Compare this with
/// [Node] equality, which only compares values.
///
/// # Construction
/// * [`new(value)`](Self::new) - single node tree
/// * [`with_children(value, left, right)`](Self::with_children) - composes subtrees
/// * [`add_left`](Self::add_left) / [`add_right`](Self::add_right) - grow node by node
/// * [`from_orders`](Self::from_orders) - from an in-order and a pre- or post-order
/// * [TreeStringParser](crate::text::TreeStringParser) - from a level-order string
#[derive(Debug, Clone)]
pub struct BinaryTree<V> {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node<V>>,

    /// Index of the root of this tree
    root_index: NodeIndex,
}

// ============================================================================
// New, Construction (pub)
// ============================================================================
impl<V> BinaryTree<V> {
    /// Creates a new tree consisting of a single root node.
    pub fn new(value: V) -> Self {
        Self::with_capacity(value, 1)
    }

    /// Creates a new single node tree with room for `capacity` nodes.
    ///
    /// # Arguments
    /// * `value` - Value of the root
    /// * `capacity` - Expected number of nodes, to avoid reallocations
    pub fn with_capacity(value: V, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::new(ROOT_INDEX, value));
        BinaryTree {
            nodes,
            root_index: ROOT_INDEX,
        }
    }

    /// Creates a new tree with a root holding `value` and the given subtrees
    /// as its left and right child.
    ///
    /// Both subtrees are moved into the arena of the new tree. The connect
    /// pass is run on the result.
    ///
    /// # Example
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let tree = BinaryTree::with_children(
    ///     1,
    ///     Some(BinaryTree::new(2)),
    ///     Some(BinaryTree::with_children(3, None, Some(BinaryTree::new(4)))),
    /// );
    /// assert_eq!(tree.num_nodes(), 4);
    /// assert_eq!(tree.to_string(), "1,2,3,null,null,null,4");
    /// ```
    pub fn with_children(
        value: V,
        left: Option<BinaryTree<V>>,
        right: Option<BinaryTree<V>>,
    ) -> Self {
        let capacity = 1
            + left.as_ref().map_or(0, |t| t.num_nodes())
            + right.as_ref().map_or(0, |t| t.num_nodes());
        let mut tree = Self::with_capacity(value, capacity);

        let root = tree.root_index;
        if let Some(left) = left {
            tree.graft(root, Side::Left, left);
        }
        if let Some(right) = right {
            tree.graft(root, Side::Right, right);
        }

        tree.connect();
        tree
    }

    /// Adds a new left child holding `value` to the node at `parent`,
    /// returning the index of the new node.
    ///
    /// Level neighbour links are not updated, run [`connect()`](Self::connect)
    /// once construction is done.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds or already has a left child.
    pub fn add_left(&mut self, parent: NodeIndex, value: V) -> NodeIndex {
        self.add_child(parent, Side::Left, value)
    }

    /// Adds a new right child holding `value` to the node at `parent`,
    /// returning the index of the new node.
    ///
    /// Level neighbour links are not updated, run [`connect()`](Self::connect)
    /// once construction is done.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds or already has a right child.
    pub fn add_right(&mut self, parent: NodeIndex, value: V) -> NodeIndex {
        self.add_child(parent, Side::Right, value)
    }

    /// Adds a new child holding `value` on the given `side` of `parent`,
    /// assigning a unique index, which gets returned.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds or the slot is already occupied.
    pub fn add_child(&mut self, parent: NodeIndex, side: Side, value: V) -> NodeIndex {
        assert!(
            self[parent].child(side).is_none(),
            "{side:?} child of node {parent} is already set"
        );

        let index = self.nodes.len();
        let mut node = Node::new(index, value);
        node.set_parent(Some(parent));
        self.nodes.push(node);
        self.nodes[parent].set_child(side, Some(index));

        index
    }

    /// Runs the connect pass: links every node to its left (`prev`) and
    /// right (`next`) neighbour on the same level.
    ///
    /// Links are a snapshot; adding nodes afterwards leaves them stale until
    /// this is run again.
    pub fn connect(&mut self) {
        let levels: Vec<Vec<NodeIndex>> = self
            .levels()
            .map(|level| level.iter().map(|node| node.index()).collect())
            .collect();

        for level in levels {
            for (position, &index) in level.iter().enumerate() {
                let prev = position.checked_sub(1).map(|p| level[p]);
                let next = level.get(position + 1).copied();
                self.nodes[index].set_neighbours(prev, next);
            }
        }
    }

    /// Moves all nodes of `subtree` into this arena and attaches its root on
    /// `side` of `parent`.
    fn graft(&mut self, parent: NodeIndex, side: Side, subtree: BinaryTree<V>) {
        let offset = self.nodes.len();
        let sub_root = subtree.root_index + offset;

        self.nodes.extend(subtree.nodes.into_iter().map(|mut node| {
            node.shift(offset);
            node
        }));

        self.nodes[sub_root].set_parent(Some(parent));
        self.nodes[parent].set_child(side, Some(sub_root));
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl<V> BinaryTree<V> {
    /// Returns a reference to the root node.
    pub fn root(&self) -> &Node<V> {
        &self[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &Node<V> {
        &self[index]
    }

    /// Returns a reference to the node at the given index,
    /// or `None` if `index` is out of bounds.
    pub fn get(&self, index: NodeIndex) -> Option<&Node<V>> {
        self.nodes.get(index)
    }

    /// Returns all nodes in arena order (not a traversal order).
    pub fn nodes(&self) -> &[Node<V>] {
        &self.nodes
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|&n| n.is_leaf()).count()
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is valid and points to a node without parent
    /// - All node indices match their position in the arena
    /// - All child indices are valid and point back to correct parent
    /// - All parent indices are valid and include this node as a child
    /// - Exactly one node (the root) has no parent
    /// - Every node is reachable from the root, hence there is no cycle
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let len = self.nodes.len();

        if self.root_index >= len || self.nodes[self.root_index].has_parent() {
            return false;
        }

        let mut found_root = false;
        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            // Check children references
            let (left, right) = node.children();
            if left.is_some() && left == right {
                return false;
            }
            for child in [left, right].into_iter().flatten() {
                if child >= len || self.nodes[child].parent() != Some(index) {
                    return false;
                }
            }

            // Check parent reference
            match node.parent() {
                None => {
                    if found_root {
                        return false;
                    }
                    found_root = true;
                }
                Some(parent) => {
                    if parent >= len {
                        return false;
                    }
                    let (left, right) = self.nodes[parent].children();
                    if left != Some(index) && right != Some(index) {
                        return false;
                    }
                }
            }
        }

        // Each node has a single incoming child link by now, so a walk from
        // the root visits every node at most once
        let mut reached = 0;
        let mut stack = vec![self.root_index];
        while let Some(index) = stack.pop() {
            reached += 1;
            if reached > len {
                return false;
            }
            let (left, right) = self.nodes[index].children();
            stack.extend(right);
            stack.extend(left);
        }

        found_root && reached == len
    }
}

impl<V> std::ops::Index<NodeIndex> for BinaryTree<V> {
    type Output = Node<V>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

impl<V: PartialEq> PartialEq for BinaryTree<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.num_nodes() != other.num_nodes() {
            return false;
        }

        let mut stack = vec![(self.root_index, other.root_index)];
        while let Some((a, b)) = stack.pop() {
            let (x, y) = (&self[a], &other[b]);
            if x.value() != y.value() {
                return false;
            }

            for side in [Side::Right, Side::Left] {
                match (x.child(side), y.child(side)) {
                    (Some(i), Some(j)) => stack.push((i, j)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<V: Eq> Eq for BinaryTree<V> {}

// ============================================================================
// Printing (pub)
// ============================================================================
impl<V: fmt::Display> BinaryTree<V> {
    /// Returns a visual representation of the tree.
    ///
    /// # Example Output
    /// ```text
    /// Binary tree with 6 nodes:
    /// [0] 1
    /// ├─ L: [1] 2
    /// │  └─ L: [3] 4
    /// └─ R: [2] 3
    ///    ├─ L: [4] 5
    ///    └─ R: [5] 6
    /// ```
    pub fn render(&self) -> String {
        const BRANCH: &str = "├─ ";
        const LAST: &str = "└─ ";

        let mut out = String::new();
        let _ = writeln!(out, "Binary tree with {} nodes:", self.num_nodes());

        // (index, prefix, connector, side marker)
        let mut stack: Vec<(NodeIndex, String, &str, &str)> =
            vec![(self.root_index, String::new(), "", "")];

        while let Some((index, prefix, connector, marker)) = stack.pop() {
            let node = &self[index];
            let _ = writeln!(out, "{prefix}{connector}{marker}[{index}] {}", node.value());

            let child_prefix = match connector {
                "" => prefix,
                LAST => format!("{prefix}   "),
                _ => format!("{prefix}│  "),
            };

            let children: Vec<(&str, NodeIndex)> = [("L: ", node.left()), ("R: ", node.right())]
                .into_iter()
                .filter_map(|(marker, child)| child.map(|c| (marker, c)))
                .collect();

            // Push in reverse, so left is printed first
            for (position, &(marker, child)) in children.iter().enumerate().rev() {
                let connector = if position + 1 == children.len() {
                    LAST
                } else {
                    BRANCH
                };
                stack.push((child, child_prefix.clone(), connector, marker));
            }
        }

        out
    }

    /// Prints a visual representation of the tree to the console,
    /// see [`render()`](Self::render).
    pub fn print_tree(&self) {
        print!("{}", self.render());
    }
}
