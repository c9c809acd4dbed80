//! Iterative traversals over a [BinaryTree].
//!
//! All traversals use explicit stacks or queues instead of recursion, so
//! degenerate trees as deep as they are large can be walked. Every iterator
//! borrows the tree, starts fresh on each call and may be dropped at any
//! point without cleanup.
//!
//! | Traversal | Order | Iterator |
//! |-----------|-------|----------|
//! | [Traversal::Pre] | root, left, right | [PreOrderIter] |
//! | [Traversal::In] | left, root, right | [InOrderIter] |
//! | [Traversal::Post] | left, right, root | [PostOrderIter] |
//! | [Traversal::Level] | one level after the other | [LevelOrderIter] / [BreadthFirstIter] |

use crate::error::TreeError;
use crate::model::{BinaryTree, Node, NodeIndex};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

// =#========================================================================#=
// TRAVERSAL (selector)
// =#========================================================================#=
/// Selects one of the four traversal orders.
///
/// Parses from `"pre"`, `"in"`, `"post"` and `"level"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    Pre,
    In,
    Post,
    Level,
}

impl Traversal {
    /// All traversal orders.
    pub const ALL: [Traversal; 4] = [
        Traversal::Pre,
        Traversal::In,
        Traversal::Post,
        Traversal::Level,
    ];

    /// Returns the name this traversal is parsed from.
    pub fn name(&self) -> &'static str {
        match self {
            Traversal::Pre => "pre",
            Traversal::In => "in",
            Traversal::Post => "post",
            Traversal::Level => "level",
        }
    }
}

impl FromStr for Traversal {
    type Err = TreeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "pre" => Ok(Traversal::Pre),
            "in" => Ok(Traversal::In),
            "post" => Ok(Traversal::Post),
            "level" => Ok(Traversal::Level),
            _ => Err(TreeError::UnknownTraversal(name.to_string())),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =$========================================================================$=
// ITERATORS (tree API)
// =$========================================================================$=
impl<V> BinaryTree<V> {
    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// # Example
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new(1);
    /// let left = tree.add_left(0, 2);
    /// tree.add_right(0, 3);
    /// tree.add_left(left, 4);
    ///
    /// let values: Vec<_> = tree.pre_order_iter().map(|n| *n.value()).collect();
    /// assert_eq!(values, [1, 2, 4, 3]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_, V> {
        PreOrderIter::new(self, self.root_index())
    }

    /// Returns an iterator over the tree in in-order (left subtree, node, right subtree).
    pub fn in_order_iter(&self) -> InOrderIter<'_, V> {
        InOrderIter::new(self, self.root_index())
    }

    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// This is useful for aggregating data from leaves upward.
    pub fn post_order_iter(&self) -> PostOrderIter<'_, V> {
        PostOrderIter::new(self, self.root_index())
    }

    /// Returns an iterator over the levels of the tree, each level being
    /// the nodes of one depth from left to right.
    pub fn levels(&self) -> LevelOrderIter<'_, V> {
        LevelOrderIter::new(self, self.root_index())
    }

    /// Returns an iterator over all nodes in level-order, one by one.
    pub fn iter(&self) -> BreadthFirstIter<'_, V> {
        BreadthFirstIter::new(self, self.root_index())
    }

    /// Returns an iterator over the nodes in the given [Traversal] order.
    ///
    /// For [Traversal::Level] the levels are flattened; use
    /// [`levels()`](Self::levels) to keep them apart.
    pub fn traverse(&self, kind: Traversal) -> TraversalIter<'_, V> {
        self.traverse_from(kind, self.root_index())
    }

    /// Returns an iterator over the subtree rooted at `start`
    /// in the given [Traversal] order.
    ///
    /// # Panics
    /// Panics if `start` is out of bounds.
    pub fn traverse_from(&self, kind: Traversal, start: NodeIndex) -> TraversalIter<'_, V> {
        assert!(
            start < self.num_nodes(),
            "start {start} is out of bounds for a tree with {} nodes",
            self.num_nodes()
        );

        match kind {
            Traversal::Pre => TraversalIter::Pre(PreOrderIter::new(self, start)),
            Traversal::In => TraversalIter::In(InOrderIter::new(self, start)),
            Traversal::Post => TraversalIter::Post(PostOrderIter::new(self, start)),
            Traversal::Level => TraversalIter::Level(BreadthFirstIter::new(self, start)),
        }
    }
}

impl<'a, V> IntoIterator for &'a BinaryTree<V> {
    type Item = &'a Node<V>;
    type IntoIter = BreadthFirstIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Pre-order
// ============================================================================
/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited before any of its descendants.
pub struct PreOrderIter<'a, V> {
    tree: &'a BinaryTree<V>,
    stack: Vec<NodeIndex>,
}

impl<'a, V> PreOrderIter<'a, V> {
    /// Creates a pre-order iterator over the subtree rooted at `start`.
    pub fn new(tree: &'a BinaryTree<V>, start: NodeIndex) -> Self {
        PreOrderIter {
            tree,
            stack: vec![start],
        }
    }
}

impl<'a, V> Iterator for PreOrderIter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        // Push right first, so left is processed first
        self.stack.extend(node.right());
        self.stack.extend(node.left());

        Some(node)
    }
}

// ============================================================================
// In-order
// ============================================================================
/// Iterator for in-order traversal (left subtree, node, right subtree).
///
/// Descends along left links pushing every node, pops and yields, then
/// repeats the descent from the right child of the yielded node.
pub struct InOrderIter<'a, V> {
    tree: &'a BinaryTree<V>,
    stack: Vec<NodeIndex>,
}

impl<'a, V> InOrderIter<'a, V> {
    /// Creates an in-order iterator over the subtree rooted at `start`.
    pub fn new(tree: &'a BinaryTree<V>, start: NodeIndex) -> Self {
        let mut iter = InOrderIter {
            tree,
            stack: Vec::new(),
        };
        iter.descend_left(Some(start));
        iter
    }

    fn descend_left(&mut self, mut current: Option<NodeIndex>) {
        while let Some(index) = current {
            self.stack.push(index);
            current = self.tree[index].left();
        }
    }
}

impl<'a, V> Iterator for InOrderIter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];
        self.descend_left(node.right());
        Some(node)
    }
}

// ============================================================================
// Post-order
// ============================================================================
/// Iterator for post-order traversal (children before parents).
///
/// Same left descent as [InOrderIter], but a node stays on the stack until
/// its right subtree is done. The flag next to each index marks whether the
/// right subtree has already been queued, so it is never entered twice.
pub struct PostOrderIter<'a, V> {
    tree: &'a BinaryTree<V>,
    stack: Vec<(NodeIndex, bool)>, // (index, right_queued)
}

impl<'a, V> PostOrderIter<'a, V> {
    /// Creates a post-order iterator over the subtree rooted at `start`.
    pub fn new(tree: &'a BinaryTree<V>, start: NodeIndex) -> Self {
        let mut iter = PostOrderIter {
            tree,
            stack: Vec::new(),
        };
        iter.descend_left(start);
        iter
    }

    fn descend_left(&mut self, start: NodeIndex) {
        let mut current = Some(start);
        while let Some(index) = current {
            self.stack.push((index, false));
            current = self.tree[index].left();
        }
    }
}

impl<'a, V> Iterator for PostOrderIter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(top) = self.stack.last_mut() {
            let node = &tree[top.0];

            match node.right() {
                Some(right) if !top.1 => {
                    top.1 = true;
                    self.descend_left(right);
                }
                _ => {
                    self.stack.pop();
                    return Some(node);
                }
            }
        }
        None
    }
}

// ============================================================================
// Level-order
// ============================================================================
/// Iterator over the levels of a tree, yielding the nodes of one depth at a
/// time from left to right. Ends after the deepest level.
pub struct LevelOrderIter<'a, V> {
    tree: &'a BinaryTree<V>,
    level: Vec<NodeIndex>,
}

impl<'a, V> LevelOrderIter<'a, V> {
    /// Creates a level iterator over the subtree rooted at `start`.
    pub fn new(tree: &'a BinaryTree<V>, start: NodeIndex) -> Self {
        LevelOrderIter {
            tree,
            level: vec![start],
        }
    }
}

impl<'a, V> Iterator for LevelOrderIter<'a, V> {
    type Item = Vec<&'a Node<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.level.is_empty() {
            return None;
        }

        let tree = self.tree;
        let nodes: Vec<&'a Node<V>> = self.level.iter().map(|&i| &tree[i]).collect();
        self.level = nodes
            .iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();

        Some(nodes)
    }
}

/// Iterator for breadth-first traversal, yielding the nodes of
/// [LevelOrderIter] one by one.
pub struct BreadthFirstIter<'a, V> {
    tree: &'a BinaryTree<V>,
    queue: VecDeque<NodeIndex>,
}

impl<'a, V> BreadthFirstIter<'a, V> {
    /// Creates a breadth-first iterator over the subtree rooted at `start`.
    pub fn new(tree: &'a BinaryTree<V>, start: NodeIndex) -> Self {
        BreadthFirstIter {
            tree,
            queue: VecDeque::from([start]),
        }
    }
}

impl<'a, V> Iterator for BreadthFirstIter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.queue.pop_front()?;
        let node = &self.tree[index];
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

// ============================================================================
// Dispatch
// ============================================================================
/// Iterator returned by [`BinaryTree::traverse`], wrapping the iterator of
/// the selected [Traversal].
pub enum TraversalIter<'a, V> {
    Pre(PreOrderIter<'a, V>),
    In(InOrderIter<'a, V>),
    Post(PostOrderIter<'a, V>),
    Level(BreadthFirstIter<'a, V>),
}

impl<'a, V> Iterator for TraversalIter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            TraversalIter::Pre(iter) => iter.next(),
            TraversalIter::In(iter) => iter.next(),
            TraversalIter::Post(iter) => iter.next(),
            TraversalIter::Level(iter) => iter.next(),
        }
    }
}
