//! Bintree is a library for plain binary trees: building them from strings
//! and traversal pairs, walking them, and asking structural questions.
//!
//! Core functionality provided:
//! - Tree model: [BinaryTree] stores its [Node]s in an arena; children,
//!   parents and level neighbours are referenced by index only.
//!   See [crate::model] for more details.
//! - Text: read and write comma-separated level-order strings such as
//!   `"1,2,3,null,4"`. See [crate::text].
//! - Reconstruction: rebuild a tree from its in-order together with its
//!   pre-order or post-order. See [crate::orders].
//! - Traversals: pre-, in-, post- and level-order iterators without
//!   recursion. See [crate::traversal].
//! - Queries: symmetry, depth, root-to-leaf paths, path sums, ancestor
//!   paths and lowest common ancestors. See [crate::query].
//!
//! Limitations:
//! - No balancing, the tree keeps the shape it was built with
//! - Topology is fixed once built, except for adding children
//!
//! # Usage patterns
//! 1. The functions at the crate root give quick access with default settings.
//! 2. Configure a [TreeStringParser](text::TreeStringParser) or
//!    [TreeStringWriter](text::TreeStringWriter) for control over null
//!    tokens, trimming, value types and output style.
//!
//! ## Example
//! ```
//! use bintree::{Traversal, from_orders, from_string, traverse};
//! use bintree::model::NodeValue;
//! use bintree::orders::OrderKind;
//!
//! let tree = from_string("1,2,3,4,,5,6")?.unwrap();
//! let pre: Vec<_> = traverse(&tree, Traversal::Pre).map(|n| n.value().clone()).collect();
//! let ins: Vec<_> = traverse(&tree, "in".parse()?).map(|n| n.value().clone()).collect();
//!
//! let rebuilt = from_orders(OrderKind::InPre, &ins, &pre)?.unwrap();
//! assert_eq!(rebuilt, tree);
//! assert!(tree.has_path_sum(7));
//! assert!(!tree.is_symmetrical());
//! # Ok::<(), bintree::TreeError>(())
//! ```

pub mod error;
pub mod model;
pub mod orders;
pub mod query;
pub mod text;
pub mod traversal;

pub use crate::error::{TreeError, TreeResult};
pub use crate::model::{BinaryTree, Node, NodeIndex, NodeValue};
pub use crate::orders::OrderKind;
pub use crate::traversal::{Traversal, TraversalIter};

use std::fmt::Display;
use std::hash::Hash;

// ============================================================================
// Quick Text API
// ============================================================================
/// Parses a level-order tree string using default settings,
/// returning a tree of [NodeValue]s or `None` if the string holds no root.
///
/// See [`text::from_string`] for full documentation.
pub fn from_string(text: &str) -> TreeResult<Option<BinaryTree<NodeValue>>> {
    text::from_string(text)
}

/// Writes a tree as level-order string using default settings.
///
/// See [`text::to_string`] for full documentation.
pub fn to_string<V: Display>(tree: &BinaryTree<V>) -> String {
    text::to_string(tree)
}

// ============================================================================
// Quick Reconstruction API
// ============================================================================
/// Reconstructs a tree from its in-order and its pre- or post-order.
///
/// See [`BinaryTree::from_orders`] for full documentation.
pub fn from_orders<V: Clone + Eq + Hash>(
    kind: OrderKind,
    in_order: &[V],
    other_order: &[V],
) -> TreeResult<Option<BinaryTree<V>>> {
    BinaryTree::from_orders(kind, in_order, other_order)
}

// ============================================================================
// Quick Traversal API
// ============================================================================
/// Returns an iterator over the nodes of `tree` in the given order.
///
/// See [`BinaryTree::traverse`] for full documentation.
pub fn traverse<V>(tree: &BinaryTree<V>, kind: Traversal) -> TraversalIter<'_, V> {
    tree.traverse(kind)
}
