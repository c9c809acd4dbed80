//! Level-order string reader and writer for binary trees.
//!
//! This module provides [TreeStringParser] to read comma-separated,
//! level-order tree strings into [BinaryTree]s, and [TreeStringWriter] to
//! write them back.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`from_string`] - parses a string into a tree of [NodeValue]s
//! * [`to_string`] - writes a tree with `null` for absent children
//!
//! # Format
//! * `tree ::= token (',' token)*`
//! * The first token is the root. For every present node in level-order,
//!   the next two tokens are its left and right child.
//! * `null` and the empty token mark an absent child, which gets no tokens
//!   of its own.
//! * Whitespace, square brackets and quotes around tokens are ignored,
//!   so `[1, 2, null, 3]` reads the same as `1,2,,3`.
//! * Tokens may stop anywhere; all remaining children are absent.
//!
//! For example, `1,2,3,4,,5,6` describes
//! ```text
//!       1
//!     /   \
//!    2     3
//!   /     / \
//!  4     5   6
//! ```

mod defs;
pub mod parser;
pub mod writer;

pub use parser::TreeStringParser;
pub use writer::{NullStyle, TreeStringWriter};

use crate::error::TreeError;
use crate::model::{BinaryTree, NodeValue};
use std::fmt::Display;

// ============================================================================
// QUICK API (pub)
// ============================================================================
/// Parses a level-order tree string using default settings.
///
/// Integer tokens become [`NodeValue::Int`], any other token is kept as
/// [`NodeValue::Str`].
///
/// # Returns
/// * `Ok(Some(tree))` - The parsed tree
/// * `Ok(None)` - If the string holds no root value
///
/// # Example
/// ```
/// use bintree::text::from_string;
/// use bintree::model::NodeValue;
///
/// let tree = from_string("1,2,3,4,,5,6")?.unwrap();
/// assert_eq!(tree.root().value(), &NodeValue::Int(1));
/// assert!(from_string("")?.is_none());
/// # Ok::<(), bintree::TreeError>(())
/// ```
pub fn from_string(text: &str) -> Result<Option<BinaryTree<NodeValue>>, TreeError> {
    TreeStringParser::new().parse(text)
}

/// Writes a tree as level-order string using default settings.
pub fn to_string<V: Display>(tree: &BinaryTree<V>) -> String {
    TreeStringWriter::new().write(tree)
}
