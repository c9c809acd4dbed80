//! Data model for plain binary trees.
//!
//! # Tree representation
//! Trees are represented by [BinaryTree], which uses the arena pattern to
//! store [Node]s. Nodes refer to their children, their parent and their
//! level neighbours only via [NodeIndex], so back-references never form
//! ownership cycles.
//!
//! # Payload
//! [BinaryTree] is generic over the node value. Trees read from level-order
//! strings with default settings hold a [NodeValue], which is either an
//! integer or the raw token.

pub mod node;
pub mod tree;
pub mod value;

pub use node::{Node, NodeIndex, Side};
pub use tree::BinaryTree;
pub use value::NodeValue;
