//! Error types for building and addressing binary trees.
//!
//! This module provides [TreeError] for reporting malformed tokens, unknown
//! selectors and traversal pairs that do not describe a binary tree.

use thiserror::Error;

pub type TreeResult<T> = Result<T, TreeError>;

// =#========================================================================#=
// TREE ERROR
// =#========================================================================#=
/// Errors that can occur when constructing or traversing a binary tree.
///
/// Missing input (empty string, empty orders) is not an error; constructors
/// return `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Unknown traversal {0:?} - expected \"pre\", \"in\", \"post\" or \"level\"")]
    UnknownTraversal(String),

    #[error("Unknown order kind {0:?} - expected \"in-pre\" or \"in-post\"")]
    UnknownOrderKind(String),

    #[error("Invalid token {token:?} at position {position} - {reason}")]
    InvalidToken {
        position: usize,
        token: String,
        reason: String,
    },

    #[error("Orders differ in length: in-order has {in_order} values, other order {other_order}")]
    LengthMismatch { in_order: usize, other_order: usize },

    #[error("Duplicate value at position {position} of in-order")]
    DuplicateValue { position: usize },

    #[error("Value at position {position} of other order does not occur in in-order")]
    MissingValue { position: usize },

    #[error("Inconsistent orders at position {position} of other order - not a binary tree")]
    InconsistentOrders { position: usize },
}
