//! Reconstruction of a binary tree from a pair of traversal orders.
//!
//! An in-order together with either the pre-order or the post-order of the
//! same tree determines the tree uniquely, provided all values are distinct:
//! * the pre-order starts (post-order ends) with the root of a subtree
//! * the position of that root in the in-order splits the in-order into the
//!   left and right subtree
//! * the other order splits into slices of the same lengths
//!
//! Instead of copying slices, every subtree is described by a [Segment] of
//! start positions and a length, and the position of each value in the
//! in-order is looked up in a map built once. Segments are processed from an
//! explicit stack, so a degenerate tree does not exhaust the call stack.

use crate::error::TreeError;
use crate::model::{BinaryTree, NodeIndex, Side};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use tracing::{debug, trace};

// =#========================================================================#=
// ORDER KIND
// =#========================================================================#=
/// Which traversal accompanies the in-order.
///
/// Parses from `"in-pre"` and `"in-post"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    /// In-order with pre-order: root comes first
    InPre,
    /// In-order with post-order: root comes last
    InPost,
}

impl OrderKind {
    /// Returns the name this kind is parsed from.
    pub fn name(&self) -> &'static str {
        match self {
            OrderKind::InPre => "in-pre",
            OrderKind::InPost => "in-post",
        }
    }
}

impl FromStr for OrderKind {
    type Err = TreeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "in-pre" => Ok(OrderKind::InPre),
            "in-post" => Ok(OrderKind::InPost),
            _ => Err(TreeError::UnknownOrderKind(name.to_string())),
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =#========================================================================#=
// SEGMENT
// =#========================================================================#=
/// Subtree still to be expanded: its root `node` was created already and
/// sits at `pivot` in the in-order.
#[derive(Debug, Clone, Copy)]
struct Segment {
    node: NodeIndex,
    pivot: usize,
    in_start: usize,
    other_start: usize,
    len: usize,
}

/// Positions of the root of a subtree: in the other order and in the in-order.
struct Located {
    other_position: usize,
    pivot: usize,
}

// =$========================================================================$=
// RECONSTRUCTION
// =$========================================================================$=
impl<V: Clone + Eq + Hash> BinaryTree<V> {
    /// Reconstructs the tree with the given in-order and pre- or post-order.
    ///
    /// The connect pass is run on the result.
    ///
    /// # Arguments
    /// * `kind` - Whether `other_order` is a pre-order or a post-order
    /// * `in_order` - In-order of the tree, values must be distinct
    /// * `other_order` - Pre- or post-order of the same tree
    ///
    /// # Returns
    /// * `Ok(Some(tree))` - The reconstructed tree
    /// * `Ok(None)` - If either order is empty
    /// * `Err(TreeError)` - If the orders do not describe one binary tree
    ///
    /// # Example
    /// ```
    /// use bintree::BinaryTree;
    /// use bintree::orders::OrderKind;
    ///
    /// let tree = BinaryTree::from_orders(OrderKind::InPre, &[4, 2, 1, 5, 3, 6], &[1, 2, 4, 3, 5, 6])
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(tree.to_string(), "1,2,3,4,null,5,6");
    /// ```
    pub fn from_orders(
        kind: OrderKind,
        in_order: &[V],
        other_order: &[V],
    ) -> Result<Option<Self>, TreeError> {
        if in_order.is_empty() || other_order.is_empty() {
            return Ok(None);
        }
        if in_order.len() != other_order.len() {
            return Err(TreeError::LengthMismatch {
                in_order: in_order.len(),
                other_order: other_order.len(),
            });
        }

        let positions = in_order_positions(in_order)?;
        let builder = OrderReconstruction {
            kind,
            other_order,
            positions,
        };

        let tree = builder.build()?;
        debug!(
            kind = %kind,
            num_nodes = tree.num_nodes(),
            "reconstructed tree from orders"
        );
        Ok(Some(tree))
    }
}

/// Maps every value of the in-order to its position.
fn in_order_positions<V: Eq + Hash>(in_order: &[V]) -> Result<HashMap<&V, usize>, TreeError> {
    let mut positions = HashMap::with_capacity(in_order.len());
    for (position, value) in in_order.iter().enumerate() {
        match positions.entry(value) {
            Entry::Occupied(_) => return Err(TreeError::DuplicateValue { position }),
            Entry::Vacant(entry) => {
                entry.insert(position);
            }
        }
    }
    Ok(positions)
}

/// State shared by all segments of one reconstruction.
struct OrderReconstruction<'a, V> {
    kind: OrderKind,
    other_order: &'a [V],
    positions: HashMap<&'a V, usize>,
}

impl<V: Clone + Eq + Hash> OrderReconstruction<'_, V> {
    fn build(&self) -> Result<BinaryTree<V>, TreeError> {
        let len = self.other_order.len();
        let root = self.locate(0, 0, len)?;

        let mut tree =
            BinaryTree::with_capacity(self.other_order[root.other_position].clone(), len);
        let mut stack = vec![Segment {
            node: tree.root_index(),
            pivot: root.pivot,
            in_start: 0,
            other_start: 0,
            len,
        }];

        while let Some(segment) = stack.pop() {
            trace!(?segment, "expanding segment");
            let (left, right) = self.split(&segment);

            // Push right first, so left is built first
            for (side, (in_start, other_start, len)) in [(Side::Right, right), (Side::Left, left)] {
                if len == 0 {
                    continue;
                }
                let child = self.locate(in_start, other_start, len)?;
                let value = self.other_order[child.other_position].clone();
                let node = tree.add_child(segment.node, side, value);
                stack.push(Segment {
                    node,
                    pivot: child.pivot,
                    in_start,
                    other_start,
                    len,
                });
            }
        }

        tree.connect();
        Ok(tree)
    }

    /// Finds the root of the subtree whose in-order starts at `in_start` and
    /// whose other order starts at `other_start`, both of length `len`.
    fn locate(
        &self,
        in_start: usize,
        other_start: usize,
        len: usize,
    ) -> Result<Located, TreeError> {
        let other_position = match self.kind {
            OrderKind::InPre => other_start,
            OrderKind::InPost => other_start + len - 1,
        };

        let value = &self.other_order[other_position];
        let pivot = *self.positions.get(value).ok_or(TreeError::MissingValue {
            position: other_position,
        })?;

        if pivot < in_start || pivot >= in_start + len {
            return Err(TreeError::InconsistentOrders {
                position: other_position,
            });
        }

        Ok(Located {
            other_position,
            pivot,
        })
    }

    /// Splits a segment into `(in_start, other_start, len)` of its left and
    /// right subtree.
    fn split(&self, segment: &Segment) -> ((usize, usize, usize), (usize, usize, usize)) {
        let left_len = segment.pivot - segment.in_start;
        let right_len = segment.len - left_len - 1;

        // Pre-order: root, left, right; post-order: left, right, root
        let left_other_start = match self.kind {
            OrderKind::InPre => segment.other_start + 1,
            OrderKind::InPost => segment.other_start,
        };
        let right_other_start = left_other_start + left_len;

        (
            (segment.in_start, left_other_start, left_len),
            (segment.pivot + 1, right_other_start, right_len),
        )
    }
}
