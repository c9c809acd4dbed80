//! Level-order tree string writing.

use crate::model::{BinaryTree, Node};
use crate::text::defs::{NULL_KEYWORD, TOKEN_SEPARATOR, VALUE_CHARS_GUESS};
use std::fmt::{self, Display, Write};

/// Style for writing absent children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullStyle {
    /// Write `null`
    #[default]
    Keyword,
    /// Write nothing, i.e. two separators in a row
    Empty,
}

/// Writer (configuration) for level-order tree strings.
///
/// Writes the form read by [TreeStringParser](crate::text::TreeStringParser):
/// the root, then the left and right child token of every present node in
/// level-order. Absent children at the end are left out, also within the
/// last level, so the output is never padded to full levels:
/// `1,2,3,4` rather than `1,2,3,4,null,null,null`.
///
/// Values print with their [Display] implementation. A value that prints as
/// a null token or contains a comma does not survive a round trip.
///
/// # Example
/// ```
/// use bintree::from_string;
/// use bintree::text::{NullStyle, TreeStringWriter};
///
/// let tree = from_string("1,null,2,3").unwrap().unwrap();
/// let writer = TreeStringWriter::new()
///     .with_null_style(NullStyle::Empty)
///     .with_brackets();
/// assert_eq!(writer.write(&tree), "[1,,2,3]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeStringWriter {
    null_style: NullStyle,
    brackets: bool,
}

impl TreeStringWriter {
    /// Creates a new [TreeStringWriter] writing `null` for absent children
    /// and no brackets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how absent children are written.
    pub fn with_null_style(mut self, null_style: NullStyle) -> Self {
        self.null_style = null_style;
        self
    }

    /// Wraps the output in square brackets.
    pub fn with_brackets(mut self) -> Self {
        self.brackets = true;
        self
    }

    /// Returns the level-order string of `tree`.
    pub fn write<V: Display>(&self, tree: &BinaryTree<V>) -> String {
        let mut out = String::with_capacity(estimate_len(tree));
        // Writing into a String cannot fail
        let _ = self.write_to(tree, &mut out);
        out
    }

    /// Writes the level-order string of `tree` into `out`.
    pub fn write_to<V: Display, W: Write>(&self, tree: &BinaryTree<V>, out: &mut W) -> fmt::Result {
        let mut slots: Vec<Option<&Node<V>>> = Vec::with_capacity(2 * tree.num_nodes() + 1);
        slots.push(Some(tree.root()));
        for node in tree.iter() {
            slots.push(node.left().map(|i| &tree[i]));
            slots.push(node.right().map(|i| &tree[i]));
        }

        while matches!(slots.last(), Some(None)) {
            slots.pop();
        }

        if self.brackets {
            out.write_char('[')?;
        }
        for (position, slot) in slots.iter().enumerate() {
            if position > 0 {
                out.write_char(TOKEN_SEPARATOR)?;
            }
            match (slot, self.null_style) {
                (Some(node), _) => write!(out, "{}", node.value())?,
                (None, NullStyle::Keyword) => out.write_str(NULL_KEYWORD)?,
                (None, NullStyle::Empty) => {}
            }
        }
        if self.brackets {
            out.write_char(']')?;
        }

        Ok(())
    }
}

/// Writes the default level-order string, e.g. `1,2,3,4,null,5,6`.
impl<V: Display> Display for BinaryTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreeStringWriter::default().write_to(self, f)
    }
}

/// Estimates the length of the level-order string of `tree`, to pre-allocate.
fn estimate_len<V>(tree: &BinaryTree<V>) -> usize {
    // At most one token per node plus one absent slot per node
    let num_tokens = 2 * tree.num_nodes() + 1;
    num_tokens * (VALUE_CHARS_GUESS + 1)
}
