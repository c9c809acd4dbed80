//! Structs and logic to read level-order tree strings.
//!
//! This module provides the [TreeStringParser] struct, which turns a string
//! such as `"1,2,3,4,null,5,6"` into a [BinaryTree].

use crate::error::TreeError;
use crate::model::{BinaryTree, NodeIndex, Side};
use crate::text::defs::{DEFAULT_NULL_TOKENS, DEFAULT_TRIM_CHARS, TOKEN_SEPARATOR};
use std::collections::VecDeque;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{debug, warn};

// =#========================================================================#=
// TREE STRING PARSER
// =#========================================================================$=
/// Parser (configuration) for level-order tree strings.
///
/// The first token is the root. Then, for every node in level-order, the
/// next two tokens are its left and its right child. A null token marks an
/// absent child, which also receives no tokens of its own. Once the tokens
/// run out, all remaining slots are absent, so trailing levels may be given
/// partially.
///
/// # Configuration
/// * [`with_null_token(token)`](Self::with_null_token)
///     - Adds a token that marks an absent child, besides `""` and `"null"`.
/// * [`with_trim_chars(chars)`](Self::with_trim_chars)
///     - Replaces the characters trimmed from both ends of every token
///       (default: whitespace, brackets and quotes).
/// * [`without_connect()`](Self::without_connect)
///     - Skips linking level neighbours after parsing.
///
/// # Values
/// Tokens are converted with [FromStr]. Parsing into
/// [NodeValue](crate::model::NodeValue) never fails, as tokens that are not
/// integers are kept as strings. Any other type fails on the first token it
/// cannot represent.
///
/// # Example
/// ```
/// use bintree::text::TreeStringParser;
///
/// let tree = TreeStringParser::new()
///     .parse::<i64>("[1, 2, 3, 4, null, 5, 6]")
///     .unwrap()
///     .unwrap();
/// assert_eq!(tree.num_nodes(), 6);
/// assert_eq!(tree.root().value(), &1);
/// ```
#[derive(Debug, Clone)]
pub struct TreeStringParser {
    null_tokens: Vec<String>,
    trim_chars: Vec<char>,
    connect: bool,
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl TreeStringParser {
    /// Creates a new [TreeStringParser] with default settings:
    /// - `""` and `"null"` mark absent children
    /// - Whitespace, `[`, `]`, `'` and `"` are trimmed from tokens
    /// - Level neighbours get connected
    pub fn new() -> Self {
        Self {
            null_tokens: DEFAULT_NULL_TOKENS.iter().map(|t| t.to_string()).collect(),
            trim_chars: DEFAULT_TRIM_CHARS.to_vec(),
            connect: true,
        }
    }

    /// Adds a token that marks an absent child, e.g. `"None"` or `"#"`.
    pub fn with_null_token<S: Into<String>>(mut self, token: S) -> Self {
        self.null_tokens.push(token.into());
        self
    }

    /// Sets the characters trimmed from both ends of every token.
    pub fn with_trim_chars(mut self, chars: &[char]) -> Self {
        self.trim_chars = chars.to_vec();
        self
    }

    /// Configures the parser to not run the connect pass on parsed trees.
    pub fn without_connect(mut self) -> Self {
        self.connect = false;
        self
    }
}

impl Default for TreeStringParser {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl TreeStringParser {
    /// Parses a level-order tree string.
    ///
    /// # Arguments
    /// * `text` - Comma-separated tokens in level-order
    ///
    /// # Returns
    /// * `Ok(Some(tree))` - The parsed tree
    /// * `Ok(None)` - If the text is empty or the root token is a null token
    /// * `Err(TreeError::InvalidToken)` - If a token cannot be converted to `V`
    pub fn parse<V>(&self, text: &str) -> Result<Option<BinaryTree<V>>, TreeError>
    where
        V: FromStr,
        V::Err: Display,
    {
        let capacity = text.matches(TOKEN_SEPARATOR).count() + 1;
        let mut tokens = text
            .split(TOKEN_SEPARATOR)
            .map(|token| token.trim_matches(self.trim_chars.as_slice()))
            .enumerate();

        let root_token = match tokens.next() {
            Some((_, token)) if !self.is_null(token) => token,
            _ => return Ok(None),
        };

        let mut tree = BinaryTree::with_capacity(parse_value(0, root_token)?, capacity);
        let mut queue: VecDeque<NodeIndex> = VecDeque::from([tree.root_index()]);

        'levels: while let Some(parent) = queue.pop_front() {
            for side in [Side::Left, Side::Right] {
                let Some((position, token)) = tokens.next() else {
                    break 'levels;
                };
                if self.is_null(token) {
                    continue;
                }
                let child = tree.add_child(parent, side, parse_value(position, token)?);
                queue.push_back(child);
            }
        }

        let ignored = tokens.filter(|(_, token)| !self.is_null(token)).count();
        if ignored > 0 {
            warn!(ignored, "ignoring tokens after the last level of the tree");
        }

        if self.connect {
            tree.connect();
        }

        debug!(num_nodes = tree.num_nodes(), "parsed tree string");
        Ok(Some(tree))
    }

    /// Returns whether the (trimmed) token marks an absent child.
    fn is_null(&self, token: &str) -> bool {
        self.null_tokens.iter().any(|null| null == token)
    }
}

/// Converts a token into a value, keeping the token and its position on error.
fn parse_value<V>(position: usize, token: &str) -> Result<V, TreeError>
where
    V: FromStr,
    V::Err: Display,
{
    token.parse::<V>().map_err(|err| TreeError::InvalidToken {
        position,
        token: token.to_string(),
        reason: err.to_string(),
    })
}
