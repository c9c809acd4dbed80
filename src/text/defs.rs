//! Constants for reading and writing level-order tree strings.

/// Separator between tokens
pub(crate) const TOKEN_SEPARATOR: char = ',';

/// Tokens denoting an absent child
pub(crate) const DEFAULT_NULL_TOKENS: &[&str] = &["", "null"];

/// Keyword written for an absent child
pub(crate) const NULL_KEYWORD: &str = "null";

/// Characters trimmed from both ends of every token: whitespace, brackets, quotes
pub(crate) const DEFAULT_TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '[', ']', '\'', '"'];

/// Guess for the length of a printed value, when estimating output length
pub(crate) const VALUE_CHARS_GUESS: usize = 3;
