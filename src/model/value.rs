//! Node payload produced when reading level-order strings.
//!
//! Provides [NodeValue], which stores a token either as integer or, if the
//! token is not numeric, as the raw string.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// =#========================================================================#=
// NODE VALUE
// =#========================================================================$=
/// Enum to encapsulate a parsed node value.
///
/// Integers order before strings; within a variant the natural order applies.
///
/// Only tokens that fit an `i64` become [NodeValue::Int]. A numeric token
/// outside that range, e.g. `99999999999999999999`, is kept as
/// [NodeValue::Str] and hence does not count towards path sums.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeValue {
    /// For integer tokens
    Int(i64),
    /// For any other token, stored verbatim
    Str(String),
}

impl NodeValue {
    /// Returns the integer, or `None` for a string value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            NodeValue::Int(v) => Some(*v),
            NodeValue::Str(_) => None,
        }
    }

    /// Returns the string, or `None` for an integer value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeValue::Int(_) => None,
            NodeValue::Str(s) => Some(s),
        }
    }
}

/// Tries an integer parse first and falls back to the raw token, so parsing
/// never fails.
impl FromStr for NodeValue {
    type Err = Infallible;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(match token.parse::<i64>() {
            Ok(v) => NodeValue::Int(v),
            Err(_) => NodeValue::Str(token.to_string()),
        })
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeValue::Int(v) => write!(f, "{v}"),
            NodeValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeValue {
    fn from(v: i64) -> Self {
        NodeValue::Int(v)
    }
}

impl From<i32> for NodeValue {
    fn from(v: i32) -> Self {
        NodeValue::Int(v as i64)
    }
}

impl From<String> for NodeValue {
    fn from(v: String) -> Self {
        NodeValue::Str(v)
    }
}

impl From<&str> for NodeValue {
    fn from(v: &str) -> Self {
        NodeValue::Str(v.to_string())
    }
}
