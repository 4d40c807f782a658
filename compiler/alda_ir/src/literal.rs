//! Literal payloads carried by leaf nodes.

use std::fmt;

/// Literal value stored on a node. Which variant a node carries depends on
/// its [`NodeKind`](crate::NodeKind).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Literal {
    Text(String),
    Int(i32),
    Char(char),
    Float(f64),
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Text(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Text(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value)
    }
}

impl From<char> for Literal {
    fn from(value: char) -> Self {
        Literal::Char(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

/// Discriminant of [`Literal`], used when reporting a mismatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralType {
    Text,
    Int,
    Char,
    Float,
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralType::Text => "text",
            LiteralType::Int => "integer",
            LiteralType::Char => "character",
            LiteralType::Float => "float",
        })
    }
}
