//! Shape errors.
//!
//! Raised when a node's children or literal do not match what its kind
//! requires. Every variant carries a debug rendering of the offending node.

use thiserror::Error;

use crate::{LiteralType, NodeKind};

/// A node does not have the shape its kind requires.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Child count is not one of the allowed counts.
    #[error("{kind} node expects {} children, found {found}: {node}", counts(.expected))]
    ChildCount {
        kind: NodeKind,
        expected: Vec<usize>,
        found: usize,
        node: String,
    },

    /// Node requires at least one child.
    #[error("{kind} node expects at least one child: {node}")]
    NoChildren { kind: NodeKind, node: String },

    /// Node appears where a different kind is required.
    #[error("expected {expected} node, found {found}: {node}")]
    UnexpectedKind {
        expected: NodeKind,
        found: NodeKind,
        node: String,
    },

    /// Integer literal used as a count is negative.
    #[error("{kind} node expects a non-negative count, found {value}: {node}")]
    NegativeCount {
        kind: NodeKind,
        value: i32,
        node: String,
    },

    /// Literal payload is missing or of the wrong type.
    #[error("{kind} node expects a {expected} literal: {node}")]
    Literal {
        kind: NodeKind,
        expected: LiteralType,
        node: String,
    },
}

/// Render allowed counts as `1`, `1 or 2`, `1, 2 or 3`.
fn counts(expected: &[usize]) -> String {
    match expected {
        [] => "no".to_owned(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} or {last}", init.join(", "))
        }
    }
}
