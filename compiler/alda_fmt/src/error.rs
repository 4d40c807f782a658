//! Formatting errors.

use std::io;

use alda_ir::{NodeKind, ShapeError};
use thiserror::Error;

/// Why a score could not be formatted.
///
/// All variants abort the whole run; nothing is written to the caller's sink.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A node's children or literal do not match its kind.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// A node kind has no formatting rule in this position.
    #[error("unexpected {kind} node in {context}: {node}")]
    UnexpectedNode {
        /// Construct being formatted, e.g. "event" or "duration".
        context: &'static str,
        kind: NodeKind,
        node: String,
    },

    /// Writing the finished output to the sink failed.
    #[error("failed to write formatted output")]
    Io(#[from] io::Error),
}

impl FormatError {
    pub(crate) fn unexpected(context: &'static str, node: &alda_ir::Node) -> Self {
        FormatError::UnexpectedNode {
            context,
            kind: node.kind(),
            node: node.summary(),
        }
    }
}

/// Result alias for formatting operations.
pub type Result<T, E = FormatError> = std::result::Result<T, E>;
