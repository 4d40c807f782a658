//! Lisp expression printing.
//!
//! Embedded S-expressions are short, so each one is rendered to a single
//! string and written as one unwrappable token.

use alda_ir::{Node, NodeKind};

use crate::error::{FormatError, Result};

/// Render an S-expression subtree in canonical form.
///
/// Lists are parenthesised with single spaces between elements, strings are
/// double-quoted without escaping, quoted forms get a leading `'`.
pub fn lisp_to_string(node: &Node) -> Result<String> {
    match node.kind() {
        NodeKind::LispList => {
            let elements = node
                .children()
                .iter()
                .map(lisp_to_string)
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("({})", elements.join(" ")))
        }
        NodeKind::LispNumber => Ok(node.int()?.to_string()),
        NodeKind::LispString => Ok(format!("\"{}\"", node.text()?)),
        NodeKind::LispSymbol => Ok(node.text()?.to_owned()),
        NodeKind::LispQuotedForm => {
            node.expect_n_children(&[1])?;
            Ok(format!("'{}", lisp_to_string(&node.children()[0])?))
        }
        _ => Err(FormatError::unexpected("lisp expression", node)),
    }
}
