//! Tree nodes and shape validation.
//!
//! A [`Node`] is a kind, an optional literal, and ordered children. The
//! tree is produced by the parser and only read afterwards. Consumers check
//! the shape they rely on with the `expect_*` combinators, which return a
//! [`ShapeError`] instead of panicking.

use crate::{Literal, LiteralType, NodeKind, ShapeError};

/// A node of a parsed Alda score.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    kind: NodeKind,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    literal: Option<Literal>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    children: Vec<Node>,
}

impl Node {
    /// Node with neither literal nor children.
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            literal: None,
            children: Vec::new(),
        }
    }

    /// Leaf node carrying a literal.
    pub fn leaf(kind: NodeKind, literal: impl Into<Literal>) -> Self {
        Node {
            kind,
            literal: Some(literal.into()),
            children: Vec::new(),
        }
    }

    /// Interior node with the given children.
    pub fn branch(kind: NodeKind, children: Vec<Node>) -> Self {
        Node {
            kind,
            literal: None,
            children,
        }
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Check the kind without failing.
    #[inline]
    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    // === Shape validation ===

    /// Require this node to be of `kind`.
    pub fn expect_kind(&self, kind: NodeKind) -> Result<&Node, ShapeError> {
        if self.kind == kind {
            Ok(self)
        } else {
            Err(ShapeError::UnexpectedKind {
                expected: kind,
                found: self.kind,
                node: self.summary(),
            })
        }
    }

    /// Require the child count to be exactly one of `counts`.
    pub fn expect_n_children(&self, counts: &[usize]) -> Result<(), ShapeError> {
        if counts.contains(&self.children.len()) {
            Ok(())
        } else {
            Err(ShapeError::ChildCount {
                kind: self.kind,
                expected: counts.to_vec(),
                found: self.children.len(),
                node: self.summary(),
            })
        }
    }

    /// Require at least one child.
    pub fn expect_children(&self) -> Result<(), ShapeError> {
        if self.children.is_empty() {
            Err(ShapeError::NoChildren {
                kind: self.kind,
                node: self.summary(),
            })
        } else {
            Ok(())
        }
    }

    /// Child at `index`, which must be of `kind`.
    pub fn child(&self, index: usize, kind: NodeKind) -> Result<&Node, ShapeError> {
        match self.children.get(index) {
            Some(child) => child.expect_kind(kind),
            None => Err(ShapeError::ChildCount {
                kind: self.kind,
                expected: vec![index + 1],
                found: self.children.len(),
                node: self.summary(),
            }),
        }
    }

    /// Child at `index` if present, which must then be of `kind`.
    pub fn optional_child(&self, index: usize, kind: NodeKind) -> Result<Option<&Node>, ShapeError> {
        self.children
            .get(index)
            .map(|child| child.expect_kind(kind))
            .transpose()
    }

    // === Literals ===

    /// Text literal.
    pub fn text(&self) -> Result<&str, ShapeError> {
        match &self.literal {
            Some(Literal::Text(text)) => Ok(text),
            _ => Err(self.literal_error(LiteralType::Text)),
        }
    }

    /// Integer literal.
    pub fn int(&self) -> Result<i32, ShapeError> {
        match self.literal {
            Some(Literal::Int(value)) => Ok(value),
            _ => Err(self.literal_error(LiteralType::Int)),
        }
    }

    /// Integer literal used as a count; negative values are rejected.
    pub fn count(&self) -> Result<usize, ShapeError> {
        let value = self.int()?;
        usize::try_from(value).map_err(|_| ShapeError::NegativeCount {
            kind: self.kind,
            value,
            node: self.summary(),
        })
    }

    /// Character literal.
    pub fn character(&self) -> Result<char, ShapeError> {
        match self.literal {
            Some(Literal::Char(value)) => Ok(value),
            _ => Err(self.literal_error(LiteralType::Char)),
        }
    }

    /// Float literal.
    pub fn float(&self) -> Result<f64, ShapeError> {
        match self.literal {
            Some(Literal::Float(value)) => Ok(value),
            _ => Err(self.literal_error(LiteralType::Float)),
        }
    }

    fn literal_error(&self, expected: LiteralType) -> ShapeError {
        ShapeError::Literal {
            kind: self.kind,
            expected,
            node: self.summary(),
        }
    }

    /// One-line description for diagnostics: kind, literal, and child kinds.
    ///
    /// Children are listed by kind only so a bad node deep inside a large
    /// part does not dump the whole subtree.
    pub fn summary(&self) -> String {
        let mut out = format!("{:?}", self.kind);
        if let Some(literal) = &self.literal {
            out.push_str(&format!(" {literal:?}"));
        }
        if !self.children.is_empty() {
            let kinds: Vec<String> = self
                .children
                .iter()
                .map(|child| format!("{:?}", child.kind))
                .collect();
            out.push_str(&format!(" [{}]", kinds.join(", ")));
        }
        out
    }
}

#[cfg(test)]
mod tests;
