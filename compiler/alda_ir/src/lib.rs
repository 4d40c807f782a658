//! Alda IR - Score Syntax Trees
//!
//! Tree types shared between the Alda parser and the formatter:
//! - [`NodeKind`]: the closed set of node tags
//! - [`Literal`]: text, integer, character and float payloads
//! - [`Node`]: kind + literal + ordered children, with shape validation
//! - [`ShapeError`]: reported when a node does not match its kind's shape
//! - [`build`]: constructors for well-formed nodes
//!
//! # Design
//!
//! The tree is deliberately untyped below the kind tag: the parser emits
//! generic nodes and every consumer validates the shape it depends on with
//! the `expect_*` combinators. A malformed tree is an error value, never a
//! panic.
//!
//! Enable the `serde` feature to (de)serialize trees, e.g. as JSON fixtures.

pub mod build;
mod error;
mod kind;
mod literal;
mod node;

pub use error::ShapeError;
pub use kind::NodeKind;
pub use literal::{Literal, LiteralType};
pub use node::Node;
