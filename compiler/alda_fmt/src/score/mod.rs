//! Score Formatting
//!
//! Top-level driver: walks the parts of a score, writes part headers, and
//! separates consecutive parts with a blank line. Events inside each part are
//! handed to the [`Formatter`] dispatcher.
//!
//! Output is built in memory and only written to the caller's sink once the
//! whole score has formatted successfully, so a malformed tree never leaves
//! partial output behind.

use std::io::Write;

use alda_ir::{Node, NodeKind};

use crate::context::FormatConfig;
use crate::error::{FormatError, Result};
use crate::formatter::Formatter;

/// Format a score to `out` with default config.
pub fn format_score<W: Write + ?Sized>(root: &Node, out: &mut W) -> Result<()> {
    format_score_with_config(root, out, &FormatConfig::default())
}

/// Format a score to `out` with custom config.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(parts = root.children().len(), soft_wrap = config.soft_wrap)
)]
pub fn format_score_with_config<W: Write + ?Sized>(
    root: &Node,
    out: &mut W,
    config: &FormatConfig,
) -> Result<()> {
    let formatted = format_to_string(root, config)?;
    out.write_all(formatted.as_bytes())?;
    Ok(())
}

/// Format a score to a string.
pub fn format_to_string(root: &Node, config: &FormatConfig) -> Result<String> {
    let mut formatter = Formatter::with_config(config.clone());
    formatter.format_root(root)?;
    Ok(formatter.finalize())
}

impl Formatter {
    /// Format a whole score: each part in order, blank lines between them.
    pub fn format_root(&mut self, root: &Node) -> Result<()> {
        root.expect_kind(NodeKind::Root)?;
        let parts = root.children();

        for (i, part) in parts.iter().enumerate() {
            match part.kind() {
                NodeKind::ImplicitPart => self.format_implicit_part(part)?,
                NodeKind::Part => self.format_part(part)?,
                _ => return Err(FormatError::unexpected("score", part)),
            }
            if i + 1 < parts.len() {
                self.ctx.blank_line();
            }
        }

        self.ctx.flush();
        Ok(())
    }

    /// Events before any part declaration, written without a header.
    fn format_implicit_part(&mut self, part: &Node) -> Result<()> {
        part.expect_n_children(&[1])?;
        let events = part.child(0, NodeKind::EventSequence)?;
        self.format_events(events.children())
    }

    /// `names:` or `names "alias":`, with the part's events indented below.
    fn format_part(&mut self, part: &Node) -> Result<()> {
        part.expect_n_children(&[2])?;
        let header = part_header(part.child(0, NodeKind::PartDeclaration)?)?;
        let events = part.child(1, NodeKind::EventSequence)?;

        tracing::debug!(header = %header, events = events.children().len(), "formatting part");
        self.ctx.write(header);
        self.indented(|f| f.format_events(events.children()))
    }
}

/// Part names joined by `/`, then the quoted alias if any, then `:`.
fn part_header(declaration: &Node) -> Result<String> {
    declaration.expect_n_children(&[1, 2])?;
    let names = declaration.child(0, NodeKind::PartNames)?;
    names.expect_children()?;
    let names = names
        .children()
        .iter()
        .map(|name| name.expect_kind(NodeKind::PartName).and_then(Node::text))
        .collect::<Result<Vec<_>, _>>()?
        .join("/");

    match declaration.optional_child(1, NodeKind::PartAlias)? {
        Some(alias) => Ok(format!("{names} \"{}\":", alias.text()?)),
        None => Ok(format!("{names}:")),
    }
}
