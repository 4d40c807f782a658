//! Duration Formatting
//!
//! A duration attaches to a note, rest or cram and is written directly after
//! its prefix (pitch text, `r`, `}`) with no spaces. Components tie together
//! with `~` into one unwrappable token; barlines are metrically significant,
//! so they split the duration into separate tokens that wrap independently.
//!
//! # Suffix placement
//!
//! The suffix (a note's tie `~`) follows the last length. When the final
//! component is itself a barline the suffix goes *before* it, so `c4~|`
//! reads as a tie into the next bar. Only a terminal barline takes the
//! suffix; earlier barlines never do.

use alda_ir::{Node, NodeKind};

use crate::error::{FormatError, Result};

/// Render `prefix`, the components of `duration`, and `suffix` as tokens.
///
/// Returns the tokens in order; barlines are their own `|` tokens.
pub fn duration_tokens(prefix: &str, duration: &Node, suffix: &str) -> Result<Vec<String>> {
    let components = duration.expect_kind(NodeKind::Duration)?.children();
    let mut tokens = Vec::new();
    let mut text = String::from(prefix);
    let mut should_tie = false;

    for (i, component) in components.iter().enumerate() {
        match component.kind() {
            NodeKind::NoteLengthMs => {
                if should_tie {
                    text.push('~');
                }
                text.push_str(component.text()?);
                should_tie = true;
            }
            NodeKind::NoteLength => {
                if should_tie {
                    text.push('~');
                }
                write_note_length(&mut text, component)?;
                should_tie = true;
            }
            NodeKind::Barline => {
                if i == components.len() - 1 {
                    text.push_str(suffix);
                }
                if !text.is_empty() {
                    tokens.push(std::mem::take(&mut text));
                }
                tokens.push("|".to_owned());
                should_tie = false;
            }
            _ => return Err(FormatError::unexpected("duration", component)),
        }
    }

    if !text.is_empty() {
        text.push_str(suffix);
        tokens.push(text);
    }

    Ok(tokens)
}

/// Append a fractional note length: denominator then one `.` per dot.
fn write_note_length(text: &mut String, length: &Node) -> Result<()> {
    length.expect_n_children(&[1, 2])?;
    let denominator = length.child(0, NodeKind::Denominator)?.float()?;
    let dots = match length.optional_child(1, NodeKind::Dots)? {
        Some(dots) => dots.count()?,
        None => 0,
    };
    text.push_str(&denominator.to_string());
    text.push_str(&".".repeat(dots));
    Ok(())
}
