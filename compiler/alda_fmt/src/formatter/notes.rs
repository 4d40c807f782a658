//! Notes, rests and chords.

use alda_ir::{Node, NodeKind};

use super::Formatter;
use crate::duration::duration_tokens;
use crate::error::{FormatError, Result};

impl Formatter {
    /// Chord members are separated by `/`.
    ///
    /// Only directly adjacent notes and rests are joined; a directive between
    /// two members (e.g. an octave change) stands on its own with spaces
    /// around it, and no separator trails the last member.
    pub(super) fn format_chord(&mut self, chord: &Node) -> Result<()> {
        chord.expect_children()?;

        // Tokens of the current run of adjacent notes and rests.
        let mut run: Vec<String> = Vec::new();
        for child in chord.children() {
            if child.kind().is_note_or_rest() {
                let tokens = note_or_rest_tokens(child)?;
                join_chord_member(&mut run, tokens);
            } else {
                self.write_tokens(std::mem::take(&mut run));
                self.format(child)?;
            }
        }
        self.write_tokens(run);
        Ok(())
    }
}

/// Glue the first token of a chord member onto the previous member with `/`.
///
/// A previous member ending in a barline keeps `|` standalone; the separator
/// then starts the next member's token instead.
fn join_chord_member(run: &mut Vec<String>, tokens: Vec<String>) {
    let mut tokens = tokens.into_iter();
    let Some(first) = tokens.next() else {
        return;
    };

    if run.last().is_some_and(|last| last == "|") {
        run.push(format!("/{first}"));
    } else if let Some(previous) = run.last_mut() {
        previous.push('/');
        previous.push_str(&first);
    } else {
        run.push(first);
    }
    run.extend(tokens);
}

/// Tokens for a note or rest.
pub(super) fn note_or_rest_tokens(node: &Node) -> Result<Vec<String>> {
    match node.kind() {
        NodeKind::Note => note_tokens(node),
        NodeKind::Rest => rest_tokens(node),
        _ => Err(FormatError::unexpected("note", node)),
    }
}

fn note_tokens(note: &Node) -> Result<Vec<String>> {
    note.expect_n_children(&[1, 2, 3])?;
    let pitch = pitch_text(note.child(0, NodeKind::NoteLetterAndAccidentals)?)?;
    let tie = match note.optional_child(2, NodeKind::Tie)? {
        Some(_) => "~",
        None => "",
    };

    match note.optional_child(1, NodeKind::Duration)? {
        Some(duration) => duration_tokens(&pitch, duration, tie),
        None => Ok(vec![format!("{pitch}{tie}")]),
    }
}

fn rest_tokens(rest: &Node) -> Result<Vec<String>> {
    rest.expect_n_children(&[0, 1])?;
    match rest.optional_child(0, NodeKind::Duration)? {
        Some(duration) => duration_tokens("r", duration, ""),
        None => Ok(vec!["r".to_owned()]),
    }
}

/// Letter followed by accidentals in source order: `+` sharp, `-` flat,
/// `_` natural.
fn pitch_text(pitch: &Node) -> Result<String> {
    pitch.expect_n_children(&[1, 2])?;
    let mut text = String::new();
    text.push(pitch.child(0, NodeKind::NoteLetter)?.character()?);

    if let Some(accidentals) = pitch.optional_child(1, NodeKind::NoteAccidentals)? {
        for accidental in accidentals.children() {
            text.push(match accidental.kind() {
                NodeKind::Sharp => '+',
                NodeKind::Flat => '-',
                NodeKind::Natural => '_',
                _ => return Err(FormatError::unexpected("accidentals", accidental)),
            });
        }
    }

    Ok(text)
}
