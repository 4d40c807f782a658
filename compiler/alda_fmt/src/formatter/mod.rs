//! Formatter Core
//!
//! The node dispatcher: one rule per node kind, each reconstructing the
//! node's source text and recursing into its children. All output goes
//! through the [`FormatContext`] line buffer, which owns wrapping and
//! indentation.
//!
//! # Modules
//!
//! - [`notes`]: Notes, rests and chords
//! - [`definitions`]: Variable definitions and voices
//! - [`grouping`]: Crams, bracketed sequences, repeats and repetitions

mod definitions;
mod grouping;
mod notes;

use alda_ir::{Node, NodeKind};

use crate::context::{FormatConfig, FormatContext};
use crate::error::{FormatError, Result};
use crate::lisp::lisp_to_string;

/// Formatter for Alda events.
///
/// Owns the formatting state for one run. Create a fresh formatter per
/// score; state never carries over between runs.
#[derive(Default)]
pub struct Formatter {
    pub(crate) ctx: FormatContext,
}

impl Formatter {
    /// Create a new formatter with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new formatter with custom config.
    pub fn with_config(config: FormatConfig) -> Self {
        Self {
            ctx: FormatContext::with_config(config),
        }
    }

    /// Flush the pending line and return the formatted output.
    pub fn finalize(self) -> String {
        self.ctx.finalize()
    }

    /// Get the formatting context.
    pub fn context(&self) -> &FormatContext {
        &self.ctx
    }

    /// Format a single event.
    pub fn format(&mut self, node: &Node) -> Result<()> {
        match node.kind() {
            NodeKind::AtMarker => self.ctx.write(format!("@{}", node.text()?)),
            NodeKind::Barline => self.ctx.write("|"),
            NodeKind::Marker => self.ctx.write(format!("%{}", node.text()?)),
            NodeKind::OctaveUp => self.ctx.write(">"),
            NodeKind::OctaveDown => self.ctx.write("<"),
            NodeKind::OctaveSet => self.ctx.write(format!("o{}", node.int()?)),
            NodeKind::VariableReference => self.ctx.write(node.text()?),
            NodeKind::Note | NodeKind::Rest => {
                let tokens = notes::note_or_rest_tokens(node)?;
                self.write_tokens(tokens);
            }
            NodeKind::Chord => self.format_chord(node)?,
            NodeKind::Cram => self.format_cram(node)?,
            NodeKind::EventSequence => self.format_event_sequence(node)?,
            NodeKind::Repeat => self.format_repeat(node)?,
            NodeKind::Repetitions => self.format_repetitions(node)?,
            NodeKind::VariableDefinition => self.format_variable_definition(node)?,
            NodeKind::Voice => self.format_voice(node)?,
            NodeKind::VoiceGroupEndMarker => {
                // Closed by `format_events` once the enclosing sequence ends.
                self.ctx.write("V0:");
                self.ctx.indent();
            }
            NodeKind::VoiceGroup => self.format_events(node.children())?,
            NodeKind::LispList => self.ctx.write(lisp_to_string(node)?),

            // Only valid as positional children of the kinds above.
            NodeKind::Root
            | NodeKind::ImplicitPart
            | NodeKind::Part
            | NodeKind::PartDeclaration
            | NodeKind::PartNames
            | NodeKind::PartName
            | NodeKind::PartAlias
            | NodeKind::NoteLetterAndAccidentals
            | NodeKind::NoteLetter
            | NodeKind::NoteAccidentals
            | NodeKind::Sharp
            | NodeKind::Flat
            | NodeKind::Natural
            | NodeKind::Tie
            | NodeKind::Duration
            | NodeKind::NoteLength
            | NodeKind::Denominator
            | NodeKind::Dots
            | NodeKind::NoteLengthMs
            | NodeKind::VariableName
            | NodeKind::Times
            | NodeKind::RepetitionList
            | NodeKind::RepetitionRange
            | NodeKind::FirstRepetition
            | NodeKind::LastRepetition
            | NodeKind::VoiceNumber
            | NodeKind::LispNumber
            | NodeKind::LispString
            | NodeKind::LispSymbol
            | NodeKind::LispQuotedForm => return Err(FormatError::unexpected("event", node)),
        }
        Ok(())
    }

    /// Format a run of sibling events.
    ///
    /// Indentation opened by a `V0:` marker lasts until the end of the
    /// sequence that contains it, so the depth on entry is restored on exit.
    pub fn format_events(&mut self, events: &[Node]) -> Result<()> {
        let depth = self.ctx.indent_level();
        for event in events {
            self.format(event)?;
        }
        self.ctx.dedent_to(depth);
        Ok(())
    }

    /// Run `f` one indentation level deeper.
    pub(crate) fn indented<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.ctx.indent();
        let result = f(self);
        self.ctx.dedent();
        result
    }

    fn write_tokens(&mut self, tokens: Vec<String>) {
        for token in tokens {
            self.ctx.write(token);
        }
    }
}
