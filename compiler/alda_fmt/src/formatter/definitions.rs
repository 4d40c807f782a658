//! Variable definitions and voices.
//!
//! # Variable definitions
//!
//! The name, `=` and the values must share one physical line, so wrapping is
//! paused while they are written. The exception is a final bracketed value:
//! its `[` stays on the definition line, but the contents are indented and
//! wrap normally before the closing `]`.
//!
//! ```text
//! motif = c d e
//! theme = c [
//!     d e f g
//! ]
//! ```

use alda_ir::{Node, NodeKind};

use super::Formatter;
use crate::error::Result;

impl Formatter {
    pub(super) fn format_variable_definition(&mut self, definition: &Node) -> Result<()> {
        definition.expect_n_children(&[2])?;
        let name = definition.child(0, NodeKind::VariableName)?.text()?;
        let values = definition.child(1, NodeKind::EventSequence)?.children();
        let depth = self.ctx.indent_level();

        self.ctx.flush();
        self.ctx.pause_wrap();
        self.ctx.write(format!("{name} ="));

        if let Some((last, init)) = values.split_last() {
            for value in init {
                self.format(value)?;
            }

            if last.is(NodeKind::EventSequence) {
                self.ctx.write("[");
                self.ctx.indent();
                self.ctx.resume_wrap();
                self.format_events(last.children())?;
                self.ctx.dedent();
                self.ctx.write("]");
            } else {
                self.format(last)?;
            }
        }

        self.ctx.dedent_to(depth);
        self.ctx.resume_wrap();
        self.ctx.flush();
        Ok(())
    }

    /// `V<n>:` with the voice's events indented below it.
    pub(super) fn format_voice(&mut self, voice: &Node) -> Result<()> {
        voice.expect_n_children(&[2])?;
        let number = voice.child(0, NodeKind::VoiceNumber)?.int()?;
        let events = voice.child(1, NodeKind::EventSequence)?;

        self.ctx.write(format!("V{number}:"));
        self.indented(|f| f.format_events(events.children()))
    }
}
