//! Crams, bracketed sequences, repeats and repetitions.

use alda_ir::{Node, NodeKind};

use super::Formatter;
use crate::duration::duration_tokens;
use crate::error::Result;

impl Formatter {
    /// `{ events }` followed by an optional duration glued to the `}`.
    ///
    /// Cram contents stay inline; they are not indented.
    pub(super) fn format_cram(&mut self, cram: &Node) -> Result<()> {
        cram.expect_n_children(&[1, 2])?;
        let events = cram.child(0, NodeKind::EventSequence)?;

        self.ctx.write("{");
        self.format_events(events.children())?;

        match cram.optional_child(1, NodeKind::Duration)? {
            Some(duration) => {
                let tokens = duration_tokens("}", duration, "")?;
                self.write_tokens(tokens);
            }
            None => self.ctx.write("}"),
        }
        Ok(())
    }

    /// A standalone `[ ... ]` block always gets its own lines, with the
    /// contents indented.
    pub(super) fn format_event_sequence(&mut self, sequence: &Node) -> Result<()> {
        self.ctx.flush();
        self.ctx.write("[");
        self.indented(|f| f.format_events(sequence.children()))?;
        self.ctx.write("]");
        self.ctx.flush();
        Ok(())
    }

    /// `event *times`
    pub(super) fn format_repeat(&mut self, repeat: &Node) -> Result<()> {
        repeat.expect_n_children(&[2])?;
        self.format(&repeat.children()[0])?;
        let times = repeat.child(1, NodeKind::Times)?.int()?;
        self.ctx.write(format!("*{times}"));
        Ok(())
    }

    /// `event '1,3-5`
    pub(super) fn format_repetitions(&mut self, repetitions: &Node) -> Result<()> {
        repetitions.expect_n_children(&[2])?;
        self.format(&repetitions.children()[0])?;

        let list = repetitions.child(1, NodeKind::RepetitionList)?;
        let ranges = list
            .children()
            .iter()
            .map(repetition_range)
            .collect::<Result<Vec<_>>>()?;
        self.ctx.write(format!("'{}", ranges.join(",")));
        Ok(())
    }
}

/// `n` when the range covers a single repetition, `first-last` otherwise.
fn repetition_range(range: &Node) -> Result<String> {
    range.expect_kind(NodeKind::RepetitionRange)?;
    range.expect_n_children(&[2])?;
    let first = range.child(0, NodeKind::FirstRepetition)?.int()?;
    let last = range.child(1, NodeKind::LastRepetition)?.int()?;

    if first == last {
        Ok(first.to_string())
    } else {
        Ok(format!("{first}-{last}"))
    }
}
