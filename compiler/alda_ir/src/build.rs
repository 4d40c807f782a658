//! Constructors for well-formed nodes.
//!
//! Each function builds a node in the shape the formatter expects. Parsers
//! and tests use these instead of assembling children by hand.

use crate::{Node, NodeKind};

// === Score structure ===

pub fn root(parts: Vec<Node>) -> Node {
    Node::branch(NodeKind::Root, parts)
}

pub fn implicit_part(events: Vec<Node>) -> Node {
    Node::branch(NodeKind::ImplicitPart, vec![event_sequence(events)])
}

/// Declared part, e.g. `violin/viola "strings":`.
pub fn part(names: &[&str], alias: Option<&str>, events: Vec<Node>) -> Node {
    let names = Node::branch(
        NodeKind::PartNames,
        names
            .iter()
            .map(|name| Node::leaf(NodeKind::PartName, *name))
            .collect(),
    );
    let mut declaration = vec![names];
    if let Some(alias) = alias {
        declaration.push(Node::leaf(NodeKind::PartAlias, alias));
    }
    Node::branch(
        NodeKind::Part,
        vec![
            Node::branch(NodeKind::PartDeclaration, declaration),
            event_sequence(events),
        ],
    )
}

pub fn event_sequence(events: Vec<Node>) -> Node {
    Node::branch(NodeKind::EventSequence, events)
}

// === Notes ===

/// Letter plus accidentals, e.g. `pitch('f', &[NodeKind::Sharp])`.
pub fn pitch(letter: char, accidentals: &[NodeKind]) -> Node {
    let mut children = vec![Node::leaf(NodeKind::NoteLetter, letter)];
    if !accidentals.is_empty() {
        children.push(Node::branch(
            NodeKind::NoteAccidentals,
            accidentals.iter().map(|kind| Node::new(*kind)).collect(),
        ));
    }
    Node::branch(NodeKind::NoteLetterAndAccidentals, children)
}

/// Bare note without accidentals, duration or tie.
pub fn note(letter: char) -> Node {
    note_with(pitch(letter, &[]), None, false)
}

/// Note with an optional duration and tie.
///
/// A tie without a duration is stored after an empty duration, keeping the
/// tie at its fixed position.
pub fn note_with(pitch: Node, duration: Option<Node>, tied: bool) -> Node {
    let mut children = vec![pitch];
    match (duration, tied) {
        (Some(duration), tied) => {
            children.push(duration);
            if tied {
                children.push(Node::new(NodeKind::Tie));
            }
        }
        (None, true) => {
            children.push(self::duration(Vec::new()));
            children.push(Node::new(NodeKind::Tie));
        }
        (None, false) => {}
    }
    Node::branch(NodeKind::Note, children)
}

pub fn rest(duration: Option<Node>) -> Node {
    Node::branch(NodeKind::Rest, duration.into_iter().collect())
}

pub fn chord(children: Vec<Node>) -> Node {
    Node::branch(NodeKind::Chord, children)
}

// === Durations ===

pub fn duration(components: Vec<Node>) -> Node {
    Node::branch(NodeKind::Duration, components)
}

/// Fractional note length, e.g. `note_length(4.0, 1)` for `4.`.
pub fn note_length(denominator: f64, dots: i32) -> Node {
    let mut children = vec![Node::leaf(NodeKind::Denominator, denominator)];
    if dots > 0 {
        children.push(Node::leaf(NodeKind::Dots, dots));
    }
    Node::branch(NodeKind::NoteLength, children)
}

/// Millisecond length stored as its source text, e.g. `500ms`.
pub fn note_length_ms(text: &str) -> Node {
    Node::leaf(NodeKind::NoteLengthMs, text)
}

pub fn barline() -> Node {
    Node::new(NodeKind::Barline)
}

// === Directives ===

pub fn marker(name: &str) -> Node {
    Node::leaf(NodeKind::Marker, name)
}

pub fn at_marker(name: &str) -> Node {
    Node::leaf(NodeKind::AtMarker, name)
}

pub fn octave_up() -> Node {
    Node::new(NodeKind::OctaveUp)
}

pub fn octave_down() -> Node {
    Node::new(NodeKind::OctaveDown)
}

pub fn octave_set(octave: i32) -> Node {
    Node::leaf(NodeKind::OctaveSet, octave)
}

// === Variables ===

pub fn variable_definition(name: &str, values: Vec<Node>) -> Node {
    Node::branch(
        NodeKind::VariableDefinition,
        vec![
            Node::leaf(NodeKind::VariableName, name),
            event_sequence(values),
        ],
    )
}

pub fn variable_reference(name: &str) -> Node {
    Node::leaf(NodeKind::VariableReference, name)
}

// === Grouping ===

pub fn cram(events: Vec<Node>, duration: Option<Node>) -> Node {
    let mut children = vec![event_sequence(events)];
    children.extend(duration);
    Node::branch(NodeKind::Cram, children)
}

pub fn repeat(event: Node, times: i32) -> Node {
    Node::branch(
        NodeKind::Repeat,
        vec![event, Node::leaf(NodeKind::Times, times)],
    )
}

/// Event played on the given `(first, last)` repetition ranges.
pub fn repetitions(event: Node, ranges: &[(i32, i32)]) -> Node {
    let ranges = ranges
        .iter()
        .map(|&(first, last)| {
            Node::branch(
                NodeKind::RepetitionRange,
                vec![
                    Node::leaf(NodeKind::FirstRepetition, first),
                    Node::leaf(NodeKind::LastRepetition, last),
                ],
            )
        })
        .collect();
    Node::branch(
        NodeKind::Repetitions,
        vec![event, Node::branch(NodeKind::RepetitionList, ranges)],
    )
}

// === Voices ===

pub fn voice_group(voices: Vec<Node>) -> Node {
    Node::branch(NodeKind::VoiceGroup, voices)
}

pub fn voice(number: i32, events: Vec<Node>) -> Node {
    Node::branch(
        NodeKind::Voice,
        vec![
            Node::leaf(NodeKind::VoiceNumber, number),
            event_sequence(events),
        ],
    )
}

pub fn voice_group_end() -> Node {
    Node::new(NodeKind::VoiceGroupEndMarker)
}

// === Lisp ===

pub fn lisp_list(children: Vec<Node>) -> Node {
    Node::branch(NodeKind::LispList, children)
}

pub fn lisp_number(value: i32) -> Node {
    Node::leaf(NodeKind::LispNumber, value)
}

pub fn lisp_string(text: &str) -> Node {
    Node::leaf(NodeKind::LispString, text)
}

pub fn lisp_symbol(name: &str) -> Node {
    Node::leaf(NodeKind::LispSymbol, name)
}

pub fn lisp_quoted(form: Node) -> Node {
    Node::branch(NodeKind::LispQuotedForm, vec![form])
}
