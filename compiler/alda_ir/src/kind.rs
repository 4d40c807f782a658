//! Node kinds.
//!
//! The closed set of tags a score tree node can carry. Which literal a kind
//! stores and which children it expects is documented per variant.

use std::fmt;

/// Tag of a [`Node`](crate::Node).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum NodeKind {
    // === Score structure ===
    /// Whole score; children are `ImplicitPart` or `Part`.
    Root,
    /// Events before the first part declaration; one `EventSequence`.
    ImplicitPart,
    /// `PartDeclaration` followed by an `EventSequence`.
    Part,
    /// `PartNames` and an optional `PartAlias`.
    PartDeclaration,
    /// One or more `PartName`.
    PartNames,
    /// Text literal.
    PartName,
    /// Text literal.
    PartAlias,
    /// Ordered events.
    EventSequence,

    // === Notes ===
    /// `NoteLetterAndAccidentals`, optional `Duration`, optional `Tie`.
    Note,
    /// `NoteLetter` and optional `NoteAccidentals`.
    NoteLetterAndAccidentals,
    /// Char literal.
    NoteLetter,
    /// `Sharp`, `Flat` and `Natural` children.
    NoteAccidentals,
    Sharp,
    Flat,
    Natural,
    /// Trailing `~` on a note.
    Tie,
    /// Optional `Duration`.
    Rest,
    /// Notes and rests played together, possibly with directives between.
    Chord,

    // === Durations ===
    /// `NoteLength`, `NoteLengthMs` and `Barline` components.
    Duration,
    /// `Denominator` and optional `Dots`.
    NoteLength,
    /// Float literal.
    Denominator,
    /// Int literal.
    Dots,
    /// Text literal, e.g. `500ms`.
    NoteLengthMs,
    Barline,

    // === Directives ===
    /// Text literal.
    AtMarker,
    /// Text literal.
    Marker,
    OctaveUp,
    OctaveDown,
    /// Int literal.
    OctaveSet,

    // === Variables ===
    /// `VariableName` and an `EventSequence` of values.
    VariableDefinition,
    /// Text literal.
    VariableName,
    /// Text literal.
    VariableReference,

    // === Grouping ===
    /// `EventSequence` and optional `Duration`.
    Cram,
    /// An event and `Times`.
    Repeat,
    /// Int literal.
    Times,
    /// An event and a `RepetitionList`.
    Repetitions,
    /// One or more `RepetitionRange`.
    RepetitionList,
    /// `FirstRepetition` and `LastRepetition`.
    RepetitionRange,
    /// Int literal.
    FirstRepetition,
    /// Int literal.
    LastRepetition,

    // === Voices ===
    /// Voices of a group.
    VoiceGroup,
    /// `VoiceNumber` and an `EventSequence`.
    Voice,
    /// Int literal.
    VoiceNumber,
    /// `V0:`, ends a voice group.
    VoiceGroupEndMarker,

    // === Lisp ===
    LispList,
    /// Int literal.
    LispNumber,
    /// Text literal.
    LispString,
    /// Text literal.
    LispSymbol,
    /// Exactly one child.
    LispQuotedForm,
}

impl NodeKind {
    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::ImplicitPart => "implicit part",
            NodeKind::Part => "part",
            NodeKind::PartDeclaration => "part declaration",
            NodeKind::PartNames => "part names",
            NodeKind::PartName => "part name",
            NodeKind::PartAlias => "part alias",
            NodeKind::EventSequence => "event sequence",
            NodeKind::Note => "note",
            NodeKind::NoteLetterAndAccidentals => "note letter and accidentals",
            NodeKind::NoteLetter => "note letter",
            NodeKind::NoteAccidentals => "note accidentals",
            NodeKind::Sharp => "sharp",
            NodeKind::Flat => "flat",
            NodeKind::Natural => "natural",
            NodeKind::Tie => "tie",
            NodeKind::Rest => "rest",
            NodeKind::Chord => "chord",
            NodeKind::Duration => "duration",
            NodeKind::NoteLength => "note length",
            NodeKind::Denominator => "denominator",
            NodeKind::Dots => "dots",
            NodeKind::NoteLengthMs => "note length (ms)",
            NodeKind::Barline => "barline",
            NodeKind::AtMarker => "at-marker",
            NodeKind::Marker => "marker",
            NodeKind::OctaveUp => "octave up",
            NodeKind::OctaveDown => "octave down",
            NodeKind::OctaveSet => "octave set",
            NodeKind::VariableDefinition => "variable definition",
            NodeKind::VariableName => "variable name",
            NodeKind::VariableReference => "variable reference",
            NodeKind::Cram => "cram",
            NodeKind::Repeat => "repeat",
            NodeKind::Times => "times",
            NodeKind::Repetitions => "repetitions",
            NodeKind::RepetitionList => "repetition list",
            NodeKind::RepetitionRange => "repetition range",
            NodeKind::FirstRepetition => "first repetition",
            NodeKind::LastRepetition => "last repetition",
            NodeKind::VoiceGroup => "voice group",
            NodeKind::Voice => "voice",
            NodeKind::VoiceNumber => "voice number",
            NodeKind::VoiceGroupEndMarker => "voice group end marker",
            NodeKind::LispList => "lisp list",
            NodeKind::LispNumber => "lisp number",
            NodeKind::LispString => "lisp string",
            NodeKind::LispSymbol => "lisp symbol",
            NodeKind::LispQuotedForm => "lisp quoted form",
        }
    }

    /// Notes and rests are the members of a chord that take `/` separators.
    #[inline]
    pub fn is_note_or_rest(self) -> bool {
        matches!(self, NodeKind::Note | NodeKind::Rest)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
