use super::*;
use crate::build;
use pretty_assertions::assert_eq;

// =============================================================================
// Kind checks
// =============================================================================

#[test]
fn expect_kind_matches() {
    let node = build::marker("intro");
    assert!(node.expect_kind(NodeKind::Marker).is_ok());
}

#[test]
fn expect_kind_mismatch_reports_both_kinds() {
    let node = build::barline();
    let err = node.expect_kind(NodeKind::Note).unwrap_err();
    assert_eq!(
        err,
        ShapeError::UnexpectedKind {
            expected: NodeKind::Note,
            found: NodeKind::Barline,
            node: "Barline".to_owned(),
        }
    );
}

// =============================================================================
// Child counts
// =============================================================================

#[test]
fn expect_n_children_accepts_any_listed_count() {
    let note = build::note('c');
    assert!(note.expect_n_children(&[1, 2, 3]).is_ok());
    assert!(note.expect_n_children(&[2]).is_err());
}

#[test]
fn expect_n_children_error_lists_counts() {
    let repeat = Node::branch(NodeKind::Repeat, vec![build::note('c')]);
    let err = repeat.expect_n_children(&[2]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "repeat node expects 2 children, found 1: Repeat [Note]"
    );
}

#[test]
fn expect_children_rejects_empty_node() {
    let chord = build::chord(Vec::new());
    assert!(matches!(
        chord.expect_children(),
        Err(ShapeError::NoChildren {
            kind: NodeKind::Chord,
            ..
        })
    ));
}

#[test]
fn child_checks_position_and_kind() {
    let voice = build::voice(1, vec![build::note('c')]);
    assert_eq!(voice.child(0, NodeKind::VoiceNumber).unwrap().int(), Ok(1));
    assert!(voice.child(1, NodeKind::EventSequence).is_ok());
    assert!(voice.child(0, NodeKind::EventSequence).is_err());
}

#[test]
fn child_out_of_range_is_count_error() {
    let voice = Node::new(NodeKind::Voice);
    assert!(matches!(
        voice.child(1, NodeKind::EventSequence),
        Err(ShapeError::ChildCount {
            expected,
            found: 0,
            ..
        }) if expected == vec![2]
    ));
}

#[test]
fn optional_child_absent_is_none() {
    let rest = build::rest(None);
    assert_eq!(rest.optional_child(0, NodeKind::Duration), Ok(None));
}

#[test]
fn optional_child_present_must_match() {
    let rest = Node::branch(NodeKind::Rest, vec![build::barline()]);
    assert!(rest.optional_child(0, NodeKind::Duration).is_err());
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn literal_accessors() {
    assert_eq!(build::marker("verse").text(), Ok("verse"));
    assert_eq!(build::octave_set(4).int(), Ok(4));
    assert_eq!(Node::leaf(NodeKind::NoteLetter, 'g').character(), Ok('g'));
    assert_eq!(Node::leaf(NodeKind::Denominator, 2.5).float(), Ok(2.5));
}

#[test]
fn literal_type_mismatch_is_error() {
    let node = Node::leaf(NodeKind::OctaveSet, "four");
    assert_eq!(
        node.int(),
        Err(ShapeError::Literal {
            kind: NodeKind::OctaveSet,
            expected: LiteralType::Int,
            node: "OctaveSet Text(\"four\")".to_owned(),
        })
    );
}

#[test]
fn missing_literal_is_error() {
    let node = Node::new(NodeKind::Marker);
    assert!(matches!(node.text(), Err(ShapeError::Literal { .. })));
}

#[test]
fn count_accepts_zero_and_positive() {
    assert_eq!(Node::leaf(NodeKind::Dots, 0).count(), Ok(0));
    assert_eq!(Node::leaf(NodeKind::Dots, 2).count(), Ok(2));
}

#[test]
fn negative_count_is_error() {
    assert_eq!(
        Node::leaf(NodeKind::Dots, -1).count(),
        Err(ShapeError::NegativeCount {
            kind: NodeKind::Dots,
            value: -1,
            node: "Dots Int(-1)".to_owned(),
        })
    );
}

// =============================================================================
// Builders
// =============================================================================

#[test]
fn tied_note_without_duration_keeps_tie_position() {
    let note = build::note_with(build::pitch('c', &[]), None, true);
    let kinds: Vec<NodeKind> = note.children().iter().map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::NoteLetterAndAccidentals,
            NodeKind::Duration,
            NodeKind::Tie
        ]
    );
}

#[test]
fn part_builder_shape() {
    let part = build::part(&["violin", "viola"], Some("strings"), Vec::new());
    let declaration = part.child(0, NodeKind::PartDeclaration).unwrap();
    assert!(declaration.expect_n_children(&[2]).is_ok());
    assert_eq!(
        declaration.child(1, NodeKind::PartAlias).unwrap().text(),
        Ok("strings")
    );
}

#[test]
fn summary_lists_child_kinds_only() {
    let note = build::note_with(
        build::pitch('e', &[NodeKind::Flat]),
        Some(build::duration(vec![build::note_length(8.0, 0)])),
        false,
    );
    assert_eq!(note.summary(), "Note [NoteLetterAndAccidentals, Duration]");
}
