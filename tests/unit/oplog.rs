use super::*;
use crate::animation::step::Action;

fn log() -> OperationLog {
    OperationLog::new(LogStyle {
        origin: Point::new(-6.0, 2.0),
        line_spacing: 0.5,
        font_size: 26.0,
        color: Rgba8::WHITE,
        fade_secs: 0.5,
        ease: Ease::Linear,
    })
}

#[test]
fn sequence_numbers_follow_append_order() {
    let mut l = log();
    let (a, _) = l.append("Pushed - 10");
    let (b, _) = l.append("Pop - Stack Empty");
    assert_eq!(a.sequence_number, 1);
    assert_eq!(b.sequence_number, 2);
    assert_eq!(l.texts(), vec!["Pushed - 10", "Pop - Stack Empty"]);
    assert_eq!(l.len(), 2);
}

#[test]
fn first_line_is_anchored_and_later_lines_stack_below() {
    let l = log();
    assert_eq!(l.line_position(1), Point::new(-6.0, 2.0));
    assert_eq!(l.line_position(2), Point::new(-6.0, 1.5));
    assert_eq!(l.line_position(3), Point::new(-6.0, 1.0));
}

#[test]
fn append_creates_hidden_line_then_fades_it_in() {
    let mut l = log();
    let (entry, steps) = l.append("Clear()");
    assert_eq!(steps.len(), 2);
    match &steps[0].action {
        Action::Create { node, initial, .. } => {
            assert_eq!(*node, NodeId::LogLine(entry.sequence_number));
            assert_eq!(initial.opacity, 0.0);
            assert_eq!(initial.text.as_deref(), Some("Clear()"));
        }
        other => panic!("expected create, got {other:?}"),
    }
    match &steps[1].action {
        Action::Animate(a) => {
            assert_eq!(a.duration_secs, 0.5);
            assert_eq!(a.tracks[0].1, Target::Fade(1.0));
        }
        other => panic!("expected animate, got {other:?}"),
    }
    assert!(steps.iter().all(|s| s.cue == Cue::LogLine));
}
