use super::*;
use crate::{animation::step::NodeId, render::recorder::RecordingRenderer};

fn animator(capacity: usize) -> StackAnimator<i64, RecordingRenderer> {
    StackAnimator::new(capacity, SceneConfig::default(), RecordingRenderer::default())
        .unwrap()
}

fn arrow_opacity(a: &StackAnimator<i64, RecordingRenderer>) -> f64 {
    let h = a.player().handle(NodeId::PointerArrow).unwrap();
    a.renderer().current(h).unwrap().opacity
}

#[test]
fn setup_is_played_on_construction() {
    let a = animator(3);
    assert!(a.sequencer().is_ready());
    assert!(a.player().handle(NodeId::Container).is_some());
    assert!(a.player().handle(NodeId::SizeLabel).is_some());
    assert!(a.player().handle(NodeId::Title).is_none());
    assert_eq!(arrow_opacity(&a), 0.0);
    assert!(a.elapsed_secs() > 0.0);
}

#[test]
fn operations_play_through_the_renderer() {
    let mut a = animator(3);
    a.push(7).unwrap();
    assert_eq!(arrow_opacity(&a), 1.0);
    let block = a.player().handle(NodeId::Block(0)).unwrap();
    assert!(a.renderer().is_alive(block));

    let plan = a.pop().unwrap();
    assert_eq!(plan.value, Some(7));
    assert!(!a.renderer().is_alive(block));
    assert_eq!(arrow_opacity(&a), 0.0);
}

#[test]
fn elapsed_time_matches_the_recorded_clock() {
    let mut a = animator(2);
    a.push(1).unwrap();
    a.peek().unwrap();
    a.hold(2.0).unwrap();
    let recorded = a.renderer().timeline().duration_secs();
    assert!((a.elapsed_secs() - recorded).abs() < 0.1);
}

#[test]
fn run_counts_rejections() {
    let mut a = animator(1);
    let summary = a
        .run([
            Operation::Pop,
            Operation::Push(1),
            Operation::Push(2),
            Operation::Peek,
        ])
        .unwrap();
    assert_eq!(summary.operations, 4);
    assert_eq!(summary.underflows, 1);
    assert_eq!(summary.overflows, 1);
    assert_eq!(summary.elements, vec![1]);
    assert_eq!(
        summary.log,
        vec!["Pop - Stack Empty", "Pushed - 1", "Pushed - 2", "Peek - 1"]
    );
}

#[test]
fn zero_capacity_is_rejected_before_anything_plays() {
    let err = StackAnimator::<i64, _>::new(0, SceneConfig::default(), RecordingRenderer::default())
        .unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::StackvizError::Validation(_)
    ));
}
