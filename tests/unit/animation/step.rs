use super::*;

#[test]
fn apply_shift_moves_position_and_span() {
    let s = NodeState::at(Point::new(1.0, 1.0), Rgba8::GREEN).with_span(Span {
        start: Point::new(0.0, 0.0),
        end: Point::new(1.0, 0.0),
    });
    let next = s.apply(&Target::Shift(Vec2::new(0.5, -1.0)));
    assert_eq!(next.position, Point::new(1.5, 0.0));
    let span = next.span.unwrap();
    assert_eq!(span.start, Point::new(0.5, -1.0));
    assert_eq!(span.end, Point::new(1.5, -1.0));
}

#[test]
fn apply_fade_clamps() {
    let s = NodeState::at(Point::ORIGIN, Rgba8::WHITE);
    assert_eq!(s.apply(&Target::Fade(2.0)).opacity, 1.0);
    assert_eq!(s.apply(&Target::Fade(-1.0)).opacity, 0.0);
}

#[test]
fn text_swaps_only_at_segment_end() {
    let a = NodeState::at(Point::ORIGIN, Rgba8::WHITE).with_text("Size: 0 / 6");
    let b = a.apply(&Target::Retext("Size: 1 / 6".to_string()));
    assert_eq!(
        NodeState::lerp(&a, &b, 0.99).text.as_deref(),
        Some("Size: 0 / 6")
    );
    assert_eq!(
        NodeState::lerp(&a, &b, 1.0).text.as_deref(),
        Some("Size: 1 / 6")
    );
}

#[test]
fn durations_sum_over_animations_and_waits() {
    let steps = vec![
        Step::create(
            Cue::Setup,
            NodeId::Container,
            Shape::Arrow { stroke_width: 1.0 },
            NodeState::at(Point::ORIGIN, Rgba8::BLUE),
        ),
        Step::animate(
            Cue::ErrorFlash,
            [(NodeId::Container, Target::Recolor(Rgba8::RED))],
            1.0,
            Ease::Linear,
        ),
        Step::wait(Cue::Settle, 0.25),
        Step::destroy(Cue::Setup, NodeId::Container),
    ];
    assert_eq!(total_duration_secs(&steps), 1.25);
    assert!(steps[1].touches(NodeId::Container));
    assert!(!steps[2].touches(NodeId::Container));
}
