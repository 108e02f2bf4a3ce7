use super::*;

#[test]
fn happy_path_is_legal() {
    let mut t = PhaseTrace::announced();
    for p in [Phase::Validated, Phase::Applied, Phase::Visualized, Phase::Settled] {
        t.advance(p).unwrap();
    }
    assert_eq!(t.current(), Phase::Settled);
    assert_eq!(t.into_phases().len(), 5);
}

#[test]
fn rejected_goes_straight_to_settled() {
    let mut t = PhaseTrace::announced();
    t.advance(Phase::Validated).unwrap();
    t.advance(Phase::Rejected).unwrap();
    assert!(t.clone().advance(Phase::Visualized).is_err());
    t.advance(Phase::Settled).unwrap();
}

#[test]
fn settled_is_terminal() {
    for next in [
        Phase::Announced,
        Phase::Validated,
        Phase::Applied,
        Phase::Rejected,
        Phase::Visualized,
        Phase::Settled,
    ] {
        assert!(!Phase::Settled.can_advance_to(next));
    }
}

#[test]
fn cannot_skip_validation() {
    let mut t = PhaseTrace::announced();
    let err = t.advance(Phase::Applied).unwrap_err();
    assert!(err.to_string().contains("Announced -> Applied"));
    assert_eq!(t.current(), Phase::Announced);
}

#[test]
fn clear_cycles_between_applied_and_visualized() {
    let mut t = PhaseTrace::announced();
    t.advance(Phase::Validated).unwrap();
    for _ in 0..3 {
        t.advance(Phase::Applied).unwrap();
        t.advance(Phase::Visualized).unwrap();
    }
    t.advance(Phase::Settled).unwrap();
}
