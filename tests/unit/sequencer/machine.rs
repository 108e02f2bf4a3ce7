use super::*;
use crate::animation::step::Action;

fn ready(capacity: usize) -> Sequencer<i64> {
    let mut s = Sequencer::new(capacity, SceneConfig::default()).unwrap();
    s.setup().unwrap();
    s
}

fn cues(plan: &OperationPlan<i64>) -> Vec<Cue> {
    let mut out: Vec<Cue> = Vec::new();
    for step in &plan.steps {
        if out.last() != Some(&step.cue) {
            out.push(step.cue);
        }
    }
    out
}

#[test]
fn operations_before_setup_are_rejected() {
    let mut s = Sequencer::<i64>::new(3, SceneConfig::default()).unwrap();
    assert!(matches!(s.push(1), Err(StackvizError::Sequencing(_))));
    s.setup().unwrap();
    assert!(s.setup().is_err());
}

#[test]
fn zero_capacity_is_a_validation_error() {
    assert!(matches!(
        Sequencer::<i64>::new(0, SceneConfig::default()),
        Err(StackvizError::Validation(_))
    ));
}

#[test]
fn setup_creates_hidden_pointer_and_zero_counter() {
    let mut s = Sequencer::<i64>::new(6, SceneConfig::default()).unwrap();
    let steps = s.setup().unwrap();
    let created: Vec<(NodeId, &NodeState)> = steps
        .iter()
        .filter_map(|st| match &st.action {
            Action::Create { node, initial, .. } => Some((*node, initial)),
            _ => None,
        })
        .collect();
    let ids: Vec<NodeId> = created.iter().map(|(n, _)| *n).collect();
    assert_eq!(
        ids,
        vec![
            NodeId::Title,
            NodeId::Container,
            NodeId::SizeLabel,
            NodeId::PointerArrow,
            NodeId::PointerLabel,
        ]
    );
    let size = created[2].1;
    assert_eq!(size.text.as_deref(), Some("Size: 0 / 6"));
    assert_eq!(created[3].1.opacity, 0.0);
    assert_eq!(created[4].1.opacity, 0.0);
    assert!(steps.iter().all(|st| st.cue == Cue::Setup));
}

#[test]
fn setup_without_title_skips_the_card() {
    let cfg = SceneConfig {
        title: None,
        ..SceneConfig::default()
    };
    let mut s = Sequencer::<i64>::new(2, cfg).unwrap();
    let steps = s.setup().unwrap();
    assert!(!steps.iter().any(|st| st.touches(NodeId::Title)));
}

#[test]
fn push_orders_log_block_size_pointer() {
    let mut s = ready(3);
    let plan = s.push(10).unwrap();
    assert_eq!(plan.result, OperationResult::Success);
    assert_eq!(plan.log_entry.text, "Pushed - 10");
    assert_eq!(
        cues(&plan),
        vec![
            Cue::LogLine,
            Cue::Announce,
            Cue::BlockEnter,
            Cue::SizeUpdate,
            Cue::PointerMove,
            Cue::Settle,
        ]
    );
    assert_eq!(
        plan.phases,
        vec![
            Phase::Announced,
            Phase::Validated,
            Phase::Applied,
            Phase::Visualized,
            Phase::Settled,
        ]
    );
}

#[test]
fn pushed_block_enters_at_its_slot() {
    let mut s = ready(3);
    s.push(1).unwrap();
    let plan = s.push(2).unwrap();
    let Some(Action::Create { node, initial, .. }) =
        plan.steps_with(Cue::BlockEnter).next().map(|st| &st.action)
    else {
        panic!("push must create a block");
    };
    assert_eq!(*node, NodeId::Block(1));
    assert_eq!(initial.position, s.slots().slot_position(1));
    assert_eq!(initial.text.as_deref(), Some("2"));
    assert_eq!(initial.opacity, 0.0);
}

#[test]
fn overflow_flashes_without_touching_state() {
    let mut s = ready(1);
    s.push(1).unwrap();
    let plan = s.push(2).unwrap();
    assert_eq!(plan.result, OperationResult::Overflow);
    assert_eq!(plan.log_entry.text, "Pushed - 2");
    assert_eq!(cues(&plan), vec![Cue::LogLine, Cue::Announce, Cue::ErrorFlash]);
    assert_eq!(plan.count(Cue::SizeUpdate), 0);
    assert_eq!(plan.blocks_created(), 0);
    assert!(plan.phases.contains(&Phase::Rejected));
    assert!(!plan.phases.contains(&Phase::Applied));
    assert_eq!(s.values(), vec![1]);

    // the rejected push did not consume a block serial
    s.pop().unwrap();
    let plan = s.push(3).unwrap();
    assert!(plan.steps.iter().any(|st| st.touches(NodeId::Block(1))));
}

#[test]
fn pop_on_empty_logs_and_flashes() {
    let mut s = ready(2);
    let plan = s.pop().unwrap();
    assert_eq!(plan.result, OperationResult::Underflow);
    assert_eq!(plan.log_entry.text, "Pop - Stack Empty");
    assert_eq!(plan.value, None);
    assert_eq!(cues(&plan), vec![Cue::LogLine, Cue::ErrorFlash, Cue::Settle]);
    assert_eq!(plan.count(Cue::PointerMove) + plan.count(Cue::PointerHide), 0);
}

#[test]
fn pop_exits_block_then_updates_counter_and_hides_pointer() {
    let mut s = ready(2);
    s.push(7).unwrap();
    let plan = s.pop().unwrap();
    assert_eq!(plan.value, Some(7));
    assert_eq!(plan.log_entry.text, "Popped - 7");
    assert_eq!(
        cues(&plan),
        vec![
            Cue::LogLine,
            Cue::Announce,
            Cue::BlockExit,
            Cue::SizeUpdate,
            Cue::PointerHide,
            Cue::Settle,
        ]
    );
    assert_eq!(plan.blocks_removed(), 1);
    assert!(!s.pointer_state().visible);
}

#[test]
fn pop_exit_translates_and_fades() {
    let mut s = ready(2);
    s.push(7).unwrap();
    let plan = s.pop().unwrap();
    let Some(Action::Animate(anim)) = plan.steps_with(Cue::BlockExit).next().map(|st| &st.action)
    else {
        panic!("pop must animate the block out");
    };
    let targets: Vec<&Target> = anim.tracks.iter().map(|(_, t)| t).collect();
    assert!(targets.contains(&&Target::Shift(Vec2::new(0.8, 0.8))));
    assert!(targets.contains(&&Target::Fade(0.0)));
    assert_eq!(anim.duration_secs, 0.6);
}

#[test]
fn peek_shows_status_and_refreshes_pointer_without_applying() {
    let mut s = ready(3);
    s.push(5).unwrap();
    let plan = s.peek().unwrap();
    assert_eq!(plan.value, Some(5));
    assert_eq!(plan.log_entry.text, "Peek - 5");
    assert!(!plan.phases.contains(&Phase::Applied));
    assert_eq!(
        cues(&plan),
        vec![
            Cue::LogLine,
            Cue::StatusMessage,
            Cue::PointerMove,
            Cue::Settle
        ]
    );
    let status_text = plan.steps.iter().find_map(|st| match &st.action {
        Action::Create { initial, .. } if st.cue == Cue::StatusMessage => initial.text.clone(),
        _ => None,
    });
    assert_eq!(status_text.as_deref(), Some("Top element is 5"));
    assert_eq!(s.values(), vec![5]);
}

#[test]
fn peek_on_empty_is_rejected() {
    let mut s = ready(3);
    let plan = s.peek().unwrap();
    assert_eq!(plan.result, OperationResult::Underflow);
    assert_eq!(plan.log_entry.text, "Peek - Stack Empty");
    assert_eq!(plan.count(Cue::StatusMessage), 0);
    assert!(plan.count(Cue::ErrorFlash) > 0);
}

#[test]
fn queries_never_touch_pointer_or_stack() {
    let mut s = ready(1);
    let empty = s.is_empty().unwrap();
    assert_eq!(empty.answer, Some(true));
    assert_eq!(empty.log_entry.text, "isEmpty() - Empty");
    s.push(1).unwrap();
    let full = s.is_full().unwrap();
    assert_eq!(full.answer, Some(true));
    assert_eq!(full.log_entry.text, "isFull() - Full");
    for plan in [&empty, &full] {
        assert!(!plan.steps.iter().any(|st| st.touches(NodeId::PointerArrow)));
        assert!(!plan.phases.contains(&Phase::Applied));
        assert_eq!(plan.result, OperationResult::Success);
    }
}

#[test]
fn clear_cycles_once_per_element_top_down() {
    let mut s = ready(4);
    for v in [1, 2, 3] {
        s.push(v).unwrap();
    }
    let plan = s.clear().unwrap();
    assert_eq!(plan.log_entry.text, "Clear()");
    assert_eq!(plan.blocks_removed(), 3);
    assert_eq!(plan.count(Cue::PointerHide), 1);
    assert_eq!(plan.count(Cue::PointerMove), 0);

    let removed: Vec<NodeId> = plan
        .steps
        .iter()
        .filter_map(|st| match st.action {
            Action::Destroy { node } if st.cue == Cue::BlockExit => Some(node),
            _ => None,
        })
        .collect();
    assert_eq!(
        removed,
        vec![NodeId::Block(2), NodeId::Block(1), NodeId::Block(0)]
    );

    let applied = plan.phases.iter().filter(|p| **p == Phase::Applied).count();
    assert_eq!(applied, 3);

    let last_removal = plan
        .steps
        .iter()
        .rposition(|st| st.cue == Cue::BlockExit)
        .unwrap();
    let hide = plan
        .steps
        .iter()
        .position(|st| st.cue == Cue::PointerHide)
        .unwrap();
    assert!(hide > last_removal);
    assert!(s.stack().is_empty());
}

#[test]
fn clear_on_empty_has_no_removals() {
    let mut s = ready(4);
    let plan = s.clear().unwrap();
    assert_eq!(plan.blocks_removed(), 0);
    assert_eq!(plan.count(Cue::SizeUpdate), 0);
    assert_eq!(plan.count(Cue::PointerHide), 1);
    assert_eq!(
        plan.phases,
        vec![
            Phase::Announced,
            Phase::Validated,
            Phase::Visualized,
            Phase::Settled
        ]
    );
}

#[test]
fn size_counter_tracks_length() {
    let mut s = ready(6);
    s.push(1).unwrap();
    let plan = s.push(2).unwrap();
    let text = plan.steps_with(Cue::SizeUpdate).find_map(|st| match &st.action {
        Action::Animate(a) => match &a.tracks[0].1 {
            Target::Retext(t) => Some(t.clone()),
            _ => None,
        },
        _ => None,
    });
    assert_eq!(text.as_deref(), Some("Size: 2 / 6"));
}

#[test]
fn clear_counts_down_one_removal_at_a_time() {
    let mut s = ready(4);
    for v in [1, 2, 3] {
        s.push(v).unwrap();
    }
    let plan = s.clear().unwrap();
    let texts: Vec<String> = plan
        .steps_with(Cue::SizeUpdate)
        .filter_map(|st| match &st.action {
            Action::Animate(a) => match &a.tracks[0].1 {
                Target::Retext(t) => Some(t.clone()),
                _ => None,
            },
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["Size: 2 / 4", "Size: 1 / 4", "Size: 0 / 4"]);

    // each counter update follows the exit of the block it accounts for
    let order: Vec<Cue> = cues(&plan)
        .into_iter()
        .filter(|c| matches!(c, Cue::BlockExit | Cue::SizeUpdate))
        .collect();
    assert_eq!(
        order,
        vec![
            Cue::BlockExit,
            Cue::SizeUpdate,
            Cue::BlockExit,
            Cue::SizeUpdate,
            Cue::BlockExit,
            Cue::SizeUpdate,
        ]
    );
}
