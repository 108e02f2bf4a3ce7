use std::fmt;

use crate::{
    animation::step::{Cue, NodeId, NodeState, Shape, Step, Target, TextAlign},
    config::{SceneConfig, TimingConfig},
    effects::feedback::{FlashStyle, StatusStyle, error_flash, status_message},
    foundation::{
        core::Vec2,
        error::{StackvizError, StackvizResult},
    },
    layout::{
        pointer::{PointerState, PointerTracker},
        slots::SlotLayout,
    },
    oplog::{LogEntry, LogStyle, OperationLog},
    sequencer::{
        phase::{Phase, PhaseTrace},
        plan::{Operation, OperationPlan},
    },
    stack::state::{BoundedStack, OperationResult},
};

/// A stack entry: the value and the block bound to it while it is on the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<V> {
    /// Payload.
    pub value: V,
    /// `NodeId::Block` drawn for this entry.
    pub block: NodeId,
}

/// Turns stack operations into ordered step lists.
///
/// Operations are processed one at a time; each [`Sequencer::plan`] call runs an operation from
/// `Announced` to `Settled` and returns the steps that visualize it. Scene nodes must be created
/// first with [`Sequencer::setup`].
#[derive(Clone, Debug)]
pub struct Sequencer<V> {
    config: SceneConfig,
    slots: SlotLayout,
    pointer: PointerTracker,
    stack: BoundedStack<Entry<V>>,
    log: OperationLog,
    flash: FlashStyle,
    status: StatusStyle,
    next_block: u64,
    next_status: u64,
    ready: bool,
}

impl<V> Sequencer<V>
where
    V: Clone + fmt::Display,
{
    /// Sequencer for a stack of `capacity` slots drawn with `config`.
    pub fn new(capacity: usize, config: SceneConfig) -> StackvizResult<Self> {
        config.validate()?;
        let stack = BoundedStack::new(capacity)?;
        let layout = &config.layout;
        let slots = SlotLayout::new(capacity, layout);
        let pointer = PointerTracker::new(slots.clone(), layout);
        let ease = config.timing.ease;
        let log = OperationLog::new(LogStyle {
            origin: layout.log_origin,
            line_spacing: layout.log_line_spacing,
            font_size: layout.fonts.log,
            color: config.palette.text,
            fade_secs: config.timing.log_fade_secs,
            ease,
        });
        let flash = FlashStyle {
            rest: config.palette.container,
            alert: config.palette.alert,
            amplitude: layout.shake_amplitude,
            step_secs: config.timing.flash_step_secs,
            ease,
        };
        let status = StatusStyle {
            position: layout.status_position,
            font_size: layout.fonts.status,
            color: config.palette.status,
            fade_secs: config.timing.status_fade_secs,
            ease,
        };

        Ok(Self {
            config,
            slots,
            pointer,
            stack,
            log,
            flash,
            status,
            next_block: 0,
            next_status: 0,
            ready: false,
        })
    }

    /// Steps that build the scene: optional title card, container, size counter, hidden pointer.
    ///
    /// Must be called exactly once, before the first operation.
    #[tracing::instrument(skip(self))]
    pub fn setup(&mut self) -> StackvizResult<Vec<Step>> {
        if self.ready {
            return Err(StackvizError::sequencing("setup() called twice"));
        }

        let timing = &self.config.timing;
        let layout = &self.config.layout;
        let palette = &self.config.palette;
        let ease = timing.ease;
        let container_rect = self.slots.container_rect();
        let container = Step::create(
            Cue::Setup,
            NodeId::Container,
            Shape::Outline {
                size: container_rect.size(),
                stroke_width: layout.container_stroke,
            },
            NodeState::at(container_rect.center(), palette.container).hidden(),
        );

        let mut steps = Vec::new();
        match &self.config.title {
            Some(title) => {
                steps.push(Step::create(
                    Cue::Setup,
                    NodeId::Title,
                    Shape::Text {
                        font_size: layout.fonts.title,
                        align: TextAlign::Center,
                    },
                    NodeState::at(layout.title_position, palette.text)
                        .with_text(title.clone())
                        .hidden(),
                ));
                steps.push(Step::animate(
                    Cue::Setup,
                    [(NodeId::Title, Target::Fade(1.0))],
                    timing.title_write_secs,
                    ease,
                ));
                steps.push(Step::wait(Cue::Setup, timing.title_hold_secs));
                steps.push(container);
                steps.push(Step::animate(
                    Cue::Setup,
                    [
                        (NodeId::Title, Target::Fade(0.0)),
                        (NodeId::Container, Target::Fade(1.0)),
                    ],
                    timing.title_transform_secs,
                    ease,
                ));
                steps.push(Step::destroy(Cue::Setup, NodeId::Title));
            }
            None => {
                steps.push(container);
                steps.push(Step::animate(
                    Cue::Setup,
                    [(NodeId::Container, Target::Fade(1.0))],
                    timing.title_transform_secs,
                    ease,
                ));
            }
        }
        steps.push(Step::wait(Cue::Setup, timing.setup_hold_secs));

        steps.push(Step::create(
            Cue::Setup,
            NodeId::SizeLabel,
            Shape::Text {
                font_size: layout.fonts.size_label,
                align: TextAlign::Center,
            },
            NodeState::at(self.slots.size_label_position(), palette.text)
                .with_text(self.size_text())
                .hidden(),
        ));
        steps.push(Step::animate(
            Cue::Setup,
            [(NodeId::SizeLabel, Target::Fade(1.0))],
            timing.size_label_fade_secs,
            ease,
        ));

        let rest = self.pointer.rest_pose();
        steps.push(Step::create(
            Cue::Setup,
            NodeId::PointerArrow,
            Shape::Arrow {
                stroke_width: layout.pointer_stroke,
            },
            NodeState::at(rest.arrow.start, palette.pointer)
                .with_span(rest.arrow)
                .hidden(),
        ));
        steps.push(Step::create(
            Cue::Setup,
            NodeId::PointerLabel,
            Shape::Text {
                font_size: layout.fonts.pointer,
                align: TextAlign::Center,
            },
            NodeState::at(rest.label, palette.pointer)
                .with_text("Top")
                .hidden(),
        ));

        self.ready = true;
        Ok(steps)
    }

    /// Run one operation from `Announced` to `Settled`.
    #[tracing::instrument(skip(self, op), fields(op = %op))]
    pub fn plan(&mut self, op: Operation<V>) -> StackvizResult<OperationPlan<V>> {
        if !self.ready {
            return Err(StackvizError::sequencing("operation issued before setup()"));
        }

        let plan = match op {
            Operation::Push(v) => self.plan_push(v)?,
            Operation::Pop => self.plan_pop()?,
            Operation::Peek => self.plan_peek()?,
            Operation::IsEmpty => self.plan_query(Operation::IsEmpty)?,
            Operation::IsFull => self.plan_query(Operation::IsFull)?,
            Operation::Clear => self.plan_clear()?,
        };
        debug_assert!(self.stack.len() <= self.stack.capacity());

        tracing::info!(
            result = ?plan.result,
            len = self.stack.len(),
            steps = plan.steps.len(),
            log = %plan.log_entry.text,
            "operation settled"
        );
        Ok(plan)
    }

    /// Plan `push(value)`.
    pub fn push(&mut self, value: V) -> StackvizResult<OperationPlan<V>> {
        self.plan(Operation::Push(value))
    }

    /// Plan `pop()`.
    pub fn pop(&mut self) -> StackvizResult<OperationPlan<V>> {
        self.plan(Operation::Pop)
    }

    /// Plan `peek()`.
    pub fn peek(&mut self) -> StackvizResult<OperationPlan<V>> {
        self.plan(Operation::Peek)
    }

    /// Plan `isEmpty()`.
    pub fn is_empty(&mut self) -> StackvizResult<OperationPlan<V>> {
        self.plan(Operation::IsEmpty)
    }

    /// Plan `isFull()`.
    pub fn is_full(&mut self) -> StackvizResult<OperationPlan<V>> {
        self.plan(Operation::IsFull)
    }

    /// Plan `clear()`.
    pub fn clear(&mut self) -> StackvizResult<OperationPlan<V>> {
        self.plan(Operation::Clear)
    }

    fn plan_push(&mut self, value: V) -> StackvizResult<OperationPlan<V>> {
        let (log_entry, mut steps) = self.announce(format!("Pushed - {value}"));
        let mut trace = PhaseTrace::announced();
        steps.push(Step::wait(Cue::Announce, self.config.timing.announce_gap_secs));

        let block = NodeId::Block(self.next_block);
        let label = value.to_string();
        let result = self.stack.push(Entry {
            value: value.clone(),
            block,
        });
        trace.advance(Phase::Validated)?;

        match result {
            OperationResult::Success => {
                trace.advance(Phase::Applied)?;
                self.next_block += 1;
                steps.extend(self.block_enter(block, label));
                trace.advance(Phase::Visualized)?;
                steps.push(Self::size_update(&self.config.timing, self.size_text()));
                steps.push(self.pointer_update());
                steps.push(self.settle());
            }
            _ => {
                trace.advance(Phase::Rejected)?;
                steps.extend(self.flash_container());
            }
        }
        trace.advance(Phase::Settled)?;

        Ok(OperationPlan {
            operation: Operation::Push(value),
            result,
            value: None,
            answer: None,
            log_entry,
            phases: trace.into_phases(),
            steps,
        })
    }

    fn plan_pop(&mut self) -> StackvizResult<OperationPlan<V>> {
        let text = match self.stack.peek().1 {
            Some(top) => format!("Popped - {}", top.value),
            None => "Pop - Stack Empty".to_string(),
        };
        let (log_entry, mut steps) = self.announce(text);
        let mut trace = PhaseTrace::announced();
        if !self.stack.is_empty() {
            steps.push(Step::wait(Cue::Announce, self.config.timing.announce_gap_secs));
        }

        let (result, entry) = self.stack.pop();
        trace.advance(Phase::Validated)?;

        let value = match entry {
            Some(entry) => {
                trace.advance(Phase::Applied)?;
                let offset = self.config.layout.pop_exit_offset;
                let secs = self.config.timing.block_exit_secs;
                steps.extend(Self::block_exit(&self.config.timing, entry.block, offset, secs));
                trace.advance(Phase::Visualized)?;
                steps.push(Self::size_update(&self.config.timing, self.size_text()));
                steps.push(self.pointer_update());
                Some(entry.value)
            }
            None => {
                trace.advance(Phase::Rejected)?;
                steps.extend(self.flash_container());
                None
            }
        };
        steps.push(self.settle());
        trace.advance(Phase::Settled)?;

        Ok(OperationPlan {
            operation: Operation::Pop,
            result,
            value,
            answer: None,
            log_entry,
            phases: trace.into_phases(),
            steps,
        })
    }

    fn plan_peek(&mut self) -> StackvizResult<OperationPlan<V>> {
        let top = self.stack.peek().1.map(|e| e.value.clone());
        let text = match &top {
            Some(v) => format!("Peek - {v}"),
            None => "Peek - Stack Empty".to_string(),
        };
        let (log_entry, mut steps) = self.announce(text);
        let mut trace = PhaseTrace::announced();
        let result = self.stack.peek().0;
        trace.advance(Phase::Validated)?;

        match &top {
            Some(v) => {
                trace.advance(Phase::Visualized)?;
                let hold = self.config.timing.status_hold_secs;
                steps.extend(self.status(format!("Top element is {v}"), hold));
                steps.push(self.pointer_update());
            }
            None => {
                trace.advance(Phase::Rejected)?;
                steps.extend(self.flash_container());
            }
        }
        steps.push(self.settle());
        trace.advance(Phase::Settled)?;

        Ok(OperationPlan {
            operation: Operation::Peek,
            result,
            value: top,
            answer: None,
            log_entry,
            phases: trace.into_phases(),
            steps,
        })
    }

    fn plan_query(&mut self, op: Operation<V>) -> StackvizResult<OperationPlan<V>> {
        let (name, answer, yes, no) = match op {
            Operation::IsEmpty => ("isEmpty()", self.stack.is_empty(), "Empty", "Not Empty"),
            Operation::IsFull => ("isFull()", self.stack.is_full(), "Full", "Not Full"),
            _ => {
                return Err(StackvizError::sequencing(format!(
                    "{op} is not a query"
                )));
            }
        };
        let msg = if answer { yes } else { no };

        let (log_entry, mut steps) = self.announce(format!("{name} - {msg}"));
        let mut trace = PhaseTrace::announced();
        trace.advance(Phase::Validated)?;
        trace.advance(Phase::Visualized)?;
        let hold = self.config.timing.status_hold_secs;
        steps.extend(self.status(format!("Stack is {msg}"), hold));
        steps.push(self.settle());
        trace.advance(Phase::Settled)?;

        Ok(OperationPlan {
            operation: op,
            result: OperationResult::Success,
            value: None,
            answer: Some(answer),
            log_entry,
            phases: trace.into_phases(),
            steps,
        })
    }

    fn plan_clear(&mut self) -> StackvizResult<OperationPlan<V>> {
        let (log_entry, mut steps) = self.announce("Clear()");
        let mut trace = PhaseTrace::announced();
        steps.push(Step::wait(Cue::Announce, self.config.timing.announce_gap_secs));
        trace.advance(Phase::Validated)?;

        let offset = self.config.layout.clear_exit_offset;
        let timing = &self.config.timing;
        let capacity = self.stack.capacity();
        let mut removed = 0usize;
        let mut drain = self.stack.drain_top_down();
        // one removal at a time; the counter follows what is still stacked
        while let Some(entry) = drain.next() {
            trace.advance(Phase::Applied)?;
            steps.extend(Self::block_exit(timing, entry.block, offset, timing.clear_exit_secs));
            trace.advance(Phase::Visualized)?;
            steps.push(Self::size_update(timing, size_text(drain.remaining(), capacity)));
            removed += 1;
        }
        if removed == 0 {
            trace.advance(Phase::Visualized)?;
        }
        tracing::debug!(removed, "stack cleared");

        steps.push(self.pointer_update());
        steps.push(self.settle());
        trace.advance(Phase::Settled)?;

        Ok(OperationPlan {
            operation: Operation::Clear,
            result: OperationResult::Success,
            value: None,
            answer: None,
            log_entry,
            phases: trace.into_phases(),
            steps,
        })
    }

    fn announce(&mut self, text: impl Into<String>) -> (LogEntry, Vec<Step>) {
        self.log.append(text)
    }

    fn block_enter(&self, block: NodeId, label: String) -> [Step; 2] {
        let timing = &self.config.timing;
        let index = self.stack.len() - 1;
        [
            Step::create(
                Cue::BlockEnter,
                block,
                Shape::Block {
                    size: self.slots.block_size(),
                    stroke_width: self.config.layout.block_stroke,
                    font_size: self.config.layout.fonts.block,
                    label_color: self.config.palette.text,
                },
                NodeState::at(self.slots.slot_position(index), self.config.palette.block)
                    .with_text(label)
                    .hidden(),
            ),
            Step::animate(
                Cue::BlockEnter,
                [(block, Target::Fade(1.0))],
                timing.block_enter_secs,
                timing.ease,
            ),
        ]
    }

    fn block_exit(timing: &TimingConfig, block: NodeId, offset: Vec2, secs: f64) -> [Step; 2] {
        [
            Step::animate(
                Cue::BlockExit,
                [(block, Target::Shift(offset)), (block, Target::Fade(0.0))],
                secs,
                timing.ease,
            ),
            Step::destroy(Cue::BlockExit, block),
        ]
    }

    fn size_update(timing: &TimingConfig, text: String) -> Step {
        Step::animate(
            Cue::SizeUpdate,
            [(NodeId::SizeLabel, Target::Retext(text))],
            timing.size_update_secs,
            timing.ease,
        )
    }

    fn pointer_update(&self) -> Step {
        let timing = &self.config.timing;
        match self.pointer.target(self.pointer_state()) {
            Some(pose) => Step::animate(
                Cue::PointerMove,
                [
                    (NodeId::PointerArrow, Target::Reshape(pose.arrow)),
                    (NodeId::PointerArrow, Target::Fade(1.0)),
                    (NodeId::PointerLabel, Target::MoveTo(pose.label)),
                    (NodeId::PointerLabel, Target::Fade(1.0)),
                ],
                timing.pointer_move_secs,
                timing.ease,
            ),
            None => Step::animate(
                Cue::PointerHide,
                [
                    (NodeId::PointerArrow, Target::Fade(0.0)),
                    (NodeId::PointerLabel, Target::Fade(0.0)),
                ],
                timing.pointer_hide_secs,
                timing.ease,
            ),
        }
    }

    fn status(&mut self, text: String, hold_secs: f64) -> Vec<Step> {
        let node = NodeId::Status(self.next_status);
        self.next_status += 1;
        status_message(node, text, hold_secs, &self.status)
    }

    fn flash_container(&self) -> Vec<Step> {
        error_flash(NodeId::Container, self.slots.container_center(), &self.flash)
    }

    fn settle(&self) -> Step {
        Step::wait(Cue::Settle, self.config.timing.settle_secs)
    }

    fn size_text(&self) -> String {
        size_text(self.stack.len(), self.stack.capacity())
    }

    /// Derived pointer state for the current stack.
    pub fn pointer_state(&self) -> PointerState {
        self.pointer.state(self.stack.len())
    }

    /// The logical stack.
    pub fn stack(&self) -> &BoundedStack<Entry<V>> {
        &self.stack
    }

    /// Values bottom to top.
    pub fn values(&self) -> Vec<V> {
        self.stack.elements().iter().map(|e| e.value.clone()).collect()
    }

    /// The operation log.
    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    /// Slot geometry.
    pub fn slots(&self) -> &SlotLayout {
        &self.slots
    }

    /// Scene configuration.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Return `true` once [`Sequencer::setup`] has run.
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

fn size_text(len: usize, capacity: usize) -> String {
    format!("Size: {len} / {capacity}")
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/machine.rs"]
mod tests;
