use std::fmt;

use crate::{
    animation::step::{Action, Cue, Step, total_duration_secs},
    oplog::LogEntry,
    sequencer::phase::Phase,
    stack::state::OperationResult,
};

/// High-level stack operation issued by a caller.
///
/// Serialized externally tagged: `{"push": 10}`, `"pop"`, `"is_empty"`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation<V> {
    /// Push a value.
    Push(V),
    /// Pop the top value.
    Pop,
    /// Show the top value without removing it.
    Peek,
    /// Report whether the stack is empty.
    IsEmpty,
    /// Report whether the stack is full.
    IsFull,
    /// Remove every value, top to bottom.
    Clear,
}

impl<V: fmt::Display> fmt::Display for Operation<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(v) => write!(f, "push({v})"),
            Self::Pop => f.write_str("pop()"),
            Self::Peek => f.write_str("peek()"),
            Self::IsEmpty => f.write_str("isEmpty()"),
            Self::IsFull => f.write_str("isFull()"),
            Self::Clear => f.write_str("clear()"),
        }
    }
}

/// Everything the sequencer produced for one operation.
#[derive(Clone, Debug)]
pub struct OperationPlan<V> {
    /// The operation as issued.
    pub operation: Operation<V>,
    /// Outcome from the stack model.
    pub result: OperationResult,
    /// Popped or peeked value.
    pub value: Option<V>,
    /// Answer of `isEmpty()` / `isFull()`.
    pub answer: Option<bool>,
    /// Log entry announced for the operation.
    pub log_entry: LogEntry,
    /// Phases passed through, `Announced` first, `Settled` last.
    pub phases: Vec<Phase>,
    /// Ordered steps to play.
    pub steps: Vec<Step>,
}

impl<V> OperationPlan<V> {
    /// Total wall-clock time of the steps.
    pub fn duration_secs(&self) -> f64 {
        total_duration_secs(&self.steps)
    }

    /// Steps tagged `cue`, in order.
    pub fn steps_with(&self, cue: Cue) -> impl Iterator<Item = &Step> + '_ {
        self.steps.iter().filter(move |s| s.cue == cue)
    }

    /// Number of steps tagged `cue`.
    pub fn count(&self, cue: Cue) -> usize {
        self.steps_with(cue).count()
    }

    /// Number of nodes destroyed by block exits.
    pub fn blocks_removed(&self) -> usize {
        self.steps_with(Cue::BlockExit)
            .filter(|s| matches!(s.action, Action::Destroy { .. }))
            .count()
    }

    /// Number of nodes created by block entries.
    pub fn blocks_created(&self) -> usize {
        self.steps_with(Cue::BlockEnter)
            .filter(|s| matches!(s.action, Action::Create { .. }))
            .count()
    }
}
