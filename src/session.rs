use std::fmt;

use crate::{
    animation::step::{Cue, Step},
    config::SceneConfig,
    foundation::error::StackvizResult,
    render::{backend::Renderer, player::Player},
    sequencer::{
        machine::Sequencer,
        plan::{Operation, OperationPlan},
    },
    stack::state::OperationResult,
};

/// Outcome of [`StackAnimator::run`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RunSummary<V> {
    /// Operations played.
    pub operations: usize,
    /// Pushes rejected because the stack was full.
    pub overflows: usize,
    /// Pops and peeks rejected because the stack was empty.
    pub underflows: usize,
    /// Operation log, oldest first.
    pub log: Vec<String>,
    /// Stack contents after the last operation, bottom first.
    pub elements: Vec<V>,
    /// Wall-clock length of everything played, in seconds.
    pub duration_secs: f64,
}

/// A [`Sequencer`] wired to a [`Player`]: each operation is planned and played to completion
/// before the call returns.
#[derive(Debug)]
pub struct StackAnimator<V, R: Renderer> {
    sequencer: Sequencer<V>,
    player: Player<R>,
    elapsed_secs: f64,
}

impl<V, R> StackAnimator<V, R>
where
    V: Clone + fmt::Display,
    R: Renderer,
{
    /// Build the scene for a stack of `capacity` slots and play its setup.
    #[tracing::instrument(skip(config, renderer))]
    pub fn new(capacity: usize, config: SceneConfig, renderer: R) -> StackvizResult<Self> {
        let mut sequencer = Sequencer::new(capacity, config)?;
        let mut player = Player::new(renderer);
        let setup = sequencer.setup()?;
        player.play(&setup)?;
        Ok(Self {
            sequencer,
            player,
            elapsed_secs: crate::animation::step::total_duration_secs(&setup),
        })
    }

    /// Plan and play `op`; returns once the operation has settled on screen.
    pub fn apply(&mut self, op: Operation<V>) -> StackvizResult<OperationPlan<V>> {
        let plan = self.sequencer.plan(op)?;
        self.player.play(&plan.steps)?;
        self.elapsed_secs += plan.duration_secs();
        Ok(plan)
    }

    /// Play `push(value)`.
    pub fn push(&mut self, value: V) -> StackvizResult<OperationPlan<V>> {
        self.apply(Operation::Push(value))
    }

    /// Play `pop()`.
    pub fn pop(&mut self) -> StackvizResult<OperationPlan<V>> {
        self.apply(Operation::Pop)
    }

    /// Play `peek()`.
    pub fn peek(&mut self) -> StackvizResult<OperationPlan<V>> {
        self.apply(Operation::Peek)
    }

    /// Play `isEmpty()`.
    pub fn is_empty(&mut self) -> StackvizResult<OperationPlan<V>> {
        self.apply(Operation::IsEmpty)
    }

    /// Play `isFull()`.
    pub fn is_full(&mut self) -> StackvizResult<OperationPlan<V>> {
        self.apply(Operation::IsFull)
    }

    /// Play `clear()`.
    pub fn clear(&mut self) -> StackvizResult<OperationPlan<V>> {
        self.apply(Operation::Clear)
    }

    /// Hold the final frame for `secs`.
    pub fn hold(&mut self, secs: f64) -> StackvizResult<()> {
        self.player.play_step(&Step::wait(Cue::Settle, secs))?;
        self.elapsed_secs += secs;
        Ok(())
    }

    /// Play every operation in order and summarize the run.
    #[tracing::instrument(skip(self, ops))]
    pub fn run(
        &mut self,
        ops: impl IntoIterator<Item = Operation<V>>,
    ) -> StackvizResult<RunSummary<V>> {
        let mut operations = 0;
        let mut overflows = 0;
        let mut underflows = 0;
        for op in ops {
            let plan = self.apply(op)?;
            operations += 1;
            match plan.result {
                OperationResult::Success => {}
                OperationResult::Overflow => overflows += 1,
                OperationResult::Underflow => underflows += 1,
            }
        }
        tracing::info!(operations, overflows, underflows, "run finished");
        Ok(self.summary(operations, overflows, underflows))
    }

    fn summary(&self, operations: usize, overflows: usize, underflows: usize) -> RunSummary<V> {
        RunSummary {
            operations,
            overflows,
            underflows,
            log: self
                .sequencer
                .log()
                .texts()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            elements: self.sequencer.values(),
            duration_secs: self.elapsed_secs,
        }
    }

    /// Seconds of animation played so far, setup included.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// The sequencer driving the scene.
    pub fn sequencer(&self) -> &Sequencer<V> {
        &self.sequencer
    }

    /// The player that owns the renderer.
    pub fn player(&self) -> &Player<R> {
        &self.player
    }

    /// Borrow the renderer.
    pub fn renderer(&self) -> &R {
        self.player.renderer()
    }

    /// Give the renderer back.
    pub fn into_renderer(self) -> R {
        self.player.into_renderer()
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
