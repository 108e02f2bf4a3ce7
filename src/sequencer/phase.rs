use crate::foundation::error::{StackvizError, StackvizResult};

/// Processing phase of one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Log entry appended and displayed; nothing validated yet.
    Announced,
    /// The stack model has been consulted.
    Validated,
    /// The stack model was mutated.
    Applied,
    /// Overflow or underflow; no state changed.
    Rejected,
    /// Visual steps for the current state have been emitted.
    Visualized,
    /// Terminal; the next operation may begin.
    Settled,
}

impl Phase {
    /// Return `true` if `self -> next` is a legal transition.
    ///
    /// `Visualized -> Applied` exists for `clear()`, which cycles once per removed element.
    pub fn can_advance_to(self, next: Phase) -> bool {
        use Phase::*;
        matches!(
            (self, next),
            (Announced, Validated)
                | (Validated, Applied | Rejected | Visualized)
                | (Applied, Visualized)
                | (Visualized, Applied | Settled)
                | (Rejected, Settled)
        )
    }
}

/// Ordered record of the phases one operation passed through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PhaseTrace {
    phases: Vec<Phase>,
}

impl PhaseTrace {
    pub(crate) fn announced() -> Self {
        Self {
            phases: vec![Phase::Announced],
        }
    }

    pub(crate) fn current(&self) -> Phase {
        // never empty: seeded with `Announced`
        self.phases[self.phases.len() - 1]
    }

    pub(crate) fn advance(&mut self, next: Phase) -> StackvizResult<()> {
        let current = self.current();
        if !current.can_advance_to(next) {
            return Err(StackvizError::sequencing(format!(
                "illegal phase transition {current:?} -> {next:?}"
            )));
        }
        tracing::trace!(?current, ?next, "phase");
        self.phases.push(next);
        Ok(())
    }

    pub(crate) fn into_phases(self) -> Vec<Phase> {
        self.phases
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/phase.rs"]
mod tests;
