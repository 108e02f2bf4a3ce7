use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::{
    animation::step::{Action, NodeId, Step, Target},
    foundation::error::{StackvizError, StackvizResult},
    render::backend::Renderer,
};

/// Plays step lists against a [`Renderer`], strictly in order.
///
/// Maps the sequencer's [`NodeId`]s to the handles the renderer hands out.
#[derive(Debug)]
pub struct Player<R: Renderer> {
    renderer: R,
    handles: BTreeMap<NodeId, R::Handle>,
    played: u64,
}

impl<R: Renderer> Player<R> {
    /// Player driving `renderer`.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            handles: BTreeMap::new(),
            played: 0,
        }
    }

    /// Play `steps` in order; each returns only once the renderer completes it.
    pub fn play(&mut self, steps: &[Step]) -> StackvizResult<()> {
        for step in steps {
            self.play_step(step)?;
        }
        Ok(())
    }

    /// Play one step to completion.
    pub fn play_step(&mut self, step: &Step) -> StackvizResult<()> {
        tracing::debug!(cue = ?step.cue, secs = step.duration_secs(), "play step");
        match &step.action {
            Action::Create {
                node,
                shape,
                initial,
            } => {
                if self.handles.contains_key(node) {
                    return Err(StackvizError::playback(format!(
                        "node {node:?} already exists"
                    )));
                }
                let handle = self.renderer.create(shape, initial)?;
                self.handles.insert(*node, handle);
            }
            Action::Animate(anim) => {
                let tracks = anim
                    .tracks
                    .iter()
                    .map(|(node, target)| Ok((self.resolve(*node)?, target.clone())))
                    .collect::<StackvizResult<SmallVec<[(R::Handle, Target); 2]>>>()?;
                self.renderer
                    .animate(&tracks, anim.duration_secs, anim.ease)?;
            }
            Action::Destroy { node } => {
                let handle = self.handles.remove(node).ok_or_else(|| {
                    StackvizError::playback(format!("cannot destroy unknown node {node:?}"))
                })?;
                self.renderer.destroy(handle)?;
            }
            Action::Wait { secs } => self.renderer.wait(*secs)?,
        }
        self.played += 1;
        Ok(())
    }

    fn resolve(&self, node: NodeId) -> StackvizResult<R::Handle> {
        self.handles
            .get(&node)
            .copied()
            .ok_or_else(|| StackvizError::playback(format!("unknown node {node:?}")))
    }

    /// Renderer handle currently bound to `node`.
    pub fn handle(&self, node: NodeId) -> Option<R::Handle> {
        self.handles.get(&node).copied()
    }

    /// Nodes currently alive, in `NodeId` order.
    pub fn live_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.handles.keys().copied()
    }

    /// Number of steps played so far.
    pub fn steps_played(&self) -> u64 {
        self.played
    }

    /// Borrow the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Give the renderer back.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/player.rs"]
mod tests;
