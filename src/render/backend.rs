use std::fmt;

use crate::{
    animation::{
        ease::Ease,
        step::{NodeState, Shape, Target},
    },
    foundation::error::StackvizResult,
};

/// Animation-playback interface implemented by a rendering engine.
///
/// Every call is blocking from the caller's point of view: [`Renderer::animate`] and
/// [`Renderer::wait`] return only once playback of that step is complete. The renderer owns the
/// current transform, color and opacity of every node it created; the caller never queries it.
pub trait Renderer {
    /// Owning reference to a created node.
    type Handle: Copy + Eq + fmt::Debug;

    /// Create a node in state `initial`.
    fn create(&mut self, shape: &Shape, initial: &NodeState) -> StackvizResult<Self::Handle>;

    /// Play all `tracks` together over `duration_secs` and return when they complete.
    fn animate(
        &mut self,
        tracks: &[(Self::Handle, Target)],
        duration_secs: f64,
        ease: Ease,
    ) -> StackvizResult<()>;

    /// Remove a node from the visual set.
    fn destroy(&mut self, handle: Self::Handle) -> StackvizResult<()>;

    /// Let `secs` pass with no visual change.
    fn wait(&mut self, secs: f64) -> StackvizResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Handle = R::Handle;

    fn create(&mut self, shape: &Shape, initial: &NodeState) -> StackvizResult<Self::Handle> {
        (**self).create(shape, initial)
    }

    fn animate(
        &mut self,
        tracks: &[(Self::Handle, Target)],
        duration_secs: f64,
        ease: Ease,
    ) -> StackvizResult<()> {
        (**self).animate(tracks, duration_secs, ease)
    }

    fn destroy(&mut self, handle: Self::Handle) -> StackvizResult<()> {
        (**self).destroy(handle)
    }

    fn wait(&mut self, secs: f64) -> StackvizResult<()> {
        (**self).wait(secs)
    }
}
