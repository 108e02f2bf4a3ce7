use crate::{
    animation::{
        ease::Ease,
        lerp::Lerp,
        step::{NodeState, Shape, Target},
    },
    foundation::{
        core::{Fps, FrameIndex, FrameRange},
        error::{StackvizError, StackvizResult},
    },
    render::backend::Renderer,
};

/// Handle issued by [`RecordingRenderer`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeHandle(pub u32);

/// One recorded renderer call placed on the frame timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineEvent {
    /// Frames occupied by the call; empty for create/destroy.
    pub range: FrameRange,
    /// What happened.
    pub kind: TimelineEventKind,
}

/// Kind of a [`TimelineEvent`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    /// Node created.
    Create {
        /// New handle.
        handle: NodeHandle,
        /// Shape descriptor.
        shape: Shape,
        /// Initial state.
        initial: NodeState,
    },
    /// Animation played.
    Animate {
        /// Animated handles with their targets.
        tracks: Vec<(NodeHandle, Target)>,
        /// Easing.
        ease: Ease,
    },
    /// Node destroyed.
    Destroy {
        /// Removed handle.
        handle: NodeHandle,
    },
    /// Timing gap.
    Wait,
}

/// Serializable record of a whole run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Frame rate used to quantize step durations.
    pub fps: Fps,
    /// Total frames.
    pub duration: FrameIndex,
    /// Calls in playback order.
    pub events: Vec<TimelineEvent>,
}

impl Timeline {
    /// Total length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration.0)
    }
}

#[derive(Clone, Debug)]
struct Segment {
    range: FrameRange,
    from: NodeState,
    to: NodeState,
    ease: Ease,
}

#[derive(Clone, Debug)]
struct RecordedNode {
    created: FrameIndex,
    destroyed: Option<FrameIndex>,
    initial: NodeState,
    current: NodeState,
    segments: Vec<Segment>,
}

/// Reference [`Renderer`] that records a frame-accurate timeline instead of drawing.
///
/// Durations are quantized to whole frames at the configured [`Fps`]. Any node can be sampled at
/// any frame with eased interpolation, which makes the recorder suitable for asserting on what a
/// viewer would see.
#[derive(Clone, Debug)]
pub struct RecordingRenderer {
    fps: Fps,
    clock: FrameIndex,
    nodes: Vec<RecordedNode>,
    events: Vec<TimelineEvent>,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new(Fps::default())
    }
}

impl RecordingRenderer {
    /// Empty recorder at `fps`.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            clock: FrameIndex(0),
            nodes: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Frame the next call starts on.
    pub fn clock(&self) -> FrameIndex {
        self.clock
    }

    /// Snapshot of everything recorded so far.
    pub fn timeline(&self) -> Timeline {
        Timeline {
            fps: self.fps,
            duration: self.clock,
            events: self.events.clone(),
        }
    }

    /// Return `true` if `handle` was created and not yet destroyed.
    pub fn is_alive(&self, handle: NodeHandle) -> bool {
        self.node(handle).is_some_and(|n| n.destroyed.is_none())
    }

    /// Final state of a live node after every call so far.
    pub fn current(&self, handle: NodeHandle) -> Option<&NodeState> {
        self.node(handle)
            .filter(|n| n.destroyed.is_none())
            .map(|n| &n.current)
    }

    /// Handles of live nodes, in creation order.
    pub fn live_handles(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.destroyed.is_none())
            .map(|(i, _)| NodeHandle(i as u32))
    }

    /// State of `handle` as shown on `frame`, or `None` if it does not exist then.
    #[tracing::instrument(skip(self))]
    pub fn state_at(&self, handle: NodeHandle, frame: FrameIndex) -> Option<NodeState> {
        let node = self.node(handle)?;
        if frame < node.created || node.destroyed.is_some_and(|d| frame >= d) {
            return None;
        }

        let mut state = node.initial.clone();
        for seg in &node.segments {
            if frame >= seg.range.end {
                state = seg.to.clone();
                continue;
            }
            if frame >= seg.range.start {
                let t = seg.ease.apply(seg.range.progress(frame));
                return Some(NodeState::lerp(&seg.from, &seg.to, t));
            }
            break;
        }
        Some(state)
    }

    fn node(&self, handle: NodeHandle) -> Option<&RecordedNode> {
        self.nodes.get(handle.0 as usize)
    }

    fn live_node_mut(&mut self, handle: NodeHandle) -> StackvizResult<&mut RecordedNode> {
        match self.nodes.get_mut(handle.0 as usize) {
            Some(n) if n.destroyed.is_none() => Ok(n),
            Some(_) => Err(StackvizError::playback(format!(
                "{handle:?} was already destroyed"
            ))),
            None => Err(StackvizError::playback(format!("unknown {handle:?}"))),
        }
    }

    fn advance(&mut self, secs: f64) -> StackvizResult<FrameRange> {
        if !(secs.is_finite() && secs >= 0.0) {
            return Err(StackvizError::validation(format!(
                "step duration must be finite and >= 0 (got {secs})"
            )));
        }
        let start = self.clock;
        let end = FrameIndex(start.0 + self.fps.secs_to_frames_round(secs));
        self.clock = end;
        FrameRange::new(start, end)
    }

    fn instant(&self) -> FrameRange {
        FrameRange {
            start: self.clock,
            end: self.clock,
        }
    }
}

impl Renderer for RecordingRenderer {
    type Handle = NodeHandle;

    fn create(&mut self, shape: &Shape, initial: &NodeState) -> StackvizResult<NodeHandle> {
        let handle = NodeHandle(u32::try_from(self.nodes.len()).map_err(|_| {
            StackvizError::playback("recording renderer ran out of handles")
        })?);
        self.nodes.push(RecordedNode {
            created: self.clock,
            destroyed: None,
            initial: initial.clone(),
            current: initial.clone(),
            segments: Vec::new(),
        });
        self.events.push(TimelineEvent {
            range: self.instant(),
            kind: TimelineEventKind::Create {
                handle,
                shape: shape.clone(),
                initial: initial.clone(),
            },
        });
        Ok(handle)
    }

    fn animate(
        &mut self,
        tracks: &[(NodeHandle, Target)],
        duration_secs: f64,
        ease: Ease,
    ) -> StackvizResult<()> {
        for (handle, _) in tracks {
            self.live_node_mut(*handle)?;
        }
        let range = self.advance(duration_secs)?;

        // several targets may address one node; fold them in track order
        let mut seen: Vec<NodeHandle> = Vec::new();
        for (handle, _) in tracks {
            if seen.contains(handle) {
                continue;
            }
            seen.push(*handle);
            let node = self.live_node_mut(*handle)?;
            let from = node.current.clone();
            let to = tracks
                .iter()
                .filter(|(h, _)| h == handle)
                .fold(from.clone(), |state, (_, target)| state.apply(target));
            node.segments.push(Segment {
                range,
                from,
                to: to.clone(),
                ease,
            });
            node.current = to;
        }

        self.events.push(TimelineEvent {
            range,
            kind: TimelineEventKind::Animate {
                tracks: tracks.to_vec(),
                ease,
            },
        });
        Ok(())
    }

    fn destroy(&mut self, handle: NodeHandle) -> StackvizResult<()> {
        let at = self.clock;
        self.live_node_mut(handle)?.destroyed = Some(at);
        self.events.push(TimelineEvent {
            range: self.instant(),
            kind: TimelineEventKind::Destroy { handle },
        });
        Ok(())
    }

    fn wait(&mut self, secs: f64) -> StackvizResult<()> {
        let range = self.advance(secs)?;
        self.events.push(TimelineEvent {
            range,
            kind: TimelineEventKind::Wait,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recorder.rs"]
mod tests;
