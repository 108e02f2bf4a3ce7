use smallvec::SmallVec;

use crate::{
    animation::{ease::Ease, lerp::Lerp},
    foundation::core::{Point, Rgba8, Size, Vec2},
};

/// Stable logical identifier for every drawable the sequencer asks a renderer to create.
///
/// Serials in `Block`, `LogLine` and `Status` are allocated once and never reused.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum NodeId {
    /// Intro title card.
    Title,
    /// Stack container outline.
    Container,
    /// `Size: n / capacity` counter under the container.
    SizeLabel,
    /// Arrow of the top pointer.
    PointerArrow,
    /// `Top` text next to the pointer arrow.
    PointerLabel,
    /// Block bound to one stack entry.
    Block(u64),
    /// One line of the operation log (sequence number).
    LogLine(u64),
    /// Transient centered status message.
    Status(u64),
}

/// Horizontal anchoring of a text node's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextAlign {
    /// `position` is the text center.
    Center,
    /// `position` is the left edge, vertically centered.
    Left,
}

/// Shape descriptor handed to [`crate::Renderer::create`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Shape {
    /// Unfilled rectangle (container outline).
    Outline {
        /// Outer size in scene units.
        size: Size,
        /// Stroke width.
        stroke_width: f64,
    },
    /// Outlined rectangle with a centered label.
    Block {
        /// Outer size in scene units.
        size: Size,
        /// Stroke width.
        stroke_width: f64,
        /// Font size of the label; the label text lives in [`NodeState::text`].
        font_size: f64,
        /// Label color.
        label_color: Rgba8,
    },
    /// Single line of text; the content lives in [`NodeState::text`].
    Text {
        /// Font size.
        font_size: f64,
        /// Anchoring of the node position.
        align: TextAlign,
    },
    /// Straight arrow; the endpoints live in [`NodeState::span`].
    Arrow {
        /// Stroke width.
        stroke_width: f64,
    },
}

/// Start and end points of an arrow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// Tail.
    pub start: Point,
    /// Tip.
    pub end: Point,
}

/// Renderer-facing visual state of one node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeState {
    /// Anchor position in scene units (y up, origin at frame center).
    pub position: Point,
    /// Opacity in `0..=1`.
    pub opacity: f64,
    /// Stroke or text color.
    pub color: Rgba8,
    /// Text content for text and block nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Endpoints for arrow nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl NodeState {
    /// Visible node at `position`.
    pub fn at(position: Point, color: Rgba8) -> Self {
        Self {
            position,
            opacity: 1.0,
            color,
            text: None,
            span: None,
        }
    }

    /// Same state with opacity `0`.
    pub fn hidden(mut self) -> Self {
        self.opacity = 0.0;
        self
    }

    /// Same state carrying `text`.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Same state carrying arrow endpoints.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// State reached once `target` has fully played.
    pub fn apply(&self, target: &Target) -> Self {
        let mut next = self.clone();
        match target {
            Target::MoveTo(p) => next.position = *p,
            Target::Shift(d) => {
                next.position += *d;
                if let Some(span) = &mut next.span {
                    span.start += *d;
                    span.end += *d;
                }
            }
            Target::Fade(a) => next.opacity = a.clamp(0.0, 1.0),
            Target::Recolor(c) => next.color = *c,
            Target::Retext(t) => next.text = Some(t.clone()),
            Target::Reshape(s) => {
                next.position = s.start;
                next.span = Some(*s);
            }
        }
        next
    }
}

impl Lerp for Span {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            start: <Point as Lerp>::lerp(&a.start, &b.start, t),
            end: <Point as Lerp>::lerp(&a.end, &b.end, t),
        }
    }
}

impl Lerp for NodeState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let span = match (&a.span, &b.span) {
            (Some(sa), Some(sb)) => Some(Span::lerp(sa, sb, t)),
            (_, sb) => *sb,
        };
        Self {
            position: <Point as Lerp>::lerp(&a.position, &b.position, t),
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            color: Rgba8::lerp(&a.color, &b.color, t),
            // discrete: swaps once the segment completes
            text: if t >= 1.0 {
                b.text.clone()
            } else {
                a.text.clone()
            },
            span,
        }
    }
}

/// Target property a node animates toward.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Target {
    /// Absolute move of the anchor position.
    MoveTo(Point),
    /// Relative move of the anchor position (and arrow endpoints).
    Shift(Vec2),
    /// Opacity change.
    Fade(f64),
    /// Color change.
    Recolor(Rgba8),
    /// Text content swap.
    Retext(String),
    /// Arrow endpoint change; the anchor follows the tail.
    Reshape(Span),
}

/// Tracks of one animation, played concurrently.
pub type Tracks = SmallVec<[(NodeId, Target); 2]>;

/// One blocking animation: every track plays over the same duration and easing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Animation {
    /// `(node, target)` pairs played together.
    pub tracks: Tracks,
    /// Wall-clock duration in seconds.
    pub duration_secs: f64,
    /// Easing applied to every track.
    pub ease: Ease,
}

/// What a step does on the renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    /// Create a node in its initial state.
    Create {
        /// Logical identifier for later steps.
        node: NodeId,
        /// Shape descriptor.
        shape: Shape,
        /// Initial visual state.
        initial: NodeState,
    },
    /// Play an animation to completion.
    Animate(Animation),
    /// Remove a node from the visual set.
    Destroy {
        /// Node to remove.
        node: NodeId,
    },
    /// Timing gap with no visual change.
    Wait {
        /// Gap length in seconds.
        secs: f64,
    },
}

/// Which part of an operation's visualization a step belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Cue {
    /// Scene setup before the first operation.
    Setup,
    /// Operation log line.
    LogLine,
    /// Gap between announcing and validating an operation.
    Announce,
    /// Block entering its slot.
    BlockEnter,
    /// Block leaving the stack.
    BlockExit,
    /// Size counter text swap.
    SizeUpdate,
    /// Pointer moving to the top slot.
    PointerMove,
    /// Pointer fading out on an empty stack.
    PointerHide,
    /// Container flash and shake.
    ErrorFlash,
    /// Transient centered status message.
    StatusMessage,
    /// Gap after an operation settles.
    Settle,
}

/// One entry of an ordered step list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Purpose tag.
    pub cue: Cue,
    /// Renderer action.
    pub action: Action,
}

impl Step {
    /// Create `node` with `shape` in state `initial`.
    pub fn create(cue: Cue, node: NodeId, shape: Shape, initial: NodeState) -> Self {
        Self {
            cue,
            action: Action::Create {
                node,
                shape,
                initial,
            },
        }
    }

    /// Play `tracks` together over `duration_secs`.
    pub fn animate(
        cue: Cue,
        tracks: impl IntoIterator<Item = (NodeId, Target)>,
        duration_secs: f64,
        ease: Ease,
    ) -> Self {
        Self {
            cue,
            action: Action::Animate(Animation {
                tracks: tracks.into_iter().collect(),
                duration_secs,
                ease,
            }),
        }
    }

    /// Remove `node`.
    pub fn destroy(cue: Cue, node: NodeId) -> Self {
        Self {
            cue,
            action: Action::Destroy { node },
        }
    }

    /// Wait `secs` without visual change.
    pub fn wait(cue: Cue, secs: f64) -> Self {
        Self {
            cue,
            action: Action::Wait { secs },
        }
    }

    /// Wall-clock time this step occupies.
    pub fn duration_secs(&self) -> f64 {
        match &self.action {
            Action::Animate(a) => a.duration_secs,
            Action::Wait { secs } => *secs,
            Action::Create { .. } | Action::Destroy { .. } => 0.0,
        }
    }

    /// Return `true` if the step animates `node`.
    pub fn touches(&self, node: NodeId) -> bool {
        match &self.action {
            Action::Create { node: n, .. } | Action::Destroy { node: n } => *n == node,
            Action::Animate(a) => a.tracks.iter().any(|(n, _)| *n == node),
            Action::Wait { .. } => false,
        }
    }
}

/// Sum of step durations.
pub fn total_duration_secs(steps: &[Step]) -> f64 {
    steps.iter().map(Step::duration_secs).sum()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/step.rs"]
mod tests;
