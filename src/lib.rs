//! `stackviz` turns bounded-stack operations into ordered animation steps.
//!
//! The crate owns the stack model and decides what must be shown, in what order, for every
//! `push`, `pop`, `peek`, `isEmpty`, `isFull` and `clear`. Drawing is delegated to a
//! [`Renderer`]; [`RecordingRenderer`] records a frame-accurate [`Timeline`] that can be sampled
//! or written out as JSON.
//!
//! ```no_run
//! use stackviz::{RecordingRenderer, SceneConfig, StackAnimator};
//!
//! # fn main() -> stackviz::StackvizResult<()> {
//! let mut anim = StackAnimator::new(6, SceneConfig::default(), RecordingRenderer::default())?;
//! anim.push(10)?;
//! anim.peek()?;
//! anim.pop()?;
//! let timeline = anim.into_renderer().timeline();
//! # let _ = timeline;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod effects;
mod foundation;
mod layout;
mod oplog;
mod render;
mod script;
mod sequencer;
mod session;
mod stack;

pub use animation::{
    ease::Ease,
    lerp::Lerp,
    step::{
        Action, Animation, Cue, NodeId, NodeState, Shape, Span, Step, Target, TextAlign, Tracks,
        total_duration_secs,
    },
};
pub use config::{FontSizes, LayoutConfig, Palette, SceneConfig, TimingConfig};
pub use effects::feedback::{FlashStyle, StatusStyle, error_flash, status_message};
pub use foundation::core::{Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Size, Vec2};
pub use foundation::error::{StackvizError, StackvizResult};
pub use layout::{
    pointer::{PointerPose, PointerState, PointerTracker},
    slots::SlotLayout,
};
pub use oplog::{LogEntry, LogStyle, OperationLog};
pub use render::{
    backend::Renderer,
    player::Player,
    recorder::{NodeHandle, RecordingRenderer, Timeline, TimelineEvent, TimelineEventKind},
};
pub use script::{FINAL_HOLD_SECS, Script};
pub use sequencer::{
    machine::{Entry, Sequencer},
    phase::Phase,
    plan::{Operation, OperationPlan},
};
pub use session::{RunSummary, StackAnimator};
pub use stack::state::{BoundedStack, DrainTopDown, OperationResult};
