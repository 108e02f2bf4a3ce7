use crate::{
    animation::{
        ease::Ease,
        step::{Cue, NodeId, NodeState, Shape, Step, Target, TextAlign},
    },
    foundation::core::{Point, Rgba8, Vec2},
};

/// Parameters of the container flash and shake.
#[derive(Clone, Debug, PartialEq)]
pub struct FlashStyle {
    /// Outline color at rest, restored at the end.
    pub rest: Rgba8,
    /// Outline color while flashing.
    pub alert: Rgba8,
    /// Horizontal displacement of one shake stroke.
    pub amplitude: f64,
    /// Duration of each of the five strokes.
    pub step_secs: f64,
    /// Easing of each stroke.
    pub ease: Ease,
}

/// Recolor, shake right-left-right about `origin`, restore.
///
/// Strokes are absolute moves, so the target always ends exactly on `origin` with its rest color.
pub fn error_flash(target: NodeId, origin: Point, style: &FlashStyle) -> Vec<Step> {
    let offset = Vec2::new(style.amplitude, 0.0);
    let stroke = |t: Target| {
        Step::animate(Cue::ErrorFlash, [(target, t)], style.step_secs, style.ease)
    };
    vec![
        stroke(Target::Recolor(style.alert)),
        stroke(Target::MoveTo(origin + offset)),
        stroke(Target::MoveTo(origin - offset)),
        stroke(Target::MoveTo(origin)),
        stroke(Target::Recolor(style.rest)),
    ]
}

/// Parameters of transient status messages.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusStyle {
    /// Text center.
    pub position: Point,
    /// Font size.
    pub font_size: f64,
    /// Text color.
    pub color: Rgba8,
    /// Fade-in and fade-out duration.
    pub fade_secs: f64,
    /// Easing of both fades.
    pub ease: Ease,
}

/// Fade `text` in at the status position, hold for `hold_secs`, fade out and remove it.
pub fn status_message(
    node: NodeId,
    text: impl Into<String>,
    hold_secs: f64,
    style: &StatusStyle,
) -> Vec<Step> {
    let initial = NodeState::at(style.position, style.color)
        .with_text(text)
        .hidden();
    vec![
        Step::create(
            Cue::StatusMessage,
            node,
            Shape::Text {
                font_size: style.font_size,
                align: TextAlign::Center,
            },
            initial,
        ),
        Step::animate(
            Cue::StatusMessage,
            [(node, Target::Fade(1.0))],
            style.fade_secs,
            style.ease,
        ),
        Step::wait(Cue::StatusMessage, hold_secs),
        Step::animate(
            Cue::StatusMessage,
            [(node, Target::Fade(0.0))],
            style.fade_secs,
            style.ease,
        ),
        Step::destroy(Cue::StatusMessage, node),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/effects/feedback.rs"]
mod tests;
