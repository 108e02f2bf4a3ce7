//! Scene layout, palette and timing constants.
//!
//! Every field has a default, so a JSON document only needs the keys it overrides.

use crate::{
    animation::ease::Ease,
    foundation::{
        core::{Point, Rgba8, Vec2},
        error::{StackvizError, StackvizResult},
    },
};

/// Complete scene configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Intro title card text; `None` skips the intro.
    pub title: Option<String>,
    /// Geometry in scene units.
    pub layout: LayoutConfig,
    /// Colors.
    pub palette: Palette,
    /// Step durations in seconds.
    pub timing: TimingConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: Some("Stack Simulation".to_string()),
            layout: LayoutConfig::default(),
            palette: Palette::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Check every section.
    pub fn validate(&self) -> StackvizResult<()> {
        self.layout.validate()?;
        self.timing.validate()
    }
}

/// Scene geometry. Scene units, y up, origin at the frame center.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal center shared by the container and every block.
    pub stack_x: f64,
    /// Bottom edge of slot `0`.
    pub base_y: f64,
    /// Height of one slot (and one block).
    pub slot_height: f64,
    /// Width of the container and every block.
    pub slot_width: f64,
    /// Extra container height beyond `capacity * slot_height`.
    pub container_padding: f64,
    /// Container outline stroke width.
    pub container_stroke: f64,
    /// Block outline stroke width.
    pub block_stroke: f64,
    /// Vertical distance from the container bottom to the size label center.
    pub size_label_offset: f64,
    /// How far left of the container the pointer arrow starts.
    pub pointer_reach: f64,
    /// Gap between the arrow tip and the block's left edge.
    pub pointer_gap: f64,
    /// Distance from the arrow start to the `Top` label center.
    pub pointer_label_offset: f64,
    /// Pointer arrow stroke width.
    pub pointer_stroke: f64,
    /// Displacement of a popped block while it fades out.
    pub pop_exit_offset: Vec2,
    /// Displacement of each cleared block while it fades out.
    pub clear_exit_offset: Vec2,
    /// Left anchor of the first operation log line.
    pub log_origin: Point,
    /// Vertical distance between consecutive log lines.
    pub log_line_spacing: f64,
    /// Center of transient status messages.
    pub status_position: Point,
    /// Center of the intro title.
    pub title_position: Point,
    /// Horizontal displacement of one shake stroke.
    pub shake_amplitude: f64,
    /// Font sizes.
    pub fonts: FontSizes,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            stack_x: 3.5,
            base_y: -2.5,
            slot_height: 0.7,
            slot_width: 2.5,
            container_padding: 0.2,
            container_stroke: 4.0,
            block_stroke: 3.0,
            size_label_offset: 0.4,
            pointer_reach: 0.7,
            pointer_gap: 0.05,
            pointer_label_offset: 0.3,
            pointer_stroke: 6.0,
            pop_exit_offset: Vec2::new(0.8, 0.8),
            clear_exit_offset: Vec2::new(0.8, 0.9),
            log_origin: Point::new(-6.3, 2.0),
            log_line_spacing: 0.5,
            status_position: Point::new(-1.5, 0.0),
            title_position: Point::ORIGIN,
            shake_amplitude: 0.2,
            fonts: FontSizes::default(),
        }
    }
}

impl LayoutConfig {
    /// Reject non-positive sizes and non-finite coordinates.
    pub fn validate(&self) -> StackvizResult<()> {
        let positive = [
            ("slot_height", self.slot_height),
            ("slot_width", self.slot_width),
            ("container_stroke", self.container_stroke),
            ("block_stroke", self.block_stroke),
            ("pointer_stroke", self.pointer_stroke),
            ("log_line_spacing", self.log_line_spacing),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(StackvizError::validation(format!(
                    "layout.{name} must be finite and > 0 (got {v})"
                )));
            }
        }

        let finite = [
            ("stack_x", self.stack_x),
            ("base_y", self.base_y),
            ("container_padding", self.container_padding),
            ("size_label_offset", self.size_label_offset),
            ("pointer_reach", self.pointer_reach),
            ("pointer_gap", self.pointer_gap),
            ("pointer_label_offset", self.pointer_label_offset),
            ("shake_amplitude", self.shake_amplitude),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(StackvizError::validation(format!(
                    "layout.{name} must be finite"
                )));
            }
        }
        if self.container_padding < 0.0 {
            return Err(StackvizError::validation("layout.container_padding must be >= 0"));
        }

        self.fonts.validate()
    }
}

/// Font sizes per text role.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontSizes {
    /// Intro title.
    pub title: f64,
    /// Block value labels.
    pub block: f64,
    /// Size counter.
    pub size_label: f64,
    /// Operation log lines.
    pub log: f64,
    /// `Top` pointer label.
    pub pointer: f64,
    /// Status messages.
    pub status: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 50.0,
            block: 26.0,
            size_label: 26.0,
            log: 26.0,
            pointer: 24.0,
            status: 30.0,
        }
    }
}

impl FontSizes {
    fn validate(&self) -> StackvizResult<()> {
        let all = [
            self.title,
            self.block,
            self.size_label,
            self.log,
            self.pointer,
            self.status,
        ];
        if all.iter().all(|v| v.is_finite() && *v > 0.0) {
            Ok(())
        } else {
            Err(StackvizError::validation("layout.fonts sizes must be finite and > 0"))
        }
    }
}

/// Scene colors.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Container outline at rest.
    pub container: Rgba8,
    /// Container outline during an error flash.
    pub alert: Rgba8,
    /// Block outlines.
    pub block: Rgba8,
    /// Pointer arrow and label.
    pub pointer: Rgba8,
    /// Log lines, size counter, block labels and title.
    pub text: Rgba8,
    /// Status messages.
    pub status: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            container: Rgba8::BLUE,
            alert: Rgba8::RED,
            block: Rgba8::GREEN,
            pointer: Rgba8::GREEN,
            text: Rgba8::WHITE,
            status: Rgba8::YELLOW,
        }
    }
}

/// Step durations in seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Title write-in.
    pub title_write_secs: f64,
    /// Hold after the title is written.
    pub title_hold_secs: f64,
    /// Title dissolving into the container.
    pub title_transform_secs: f64,
    /// Hold after the container appears.
    pub setup_hold_secs: f64,
    /// Size counter fade-in during setup.
    pub size_label_fade_secs: f64,
    /// Log line fade-in.
    pub log_fade_secs: f64,
    /// Gap between announcing an operation and visualizing it.
    pub announce_gap_secs: f64,
    /// Pushed block fade-in.
    pub block_enter_secs: f64,
    /// Popped block exit.
    pub block_exit_secs: f64,
    /// Exit of each block during a clear.
    pub clear_exit_secs: f64,
    /// Size counter text swap.
    pub size_update_secs: f64,
    /// Pointer move to the top slot.
    pub pointer_move_secs: f64,
    /// Pointer fade-out on an empty stack.
    pub pointer_hide_secs: f64,
    /// Each of the five flash/shake strokes.
    pub flash_step_secs: f64,
    /// Status message fade in / fade out.
    pub status_fade_secs: f64,
    /// Status message hold.
    pub status_hold_secs: f64,
    /// Gap after an operation settles.
    pub settle_secs: f64,
    /// Easing for every animation.
    pub ease: Ease,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            title_write_secs: 1.0,
            title_hold_secs: 1.0,
            title_transform_secs: 1.0,
            setup_hold_secs: 0.5,
            size_label_fade_secs: 1.0,
            log_fade_secs: 0.5,
            announce_gap_secs: 0.5,
            block_enter_secs: 0.5,
            block_exit_secs: 0.6,
            clear_exit_secs: 0.35,
            size_update_secs: 0.4,
            pointer_move_secs: 0.5,
            pointer_hide_secs: 0.3,
            flash_step_secs: 1.0,
            status_fade_secs: 0.3,
            status_hold_secs: 1.0,
            settle_secs: 0.3,
            ease: Ease::InOutCubic,
        }
    }
}

impl TimingConfig {
    /// Reject negative or non-finite durations.
    pub fn validate(&self) -> StackvizResult<()> {
        let all = [
            ("title_write_secs", self.title_write_secs),
            ("title_hold_secs", self.title_hold_secs),
            ("title_transform_secs", self.title_transform_secs),
            ("setup_hold_secs", self.setup_hold_secs),
            ("size_label_fade_secs", self.size_label_fade_secs),
            ("log_fade_secs", self.log_fade_secs),
            ("announce_gap_secs", self.announce_gap_secs),
            ("block_enter_secs", self.block_enter_secs),
            ("block_exit_secs", self.block_exit_secs),
            ("clear_exit_secs", self.clear_exit_secs),
            ("size_update_secs", self.size_update_secs),
            ("pointer_move_secs", self.pointer_move_secs),
            ("pointer_hide_secs", self.pointer_hide_secs),
            ("flash_step_secs", self.flash_step_secs),
            ("status_fade_secs", self.status_fade_secs),
            ("status_hold_secs", self.status_hold_secs),
            ("settle_secs", self.settle_secs),
        ];
        for (name, v) in all {
            if !(v.is_finite() && v >= 0.0) {
                return Err(StackvizError::validation(format!(
                    "timing.{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
