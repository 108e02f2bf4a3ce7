//! Append-only operation log.

use crate::{
    animation::{
        ease::Ease,
        step::{Cue, NodeId, NodeState, Shape, Step, Target, TextAlign},
    },
    foundation::core::{Point, Rgba8},
};

/// One line of the log.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogEntry {
    /// 1-based position in operation order.
    pub sequence_number: u64,
    /// Human-readable description, e.g. `Pushed - 10`.
    pub text: String,
}

/// Display parameters for log lines.
#[derive(Clone, Debug, PartialEq)]
pub struct LogStyle {
    /// Left anchor of the first line.
    pub origin: Point,
    /// Vertical distance between lines.
    pub line_spacing: f64,
    /// Font size.
    pub font_size: f64,
    /// Text color.
    pub color: Rgba8,
    /// Fade-in duration.
    pub fade_secs: f64,
    /// Fade-in easing.
    pub ease: Ease,
}

/// Permanent audit trail of a run. Entries are never edited or removed.
#[derive(Clone, Debug)]
pub struct OperationLog {
    style: LogStyle,
    entries: Vec<LogEntry>,
}

impl OperationLog {
    /// Empty log drawn with `style`.
    pub fn new(style: LogStyle) -> Self {
        Self {
            style,
            entries: Vec::new(),
        }
    }

    /// Record `text` and return the new entry with the steps that display it.
    pub fn append(&mut self, text: impl Into<String>) -> (LogEntry, Vec<Step>) {
        let entry = LogEntry {
            sequence_number: self.entries.len() as u64 + 1,
            text: text.into(),
        };
        self.entries.push(entry.clone());

        let node = NodeId::LogLine(entry.sequence_number);
        let initial = NodeState::at(self.line_position(entry.sequence_number), self.style.color)
            .with_text(entry.text.clone())
            .hidden();
        let steps = vec![
            Step::create(
                Cue::LogLine,
                node,
                Shape::Text {
                    font_size: self.style.font_size,
                    align: TextAlign::Left,
                },
                initial,
            ),
            Step::animate(
                Cue::LogLine,
                [(node, Target::Fade(1.0))],
                self.style.fade_secs,
                self.style.ease,
            ),
        ];
        (entry, steps)
    }

    /// Left anchor of line `sequence_number`, directly below its predecessor.
    pub fn line_position(&self, sequence_number: u64) -> Point {
        let row = sequence_number.saturating_sub(1) as f64;
        Point::new(
            self.style.origin.x,
            self.style.origin.y - row * self.style.line_spacing,
        )
    }

    /// All entries in operation order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entry texts in operation order.
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` before the first append.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/unit/oplog.rs"]
mod tests;
