use crate::foundation::error::{StackvizError, StackvizResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Absolute 0-based frame index on the recorded timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)` on the recorded timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> StackvizResult<Self> {
        if start.0 > end.0 {
            return Err(StackvizError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Normalized progress of `f` through the range, clamped to `0..=1`.
    ///
    /// Empty ranges report `1.0`.
    pub fn progress(self, f: FrameIndex) -> f64 {
        if self.is_empty() || f.0 >= self.end.0 {
            return 1.0;
        }
        if f.0 <= self.start.0 {
            return 0.0;
        }
        ((f.0 - self.start.0) as f64) / (self.len_frames() as f64)
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> StackvizResult<Self> {
        if den == 0 {
            return Err(StackvizError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(StackvizError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to a frame count, rounding half up.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64() + 0.5).floor().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Straight-alpha RGBA8 color.
///
/// Serialized as a `#rrggbb` / `#rrggbbaa` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    /// Container outline blue.
    pub const BLUE: Self = Self::rgb(0x58, 0xc4, 0xdd);
    /// Block and pointer green.
    pub const GREEN: Self = Self::rgb(0x83, 0xc1, 0x67);
    /// Alert red.
    pub const RED: Self = Self::rgb(0xfc, 0x62, 0x55);
    /// Status text yellow.
    pub const YELLOW: Self = Self::rgb(0xff, 0xff, 0x00);

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> StackvizResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| StackvizError::validation(format!("color '{s}' must start with '#'")))?;
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .ok_or_else(|| StackvizError::validation(format!("invalid hex color '{s}'")))
        };
        match hex.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => Err(StackvizError::validation(format!(
                "hex color '{s}' must have 6 or 8 digits"
            ))),
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = StackvizError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        c.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
