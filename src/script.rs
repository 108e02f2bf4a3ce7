use std::{fs::File, io::BufReader, path::Path};

use crate::{
    config::SceneConfig,
    foundation::error::{StackvizError, StackvizResult},
    render::backend::Renderer,
    sequencer::plan::Operation,
    session::{RunSummary, StackAnimator},
};

/// Seconds the last frame is held after a script finishes.
pub const FINAL_HOLD_SECS: f64 = 2.0;

/// A JSON operation script.
///
/// ```json
/// { "capacity": 6, "ops": [{ "push": 10 }, "pop", "peek", "is_empty", "is_full", "clear"] }
/// ```
///
/// `scene` accepts a partial [`SceneConfig`]; a top-level `title` overrides the scene title, with
/// `null` meaning no title card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Number of stack slots.
    pub capacity: usize,
    /// Scene drawing parameters.
    #[serde(default)]
    pub scene: SceneConfig,
    /// Title override.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "title_override"
    )]
    pub title: Option<Option<String>>,
    /// Operations, played in order.
    pub ops: Vec<Operation<i64>>,
}

impl Script {
    /// The operation sequence of the stock demo at `capacity` slots.
    pub fn demo(capacity: usize) -> Self {
        Self {
            capacity,
            scene: SceneConfig::default(),
            title: None,
            ops: vec![
                Operation::Push(10),
                Operation::Push(20),
                Operation::Push(30),
                Operation::Peek,
                Operation::Pop,
                Operation::Push(40),
                Operation::Push(50),
                Operation::IsEmpty,
                Operation::IsFull,
                Operation::Clear,
            ],
        }
    }

    /// Parse and validate a script from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StackvizResult<Self> {
        let script: Self = serde_json::from_reader(r)?;
        script.validate()?;
        Ok(script)
    }

    /// Parse and validate a script from a JSON string.
    pub fn from_json_str(s: &str) -> StackvizResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StackvizResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StackvizError::validation(format!("open script JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check capacity and scene parameters.
    pub fn validate(&self) -> StackvizResult<()> {
        if self.capacity == 0 {
            return Err(StackvizError::validation("script capacity must be > 0"));
        }
        self.scene_config().validate()
    }

    /// Scene config with the title override applied.
    pub fn scene_config(&self) -> SceneConfig {
        let mut scene = self.scene.clone();
        if let Some(title) = &self.title {
            scene.title = title.clone();
        }
        scene
    }

    /// Play the whole script on `renderer`, holding the last frame at the end.
    #[tracing::instrument(
        skip(self, renderer),
        fields(capacity = self.capacity, ops = self.ops.len())
    )]
    pub fn run<R: Renderer>(&self, renderer: R) -> StackvizResult<(RunSummary<i64>, R)> {
        let mut animator = StackAnimator::new(self.capacity, self.scene_config(), renderer)?;
        let mut summary = animator.run(self.ops.iter().cloned())?;
        animator.hold(FINAL_HOLD_SECS)?;
        summary.duration_secs = animator.elapsed_secs();
        Ok((summary, animator.into_renderer()))
    }
}

// Distinguishes an absent `title` (keep the scene's) from `"title": null` (no title card).
mod title_override {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(
        v: &Option<Option<String>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match v {
            Some(inner) => inner.serialize(s),
            None => s.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Option<String>>, D::Error> {
        Option::<String>::deserialize(d).map(Some)
    }
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
