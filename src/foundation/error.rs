/// Convenience result type used across stackviz.
pub type StackvizResult<T> = Result<T, StackvizError>;

/// Fault taxonomy for the engine.
///
/// Stack overflow and underflow are not faults; they are reported as
/// [`crate::OperationResult`] values and visualized.
#[derive(thiserror::Error, Debug)]
pub enum StackvizError {
    /// Invalid capacity, configuration or script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operation was planned out of order (illegal phase transition, missing setup).
    #[error("sequencing error: {0}")]
    Sequencing(String),

    /// A step could not be played against the renderer.
    #[error("playback error: {0}")]
    Playback(String),

    /// Errors when serializing or deserializing scripts, configs or timelines.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StackvizError {
    /// Build a [`StackvizError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StackvizError::Sequencing`] value.
    pub fn sequencing(msg: impl Into<String>) -> Self {
        Self::Sequencing(msg.into())
    }

    /// Build a [`StackvizError::Playback`] value.
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Build a [`StackvizError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StackvizError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
