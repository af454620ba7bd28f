/// Convenience result type used across textmotion.
pub type TextMotionResult<T> = Result<T, TextMotionError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TextMotionError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("insufficient frames: {0}")]
    InsufficientFrames(String),

    #[error("graph error: {0}")]
    Graph(String),

    /// Host-side failure while materializing frames or transitions.
    #[error("realization error: {0}")]
    Realization(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextMotionError {
    /// Build a [`TextMotionError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn insufficient_frames(msg: impl Into<String>) -> Self {
        Self::InsufficientFrames(msg.into())
    }

    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph(msg.into())
    }

    pub fn realization(msg: impl Into<String>) -> Self {
        Self::Realization(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TextMotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
