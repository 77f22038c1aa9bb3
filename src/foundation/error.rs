/// Convenience result type used throughout the crate.
pub type UnveilResult<T> = Result<T, UnveilError>;

/// Top-level error type for presentation sessions.
#[derive(thiserror::Error, Debug)]
pub enum UnveilError {
    /// Input failed validation (bad config, malformed script).
    #[error("validation error: {0}")]
    Validation(String),

    /// Operation is not valid in the component's current state.
    #[error("state error: {0}")]
    State(String),

    /// A platform capability (play, fullscreen) is unsupported or was denied.
    #[error("capability unavailable: {0}")]
    Capability(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all wrapper for lower-level errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UnveilError {
    /// Build a [`UnveilError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`UnveilError::State`] value.
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Build a [`UnveilError::Capability`] value.
    pub fn capability(msg: impl Into<String>) -> Self {
        Self::Capability(msg.into())
    }

    /// Build a [`UnveilError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for UnveilError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
