/// Convenience result type used across scrollfx.
pub type ScrollResult<T> = Result<T, ScrollError>;

/// Error taxonomy for configuration-time APIs.
///
/// Runtime paths (scroll handling, frame updates) never return these; they degrade to the last
/// known-good state instead.
#[derive(thiserror::Error, Debug)]
pub enum ScrollError {
    /// Invalid user-provided scene or geometry data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed interpolation range or offset anchor.
    #[error("range error: {0}")]
    Range(String),

    /// Layout could not be resolved for the requested operation.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollError {
    /// Build a [`ScrollError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollError::Range`] value.
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    /// Build a [`ScrollError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`ScrollError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
