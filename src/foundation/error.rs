/// Convenience result type used across the crate.
pub type SpotlightResult<T> = Result<T, SpotlightError>;

/// Top-level error taxonomy.
///
/// Lifecycle operations (`show`, `hide`, `remove_view`) never surface these; they log and
/// decline instead. Errors are returned from configuration, compositing and persistence.
#[derive(thiserror::Error, Debug)]
pub enum SpotlightError {
    /// Invalid user-provided configuration or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Shown-flag persistence failed.
    #[error("registry error: {0}")]
    Registry(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpotlightError {
    /// Build a [`SpotlightError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpotlightError::Registry`] value.
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Build a [`SpotlightError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SpotlightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
