/// Convenience result type used across the crate.
pub type MemeResult<T> = Result<T, MemeError>;

/// Top-level error taxonomy used by pipeline and collaborator APIs.
#[derive(thiserror::Error, Debug)]
pub enum MemeError {
    /// Invalid user-provided data (frame sizes, raw buffers, project files).
    #[error("validation error: {0}")]
    Validation(String),

    /// Encoded image bytes could not be turned into a bitmap.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while drawing into a frame (text rasterisation, overlay sizing).
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding or writing a finished frame.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MemeError {
    /// Build a [`MemeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MemeError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`MemeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MemeError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`MemeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
