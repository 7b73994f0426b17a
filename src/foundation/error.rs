/// Convenience result type used across appicon.
pub type IconResult<T> = Result<T, IconError>;

/// Top-level error taxonomy. Every variant aborts an icon set run.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// A required build input (environment variable or flag) was absent.
    #[error("missing configuration: {0}")]
    MissingConfiguration(String),

    /// A primitive or the whole composition could not be rasterized.
    #[error("render error: {0}")]
    Render(String),

    /// A pixel buffer could not be encoded to PNG.
    #[error("encode error: {0}")]
    Encode(String),

    /// A filesystem operation on the output directory failed.
    #[error("write error: {0}")]
    Write(String),

    /// An icon descriptor contains values that cannot be drawn.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing descriptors and manifests.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Build an [`IconError::MissingConfiguration`] value.
    pub fn missing_configuration(msg: impl Into<String>) -> Self {
        Self::MissingConfiguration(msg.into())
    }

    /// Build an [`IconError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`IconError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`IconError::Write`] value.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Build an [`IconError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`IconError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
