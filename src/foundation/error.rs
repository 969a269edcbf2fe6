/// Result type used across softpix.
pub type SoftpixResult<T> = Result<T, SoftpixError>;

/// Every way a softpix operation can fail.
#[derive(thiserror::Error, Debug)]
pub enum SoftpixError {
    /// Unsupported or inconsistent pixel layout.
    #[error("format error: {0}")]
    Format(String),

    /// Shape parameters that cannot be drawn, such as a negative radius.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// The pixel memory could not be locked for writing.
    #[error("lock error: {0}")]
    Lock(String),

    /// Invalid caller-provided data: buffer geometry, scene contents, file paths.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing scenes and policies.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SoftpixError {
    /// Build a [`SoftpixError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`SoftpixError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`SoftpixError::Lock`] value.
    pub fn lock(msg: impl Into<String>) -> Self {
        Self::Lock(msg.into())
    }

    /// Build a [`SoftpixError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SoftpixError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SoftpixError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}
