//! Error types for VibeCheck

/// Result type alias using VibeCheck's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for VibeCheck operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Trigger pattern compilation errors
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Metrics observer failures
    #[error("observer error: {0}")]
    Observer(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML serialization errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new pattern error
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }

    /// Create a new observer error
    pub fn observer(msg: impl Into<String>) -> Self {
        Self::Observer(msg.into())
    }
}
