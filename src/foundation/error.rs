/// Convenience result alias used throughout the crate.
pub type FlowResult<T> = Result<T, FlowError>;

/// Error type for configuration, validation, serialization and layout-contract failures.
#[derive(thiserror::Error, Debug)]
pub enum FlowError {
    /// Invalid layout configuration (e.g. a negative margin or spacing).
    #[error("config error: {0}")]
    Config(String),

    /// Invalid caller input (unknown item id, duplicate id, malformed request).
    #[error("validation error: {0}")]
    Validation(String),

    #[error("serial error: {0}")]
    Serial(String),

    /// A computed layout violated one of the engine's geometric guarantees.
    #[error("layout contract violated: {0}")]
    Contract(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlowError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serial(msg: impl Into<String>) -> Self {
        Self::Serial(msg.into())
    }

    pub fn contract(msg: impl Into<String>) -> Self {
        Self::Contract(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FlowError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
