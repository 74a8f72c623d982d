/// Convenience result type used across oledcast.
pub type OledResult<T> = Result<T, OledError>;

/// Top-level error taxonomy used by the synthesis and encoding APIs.
#[derive(thiserror::Error, Debug)]
pub enum OledError {
    /// Invalid user-provided configuration or input shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// Circuit topology invariants were violated while building or addressing the graph.
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Input does not fit the addressable frame budget or the symbol alphabet.
    #[error("capacity error: {0}")]
    Capacity(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OledError {
    /// Build an [`OledError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OledError::Synthesis`] value.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::Synthesis(msg.into())
    }

    /// Build an [`OledError::Capacity`] value.
    pub fn capacity(msg: impl Into<String>) -> Self {
        Self::Capacity(msg.into())
    }

    /// Build an [`OledError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
