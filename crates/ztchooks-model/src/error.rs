//! Error types for hook payload decoding.

/// Errors raised while decoding a hook payload.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The payload is not valid JSON or does not fit the expected shape.
    #[error("invalid hook payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
