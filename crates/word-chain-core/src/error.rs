//! Error types for word-chain-core.
//!
//! All fallible operations return `Result<T, E>` with `thiserror`-derived
//! error types. Provider faults are fatal for the enclosing operation and
//! propagate with `?`; there is no retry layer.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core seams: embedding provider, catalog, config.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Embedding provider failure. Aborts the enclosing operation.
    #[error("embedding provider failure: {0}")]
    Embedding(String),

    /// Vector dimension mismatch between two embeddings.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Word catalog could not be loaded or has an invalid shape.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Similarity threshold outside the valid cosine range.
    #[error("invalid similarity threshold {0} (must be in [-1.0, 1.0])")]
    InvalidThreshold(f32),

    /// IO error (catalog file access).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error (catalog file parsing).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = CoreError::DimensionMismatch {
            expected: 384,
            actual: 512,
        };
        let msg = err.to_string();
        assert!(msg.contains("384"));
        assert!(msg.contains("512"));
    }

    #[test]
    fn test_invalid_threshold_display() {
        let err = CoreError::InvalidThreshold(1.5);
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CoreError = io_err.into();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
