//! Error types for semantic graph operations.

use thiserror::Error;
use word_chain_core::CoreError;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors from graph construction and mutation.
///
/// Provider faults pass through as [`GraphError::Core`]; the two local
/// variants guard the provider's output contract at the graph boundary.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Core-level failure (embedding provider, config).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Provider returned a vector of the wrong dimension for a word.
    #[error("embedding for '{word}' has {actual} dimensions, expected {expected}")]
    WrongDimensions {
        word: String,
        expected: usize,
        actual: usize,
    },

    /// Provider returned the wrong number of vectors for a batch.
    #[error("provider returned {actual} embeddings for a batch of {expected} words")]
    BatchSizeMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_dimensions_display() {
        let err = GraphError::WrongDimensions {
            word: "cat".into(),
            expected: 384,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("cat"));
        assert!(msg.contains("384"));
    }

    #[test]
    fn test_core_error_passthrough() {
        let core = CoreError::Embedding("model offline".into());
        let err: GraphError = core.into();
        assert!(err.to_string().contains("model offline"));
    }
}
