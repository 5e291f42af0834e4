//! Error types for the game layer.
//!
//! Only provider faults are exceptional here. Player-facing outcomes
//! (invalid paths, missing words, degraded pairings) are ordinary values:
//! see [`crate::validate::PathError`] and the `Option` results on the
//! service.

use thiserror::Error;
use word_chain_core::CoreError;
use word_chain_graph::GraphError;

/// Result type alias for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors from the game orchestration layer.
#[derive(Debug, Error)]
pub enum GameError {
    /// Core-level failure (embedding provider, catalog, config).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Graph-level failure.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The word catalog holds too few words for a game.
    #[error("word catalog has fewer than two words")]
    EmptyCatalog,
}
