//! Player path validation.
//!
//! A valid path has 2 to 6 steps (3 to 7 words), no duplicate words, every
//! word in the catalog, and every consecutive pair semantically connected.
//! The first failing rule aborts with a reason; validation outcomes are
//! values, never panics.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use word_chain_core::word::normalize;
use word_chain_core::WordCatalog;
use word_chain_graph::SemanticGraph;

use crate::error::GameResult;

/// Minimum number of steps (edges) in a valid player path.
pub const MIN_PATH_STEPS: usize = 2;

/// Maximum number of steps (edges) in a valid player path.
pub const MAX_PATH_STEPS: usize = 6;

/// Reason a player path is invalid. The `Display` form is the
/// player-facing message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathError {
    /// Fewer than [`MIN_PATH_STEPS`] steps.
    #[error("path has {steps} steps, at least 2 are required")]
    TooFewSteps { steps: usize },

    /// More than [`MAX_PATH_STEPS`] steps.
    #[error("path has {steps} steps, no more than 6 are allowed")]
    TooManySteps { steps: usize },

    /// The same word appears twice (case-insensitive).
    #[error("path contains duplicate word '{word}'")]
    DuplicateWord { word: String },

    /// A word is missing from the word catalog.
    #[error("word '{word}' is not in the word catalog")]
    UnknownWord { word: String },

    /// A consecutive pair is below the similarity threshold.
    #[error("words '{first}' and '{second}' are not semantically connected (similarity: {similarity:.3})")]
    NotConnected {
        first: String,
        second: String,
        similarity: f32,
    },
}

/// Validates player paths against the catalog and the semantic graph.
#[derive(Debug, Clone)]
pub struct PathValidator {
    graph: Arc<SemanticGraph>,
    catalog: Arc<WordCatalog>,
}

impl PathValidator {
    pub fn new(graph: Arc<SemanticGraph>, catalog: Arc<WordCatalog>) -> Self {
        Self { graph, catalog }
    }

    /// Check a player path against all structural rules.
    ///
    /// The outer `GameResult` carries only provider faults (connectivity
    /// checks may auto-add words); the inner result is the validation
    /// outcome itself.
    pub async fn validate(&self, path: &[String]) -> GameResult<Result<(), PathError>> {
        let steps = path.len().saturating_sub(1);
        if path.len() < MIN_PATH_STEPS + 1 {
            return Ok(Err(PathError::TooFewSteps { steps }));
        }
        if steps > MAX_PATH_STEPS {
            return Ok(Err(PathError::TooManySteps { steps }));
        }

        let mut seen: HashSet<String> = HashSet::with_capacity(path.len());
        for word in path {
            if !seen.insert(normalize(word)) {
                return Ok(Err(PathError::DuplicateWord {
                    word: normalize(word),
                }));
            }
        }

        for word in path {
            if !self.catalog.contains(word) {
                return Ok(Err(PathError::UnknownWord {
                    word: normalize(word),
                }));
            }
        }

        for pair in path.windows(2) {
            let first = normalize(&pair[0]);
            let second = normalize(&pair[1]);
            let similarity = self.graph.similarity(&first, &second).await?;
            if similarity < self.graph.threshold() {
                return Ok(Err(PathError::NotConnected {
                    first,
                    second,
                    similarity,
                }));
            }
        }

        Ok(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_connected_message_names_words_and_similarity() {
        let err = PathError::NotConnected {
            first: "cat".into(),
            second: "dog".into(),
            similarity: 0.3,
        };
        let msg = err.to_string();
        assert!(msg.contains("'cat'"));
        assert!(msg.contains("'dog'"));
        assert!(msg.contains("0.300"));
    }

    #[test]
    fn test_step_bound_messages() {
        assert!(PathError::TooFewSteps { steps: 1 }
            .to_string()
            .contains("at least 2"));
        assert!(PathError::TooManySteps { steps: 7 }
            .to_string()
            .contains("no more than 6"));
    }
}
