//! Scoring a player path against the algorithm's reference path.
//!
//! The reference path is always computed first, independent of player-path
//! validity, so callers always get one to display. Score values are part of
//! the outward compatibility contract and must not change.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use word_chain_core::word::normalize;
use word_chain_graph::{shortest_path, SemanticGraph};

use crate::error::GameResult;
use crate::validate::PathValidator;

/// Outcome of scoring a player path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Points awarded. 0 for invalid paths.
    pub score: u32,
    /// Player-facing explanation.
    pub message: String,
    /// The algorithm's path for the same start/target, when one exists.
    pub reference_path: Option<Vec<String>>,
}

/// Score and message for a step difference `player_steps - reference_steps`.
///
/// Exact values preserved for compatibility: `<0 → 120`, `0 → 100`,
/// `1 → 90`, `2 → 80`, `3 → 60`, `>3 → 50`.
#[must_use]
pub fn score_for_diff(diff: i64) -> (u32, &'static str) {
    match diff {
        d if d < 0 => (120, "You beat the algorithm!"),
        0 => (100, "Perfect! You matched the algorithm's path."),
        1 => (90, "Excellent! Just one step more than the algorithm."),
        2 => (80, "Great! Two steps more than the algorithm."),
        3 => (60, "Good! Three steps more than the algorithm."),
        _ => (50, "Completed, but with a much longer path."),
    }
}

/// Compares player paths to the algorithm's optimal path.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    graph: Arc<SemanticGraph>,
    validator: PathValidator,
    max_steps: usize,
}

impl ScoringEngine {
    pub fn new(graph: Arc<SemanticGraph>, validator: PathValidator, max_steps: usize) -> Self {
        Self {
            graph,
            validator,
            max_steps,
        }
    }

    /// Score a player path for the assigned `start` → `target` round.
    ///
    /// # Errors
    ///
    /// Provider faults only; every player-facing outcome is a value.
    pub async fn score(
        &self,
        player_path: &[String],
        start: &str,
        target: &str,
    ) -> GameResult<ScoreResult> {
        // Reference first, so it is available even for invalid player paths.
        let reference = shortest_path(&self.graph, start, target, self.max_steps).await?;

        if let Err(reason) = self.validator.validate(player_path).await? {
            return Ok(ScoreResult {
                score: 0,
                message: reason.to_string(),
                reference_path: reference,
            });
        }

        // Validation guarantees at least three words.
        let first = normalize(&player_path[0]);
        let last = normalize(&player_path[player_path.len() - 1]);
        let start_norm = normalize(start);
        let target_norm = normalize(target);
        if first != start_norm {
            return Ok(ScoreResult {
                score: 0,
                message: format!("path must start with '{start_norm}'"),
                reference_path: reference,
            });
        }
        if last != target_norm {
            return Ok(ScoreResult {
                score: 0,
                message: format!("path must end with '{target_norm}'"),
                reference_path: reference,
            });
        }

        let player_steps = (player_path.len() - 1) as i64;
        let Some(reference_path) = reference else {
            // The player found a path the algorithm could not.
            return Ok(ScoreResult {
                score: 120,
                message: "You beat the algorithm! It found no path at all.".to_string(),
                reference_path: None,
            });
        };

        let reference_steps = (reference_path.len() - 1) as i64;
        let diff = player_steps - reference_steps;
        let (score, message) = score_for_diff(diff);
        debug!(
            start = %start_norm,
            target = %target_norm,
            player_steps,
            reference_steps,
            score,
            "Scored player path"
        );
        Ok(ScoreResult {
            score,
            message: message.to_string(),
            reference_path: Some(reference_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table_exact_values() {
        assert_eq!(score_for_diff(-2).0, 120);
        assert_eq!(score_for_diff(-1).0, 120);
        assert_eq!(score_for_diff(0).0, 100);
        assert_eq!(score_for_diff(1).0, 90);
        assert_eq!(score_for_diff(2).0, 80);
        assert_eq!(score_for_diff(3).0, 60);
        assert_eq!(score_for_diff(4).0, 50);
        assert_eq!(score_for_diff(10).0, 50);
    }

    #[test]
    fn test_score_messages_distinguish_outcomes() {
        assert!(score_for_diff(-1).1.contains("beat"));
        assert!(score_for_diff(0).1.contains("Perfect"));
        assert!(score_for_diff(5).1.contains("longer"));
    }
}
