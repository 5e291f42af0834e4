//! Progressive hints for the player's next move.
//!
//! A hint is always re-routed from the player's *current* position, not the
//! original start, so it stays useful after detours. The hint word is
//! revealed progressively: `hint_level` letters shown uppercase, the rest
//! masked.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use word_chain_core::word::normalize;
use word_chain_graph::{shortest_path, SemanticGraph};

use crate::error::GameResult;

/// Placeholder for a hidden letter in the masked form.
const MASK_PLACEHOLDER: char = '_';

/// A hint for the player's next step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hint {
    /// Suggested next word, absent for terminal or dead-end hints.
    pub word: Option<String>,
    /// Progressive reveal of the suggestion, e.g. `A_____` for "animal" at
    /// level 1.
    pub masked: Option<String>,
    /// Player-facing explanation.
    pub message: String,
    /// Steps left on the algorithm's route from the current position, when
    /// one exists.
    pub steps_remaining: Option<usize>,
    /// Whether the reveal covers the whole word.
    pub fully_revealed: bool,
}

/// Mask a word: the first `letters` characters uppercase, a placeholder per
/// remaining character. Returns the masked form and whether the word is
/// fully revealed.
fn mask_word(word: &str, letters: usize) -> (String, bool) {
    let chars: Vec<char> = word.chars().collect();
    let shown = letters.min(chars.len());
    let mut masked: String = chars[..shown].iter().collect::<String>().to_uppercase();
    masked.extend(std::iter::repeat(MASK_PLACEHOLDER).take(chars.len() - shown));
    (masked, shown == chars.len())
}

/// Suggests the next word from the player's current position.
#[derive(Debug, Clone)]
pub struct HintEngine {
    graph: Arc<SemanticGraph>,
    max_steps: usize,
}

impl HintEngine {
    pub fn new(graph: Arc<SemanticGraph>, max_steps: usize) -> Self {
        Self { graph, max_steps }
    }

    /// Compute a hint from `current` toward `target`.
    ///
    /// The candidate is the first word on the re-routed reference path not
    /// yet used; when every reference word is used, falls back to the
    /// neighbor of `current` most similar to `target`.
    ///
    /// # Errors
    ///
    /// Provider faults only.
    pub async fn hint(
        &self,
        current: &str,
        target: &str,
        used_words: &[String],
        hint_level: usize,
    ) -> GameResult<Hint> {
        let current = normalize(current);
        let target = normalize(target);
        let used: HashSet<String> = used_words.iter().map(|w| normalize(w)).collect();

        if current == target {
            return Ok(Hint {
                word: None,
                masked: None,
                message: "You have already reached the target word.".to_string(),
                steps_remaining: Some(0),
                fully_revealed: false,
            });
        }

        let reference = shortest_path(&self.graph, &current, &target, self.max_steps).await?;
        let steps_remaining = reference.as_ref().map(|path| path.len() - 1);

        // First unused word along the re-routed reference path.
        let mut candidate: Option<String> = reference
            .as_ref()
            .and_then(|path| path.iter().skip(1).find(|w| !used.contains(*w)).cloned());

        // Fallback: the unused neighbor most similar to the target.
        if candidate.is_none() {
            let mut best: Option<(String, f32)> = None;
            for neighbor in self.graph.neighbors(&current).await? {
                if used.contains(&neighbor) || neighbor == current {
                    continue;
                }
                let similarity = self.graph.similarity(&neighbor, &target).await?;
                let better = best
                    .as_ref()
                    .map_or(true, |(_, best_sim)| similarity > *best_sim);
                if better {
                    best = Some((neighbor, similarity));
                }
            }
            candidate = best.map(|(word, _)| word);
        }

        let Some(word) = candidate else {
            debug!(current = %current, target = %target, "No hint candidate available");
            return Ok(Hint {
                word: None,
                masked: None,
                message: "No hint available from here. Try a different word.".to_string(),
                steps_remaining,
                fully_revealed: false,
            });
        };

        let (masked, fully_revealed) = mask_word(&word, hint_level);
        debug!(current = %current, target = %target, hint = %word, hint_level, "Computed hint");
        Ok(Hint {
            word: Some(word),
            masked: Some(masked),
            message: "Try a word matching this pattern.".to_string(),
            steps_remaining,
            fully_revealed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_word_partial_reveal() {
        let (masked, fully_revealed) = mask_word("animal", 1);
        assert_eq!(masked, "A_____");
        assert!(!fully_revealed);
    }

    #[test]
    fn test_mask_word_full_reveal() {
        let (masked, fully_revealed) = mask_word("animal", 6);
        assert_eq!(masked, "ANIMAL");
        assert!(fully_revealed);
    }

    #[test]
    fn test_mask_word_level_beyond_length() {
        let (masked, fully_revealed) = mask_word("cat", 10);
        assert_eq!(masked, "CAT");
        assert!(fully_revealed);
    }

    #[test]
    fn test_mask_word_zero_level() {
        let (masked, fully_revealed) = mask_word("cat", 0);
        assert_eq!(masked, "___");
        assert!(!fully_revealed);
    }
}
