//! Configuration structures.
//!
//! All values are fixed at construction. In particular the similarity
//! threshold is immutable for the process lifetime: changing it would
//! require a full O(n²) edge rebuild, which is explicitly out of scope.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Default similarity threshold. 0.4 gives logical connections for the
/// all-MiniLM-L6-v2 model the original deployment shipped with.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.4;

/// Default maximum path length in steps (edges).
pub const DEFAULT_MAX_STEPS: usize = 6;

/// Default number of catalog words bulk-inserted at startup.
pub const DEFAULT_PRELOAD_COUNT: usize = 200;

/// Default attempts at sampling a game pair from words already in the graph.
pub const DEFAULT_PAIR_GRAPH_ATTEMPTS: usize = 100;

/// Default attempts at sampling a game pair from the full catalog.
pub const DEFAULT_PAIR_CATALOG_ATTEMPTS: usize = 20;

/// Semantic graph configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Minimum cosine similarity for two words to be connected.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,
}

fn default_similarity_threshold() -> f32 {
    DEFAULT_SIMILARITY_THRESHOLD
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl GraphConfig {
    /// Validate the threshold into the cosine range `[-1.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidThreshold` when out of range or not finite.
    pub fn validated(self) -> CoreResult<Self> {
        let t = self.similarity_threshold;
        if !t.is_finite() || !(-1.0..=1.0).contains(&t) {
            return Err(CoreError::InvalidThreshold(t));
        }
        Ok(self)
    }
}

/// Game service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Graph settings.
    #[serde(default)]
    pub graph: GraphConfig,

    /// Maximum path length in steps for search, validation, and hints.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// How many catalog words to bulk-insert during the startup phase.
    #[serde(default = "default_preload_count")]
    pub preload_count: usize,

    /// Bounded attempts at pairing from words already in the graph.
    #[serde(default = "default_pair_graph_attempts")]
    pub pair_graph_attempts: usize,

    /// Bounded attempts at pairing from the full catalog.
    #[serde(default = "default_pair_catalog_attempts")]
    pub pair_catalog_attempts: usize,
}

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

fn default_preload_count() -> usize {
    DEFAULT_PRELOAD_COUNT
}

fn default_pair_graph_attempts() -> usize {
    DEFAULT_PAIR_GRAPH_ATTEMPTS
}

fn default_pair_catalog_attempts() -> usize {
    DEFAULT_PAIR_CATALOG_ATTEMPTS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            graph: GraphConfig::default(),
            max_steps: DEFAULT_MAX_STEPS,
            preload_count: DEFAULT_PRELOAD_COUNT,
            pair_graph_attempts: DEFAULT_PAIR_GRAPH_ATTEMPTS,
            pair_catalog_attempts: DEFAULT_PAIR_CATALOG_ATTEMPTS,
        }
    }
}
