//! The composed game service.
//!
//! Owns the semantic graph, the word catalog, and the scoring/hint engines,
//! and exposes the outward contract a serving layer calls: new-game pairing,
//! path lookup, validation, scoring, hints, similarity, stats.
//!
//! # Startup
//!
//! Construct with [`GameService::new`], then call
//! [`preload`](GameService::preload) once before serving: it bulk-inserts a
//! random catalog sample through one batch provider round trip, trading
//! startup latency for pre-warmed adjacency on the first request.

use std::sync::Arc;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use word_chain_core::word::normalize;
use word_chain_core::{EmbeddingProvider, GameConfig, WordCatalog};
use word_chain_graph::{shortest_path, GraphStats, SemanticGraph};

use crate::error::{GameError, GameResult};
use crate::hint::{Hint, HintEngine};
use crate::score::{ScoreResult, ScoringEngine};
use crate::validate::{PathError, PathValidator, MAX_PATH_STEPS, MIN_PATH_STEPS};

/// Pairs that reliably have a mid-length path under the production model.
/// Used as the third pairing stage when random sampling keeps missing.
const KNOWN_GOOD_PAIRS: &[(&str, &str)] = &[
    ("cat", "dog"),
    ("ocean", "mountain"),
    ("music", "art"),
    ("fire", "ice"),
    ("sun", "moon"),
    ("coffee", "cake"),
];

/// A start/target pairing for a new game round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePair {
    pub start: String,
    pub target: String,
    /// Steps of the path found while pairing, absent in degraded mode.
    pub path_steps: Option<usize>,
    /// Set when the last-resort stage returned a pair with no path
    /// guarantee. A degraded pair is logged, not an error.
    pub degraded: bool,
}

/// Counter snapshot for the outward stats contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStats {
    pub graph: GraphStats,
    pub catalog_words: usize,
}

/// Main game service integrating catalog, graph, scoring, and hints.
pub struct GameService {
    catalog: Arc<WordCatalog>,
    graph: Arc<SemanticGraph>,
    validator: PathValidator,
    scoring: ScoringEngine,
    hints: HintEngine,
    config: GameConfig,
}

impl GameService {
    /// Construct the service from its injected collaborators.
    ///
    /// # Errors
    ///
    /// `GameError::EmptyCatalog` when the catalog holds fewer than two
    /// words; config validation errors pass through.
    pub fn new(
        provider: Arc<dyn EmbeddingProvider>,
        catalog: WordCatalog,
        config: GameConfig,
    ) -> GameResult<Self> {
        if catalog.len() < 2 {
            return Err(GameError::EmptyCatalog);
        }
        let catalog = Arc::new(catalog);
        let graph = Arc::new(SemanticGraph::new(provider, config.graph.clone())?);
        let validator = PathValidator::new(Arc::clone(&graph), Arc::clone(&catalog));
        let scoring = ScoringEngine::new(Arc::clone(&graph), validator.clone(), config.max_steps);
        let hints = HintEngine::new(Arc::clone(&graph), config.max_steps);
        info!(
            catalog_words = catalog.len(),
            similarity_threshold = config.graph.similarity_threshold,
            "Initialized game service"
        );
        Ok(Self {
            catalog,
            graph,
            validator,
            scoring,
            hints,
            config,
        })
    }

    /// Startup phase: bulk-insert a random catalog sample to pre-warm
    /// adjacency. Returns the number of words now in the graph.
    ///
    /// # Errors
    ///
    /// Provider faults propagate fatally; startup should abort.
    pub async fn preload(&self) -> GameResult<usize> {
        let sample = self.catalog.sample(self.config.preload_count);
        info!(count = sample.len(), "Preloading words into semantic graph");
        self.graph.add_words(&sample).await?;
        let loaded = self.graph.word_count();
        info!(loaded, "Preload complete");
        Ok(loaded)
    }

    /// Sample a start/target pair with a 2-6 step path between them.
    ///
    /// Policy, in order: (a) bounded sampling from words already in the
    /// graph (adjacency precomputed), (b) bounded sampling from the full
    /// catalog (forces on-demand embedding work), (c) a fixed list of
    /// known-good pairs, (d) last resort: any two distinct catalog words
    /// with no path guarantee, flagged `degraded` and logged.
    ///
    /// # Errors
    ///
    /// Provider faults propagate; a pathless pair is not an error.
    pub async fn new_game_pair(&self) -> GameResult<GamePair> {
        // (a) words already in the graph: path lookups are cheap.
        let graph_words = self.graph.all_words();
        if graph_words.len() >= 2 {
            if let Some(pair) = self
                .sample_pair(&graph_words, self.config.pair_graph_attempts)
                .await?
            {
                return Ok(pair);
            }
        }

        // (b) the full catalog: may embed words on demand.
        let catalog_words = self.catalog.all();
        if let Some(pair) = self
            .sample_pair(&catalog_words, self.config.pair_catalog_attempts)
            .await?
        {
            debug!("Game pair found from full catalog");
            return Ok(pair);
        }

        // (c) known-good pairs.
        for (start, target) in KNOWN_GOOD_PAIRS {
            if !self.catalog.contains(start) || !self.catalog.contains(target) {
                continue;
            }
            if let Some(path) =
                shortest_path(&self.graph, start, target, self.config.max_steps).await?
            {
                let steps = path.len() - 1;
                if (MIN_PATH_STEPS..=MAX_PATH_STEPS).contains(&steps) {
                    debug!(start = *start, target = *target, steps, "Game pair taken from known-good list");
                    return Ok(GamePair {
                        start: (*start).to_string(),
                        target: (*target).to_string(),
                        path_steps: Some(steps),
                        degraded: false,
                    });
                }
            }
        }

        // (d) degraded: any two distinct words, no path guarantee.
        let pair = {
            let mut rng = rand::thread_rng();
            let mut sample = catalog_words
                .choose_multiple(&mut rng, 2)
                .cloned()
                .collect::<Vec<_>>();
            sample.pop().zip(sample.pop())
        };
        let Some((target, start)) = pair else {
            return Err(GameError::EmptyCatalog);
        };
        warn!(
            start = %start,
            target = %target,
            "Returning degraded game pair with no path guarantee"
        );
        Ok(GamePair {
            start,
            target,
            path_steps: None,
            degraded: true,
        })
    }

    /// Bounded random pairing attempts over a word pool, keeping the first
    /// pair whose path length lands in the valid 2-6 step window.
    async fn sample_pair(
        &self,
        pool: &[String],
        attempts: usize,
    ) -> GameResult<Option<GamePair>> {
        if pool.len() < 2 {
            return Ok(None);
        }
        for _ in 0..attempts {
            // Scoped so the RNG never lives across an await point.
            let (start, target) = {
                let mut rng = rand::thread_rng();
                let mut picks = pool.choose_multiple(&mut rng, 2);
                match (picks.next(), picks.next()) {
                    (Some(a), Some(b)) => (a.clone(), b.clone()),
                    _ => return Ok(None),
                }
            };
            if let Some(path) =
                shortest_path(&self.graph, &start, &target, self.config.max_steps).await?
            {
                let steps = path.len() - 1;
                if (MIN_PATH_STEPS..=MAX_PATH_STEPS).contains(&steps) {
                    return Ok(Some(GamePair {
                        start,
                        target,
                        path_steps: Some(steps),
                        degraded: false,
                    }));
                }
            }
        }
        Ok(None)
    }

    /// The algorithm's shortest path, or `None` when either word is missing
    /// from the catalog or no path exists within `max_steps`.
    ///
    /// # Errors
    ///
    /// Provider faults only.
    pub async fn find_path(
        &self,
        start: &str,
        target: &str,
        max_steps: usize,
    ) -> GameResult<Option<Vec<String>>> {
        if !self.catalog.contains(start) {
            warn!(word = %normalize(start), "Path start word not in catalog");
            return Ok(None);
        }
        if !self.catalog.contains(target) {
            warn!(word = %normalize(target), "Path target word not in catalog");
            return Ok(None);
        }
        Ok(shortest_path(&self.graph, start, target, max_steps).await?)
    }

    /// Validate a player path. The inner result carries the player-facing
    /// reason on failure.
    ///
    /// # Errors
    ///
    /// Provider faults only.
    pub async fn validate_path(&self, path: &[String]) -> GameResult<Result<(), PathError>> {
        self.validator.validate(path).await
    }

    /// Score a player path for the assigned round. See [`ScoringEngine`].
    ///
    /// # Errors
    ///
    /// Provider faults only.
    pub async fn score_path(
        &self,
        player_path: &[String],
        start: &str,
        target: &str,
    ) -> GameResult<ScoreResult> {
        self.scoring.score(player_path, start, target).await
    }

    /// Hint from the player's current position, or `None` when the current
    /// or target word is missing from the catalog.
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
    ) -> GameResult<Option<Hint>> {
        if !self.catalog.contains(current) || !self.catalog.contains(target) {
            warn!(
                current = %normalize(current),
                target = %normalize(target),
                "Hint requested for words not in catalog"
            );
            return Ok(None);
        }
        Ok(Some(
            self.hints.hint(current, target, used_words, hint_level).await?,
        ))
    }

    /// Cosine similarity between two words, auto-adding them to the graph.
    ///
    /// # Errors
    ///
    /// Provider faults only.
    pub async fn similarity(&self, a: &str, b: &str) -> GameResult<f32> {
        Ok(self.graph.similarity(a, b).await?)
    }

    /// Counter snapshot for the outward stats contract.
    #[must_use]
    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            graph: self.graph.stats(),
            catalog_words: self.catalog.len(),
        }
    }
}

impl std::fmt::Debug for GameService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameService")
            .field("catalog_words", &self.catalog.len())
            .field("graph", &self.graph)
            .field("max_steps", &self.config.max_steps)
            .finish()
    }
}
