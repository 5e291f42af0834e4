//! Incremental semantic graph over words.
//!
//! # Model
//!
//! Words are nodes. Edges are implicit and undirected: an edge between `a`
//! and `b` exists iff `cosine(emb(a), emb(b)) >= threshold`. Connections are
//! computed when a word is inserted, against every word known at that time,
//! and never revisited. Embeddings are immutable once computed and cached
//! for the process lifetime, as is the memoized pair-similarity cache; both
//! are acceptable to grow unbounded for a bounded catalog vocabulary.
//!
//! # Concurrency
//!
//! One `RwLock` guards the interior state: mutations (`add_word`,
//! `add_words`, cache population) take the write lock, pure queries take
//! read locks. The embedding request is awaited while no lock is held; after
//! re-acquiring the write lock the mutation double-checks for words inserted
//! concurrently and keeps the first embedding (providers are deterministic
//! per word, so either copy is identical).
//!
//! The similarity threshold is fixed at construction. Changing it at runtime
//! would require recomputing all O(n²) pairs and is not supported.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use word_chain_core::word::normalize;
use word_chain_core::{EmbeddingProvider, GraphConfig};

use crate::error::{GraphError, GraphResult};

/// Snapshot of graph counters for the outward `stats()` contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    /// Words currently in the graph.
    pub word_count: usize,
    /// Undirected edges currently in the graph.
    pub edge_count: usize,
    /// Fixed similarity threshold.
    pub similarity_threshold: f32,
    /// Embedding dimension reported by the provider.
    pub embedding_dimensions: usize,
    /// Entries in the memoized pair-similarity cache.
    pub cached_pairs: usize,
}

/// Interior state, guarded by one `RwLock` on [`SemanticGraph`].
#[derive(Debug, Default)]
struct GraphState {
    /// word -> unit-norm embedding, computed once.
    embeddings: HashMap<String, Arc<Vec<f32>>>,
    /// word -> sorted neighbor set. Sorted iteration fixes BFS tie-breaks.
    adjacency: HashMap<String, BTreeSet<String>>,
    /// Memoized cosine per unordered pair, keyed `(min, max)`.
    pair_cache: HashMap<(String, String), f32>,
    /// Undirected edge count.
    edge_count: usize,
}

/// Incremental undirected graph over words, with implicit similarity edges.
pub struct SemanticGraph {
    provider: Arc<dyn EmbeddingProvider>,
    threshold: f32,
    state: RwLock<GraphState>,
}

/// Dot product without dimension checking. All stored vectors are validated
/// against the provider dimension at insertion.
#[inline]
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Order-independent cache key for a word pair.
#[inline]
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl SemanticGraph {
    /// Create an empty graph over the given provider.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidThreshold` (via config validation) when the
    /// configured threshold is outside `[-1.0, 1.0]`.
    pub fn new(provider: Arc<dyn EmbeddingProvider>, config: GraphConfig) -> GraphResult<Self> {
        let config = config.validated()?;
        Ok(Self {
            provider,
            threshold: config.similarity_threshold,
            state: RwLock::new(GraphState::default()),
        })
    }

    /// The fixed similarity threshold.
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Embedding dimension reported by the provider.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    /// Add a word to the graph, generating its embedding if unseen.
    ///
    /// Known words return their cached embedding untouched. A new word is
    /// encoded, stored, and connected to every currently-known word whose
    /// cosine similarity meets the threshold: O(|known| · D).
    ///
    /// # Errors
    ///
    /// Provider failures propagate fatally; no retry.
    pub async fn add_word(&self, word: &str) -> GraphResult<Arc<Vec<f32>>> {
        let word = normalize(word);
        if let Some(embedding) = self.state.read().embeddings.get(&word) {
            return Ok(Arc::clone(embedding));
        }

        // Slow path: encode with no lock held.
        let vector = self.provider.encode(&word).await?;
        self.check_dimensions(&word, &vector)?;
        let embedding = Arc::new(vector);

        let mut state = self.state.write();
        // Double-check after acquiring the write lock: a concurrent insert
        // of the same word wins and its embedding is identical.
        if let Some(existing) = state.embeddings.get(&word) {
            return Ok(Arc::clone(existing));
        }

        let neighbors: Vec<String> = state
            .embeddings
            .iter()
            .filter(|(_, other)| dot(&embedding, other) >= self.threshold)
            .map(|(other, _)| other.clone())
            .collect();

        state.embeddings.insert(word.clone(), Arc::clone(&embedding));
        for neighbor in &neighbors {
            Self::add_edge(&mut state, &word, neighbor);
        }

        debug!(
            word = %word,
            new_edges = neighbors.len(),
            word_count = state.embeddings.len(),
            "Added word to semantic graph"
        );
        Ok(embedding)
    }

    /// Add a batch of words, requesting all new embeddings in one provider
    /// round trip.
    ///
    /// Functionally equivalent to repeated [`add_word`](Self::add_word) in
    /// any batch order; the batch exists to amortize provider latency and to
    /// compute the new×existing and new×new similarity blocks in one pass.
    /// Returns the embedding for every requested word, pre-existing words
    /// included.
    ///
    /// # Errors
    ///
    /// Provider failures propagate fatally; no retry.
    pub async fn add_words(
        &self,
        words: &[String],
    ) -> GraphResult<HashMap<String, Arc<Vec<f32>>>> {
        // Normalize and dedupe, preserving first-seen order.
        let mut requested: Vec<String> = Vec::with_capacity(words.len());
        for word in words {
            let word = normalize(word);
            if !word.is_empty() && !requested.contains(&word) {
                requested.push(word);
            }
        }

        let to_add: Vec<String> = {
            let state = self.state.read();
            requested
                .iter()
                .filter(|w| !state.embeddings.contains_key(*w))
                .cloned()
                .collect()
        };

        if !to_add.is_empty() {
            let vectors = self.provider.encode_batch(&to_add).await?;
            if vectors.len() != to_add.len() {
                return Err(GraphError::BatchSizeMismatch {
                    expected: to_add.len(),
                    actual: vectors.len(),
                });
            }
            for (word, vector) in to_add.iter().zip(vectors.iter()) {
                self.check_dimensions(word, vector)?;
            }

            let mut state = self.state.write();
            // Double-check: drop any word a concurrent caller inserted first.
            let fresh: Vec<(String, Arc<Vec<f32>>)> = to_add
                .into_iter()
                .zip(vectors)
                .filter(|(word, _)| !state.embeddings.contains_key(word))
                .map(|(word, vector)| (word, Arc::new(vector)))
                .collect();

            // new × existing similarity block
            let mut edges: Vec<(String, String)> = Vec::new();
            for (word, embedding) in &fresh {
                for (existing, existing_embedding) in &state.embeddings {
                    if dot(embedding, existing_embedding) >= self.threshold {
                        edges.push((word.clone(), existing.clone()));
                    }
                }
            }
            // new × new similarity block
            for i in 0..fresh.len() {
                for j in (i + 1)..fresh.len() {
                    if dot(&fresh[i].1, &fresh[j].1) >= self.threshold {
                        edges.push((fresh[i].0.clone(), fresh[j].0.clone()));
                    }
                }
            }

            let inserted = fresh.len();
            for (word, embedding) in fresh {
                state.embeddings.insert(word, embedding);
            }
            let new_edges = edges.len();
            for (a, b) in edges {
                Self::add_edge(&mut state, &a, &b);
            }

            debug!(
                inserted,
                new_edges,
                word_count = state.embeddings.len(),
                "Batch-added words to semantic graph"
            );
        }

        let state = self.state.read();
        Ok(requested
            .into_iter()
            .filter_map(|word| {
                let embedding = state.embeddings.get(&word).map(Arc::clone)?;
                Some((word, embedding))
            })
            .collect())
    }

    /// Cosine similarity between two words, auto-adding either if unseen.
    ///
    /// Results are memoized per unordered pair. The self pair is always
    /// exactly `1.0` (unit-norm contract) and is answered without a cache
    /// entry.
    ///
    /// # Errors
    ///
    /// Provider failures propagate fatally when a word must be added.
    pub async fn similarity(&self, a: &str, b: &str) -> GraphResult<f32> {
        let a = normalize(a);
        let b = normalize(b);
        if a == b {
            self.add_word(&a).await?;
            return Ok(1.0);
        }

        let key = pair_key(&a, &b);
        if let Some(cached) = self.state.read().pair_cache.get(&key) {
            return Ok(*cached);
        }

        let embedding_a = self.add_word(&a).await?;
        let embedding_b = self.add_word(&b).await?;
        let value = dot(&embedding_a, &embedding_b).clamp(-1.0, 1.0);

        self.state.write().pair_cache.insert(key, value);
        debug!(a = %a, b = %b, similarity = value, "Cached pair similarity");
        Ok(value)
    }

    /// Whether two words are semantically connected: similarity meets the
    /// threshold. Auto-adds unseen words.
    pub async fn connected(&self, a: &str, b: &str) -> GraphResult<bool> {
        Ok(self.similarity(a, b).await? >= self.threshold)
    }

    /// Current neighbor set of a word, auto-adding it if unseen.
    ///
    /// May be empty immediately after insertion if no other known word
    /// qualifies. The set is sorted, fixing iteration order for BFS
    /// tie-breaks and hint scans.
    pub async fn neighbors(&self, word: &str) -> GraphResult<BTreeSet<String>> {
        let word = normalize(word);
        self.add_word(&word).await?;
        Ok(self
            .state
            .read()
            .adjacency
            .get(&word)
            .cloned()
            .unwrap_or_default())
    }

    /// Membership check. Never auto-adds.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.state.read().embeddings.contains_key(&normalize(word))
    }

    /// All words currently in the graph, sorted.
    #[must_use]
    pub fn all_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.state.read().embeddings.keys().cloned().collect();
        words.sort();
        words
    }

    /// Number of words in the graph.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.state.read().embeddings.len()
    }

    /// Number of undirected edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.state.read().edge_count
    }

    /// Counter snapshot for the outward stats contract.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let state = self.state.read();
        GraphStats {
            word_count: state.embeddings.len(),
            edge_count: state.edge_count,
            similarity_threshold: self.threshold,
            embedding_dimensions: self.provider.dimensions(),
            cached_pairs: state.pair_cache.len(),
        }
    }

    fn check_dimensions(&self, word: &str, vector: &[f32]) -> GraphResult<()> {
        let expected = self.provider.dimensions();
        if vector.len() != expected {
            return Err(GraphError::WrongDimensions {
                word: word.to_string(),
                expected,
                actual: vector.len(),
            });
        }
        Ok(())
    }

    /// Insert a symmetric edge. Counts each undirected edge once.
    fn add_edge(state: &mut GraphState, a: &str, b: &str) {
        let inserted = state
            .adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        state
            .adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
        if inserted {
            state.edge_count += 1;
        }
    }
}

impl std::fmt::Debug for SemanticGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("SemanticGraph")
            .field("threshold", &self.threshold)
            .field("word_count", &state.embeddings.len())
            .field("edge_count", &state.edge_count)
            .finish()
    }
}
