//! Deterministic embedding providers for tests and development.
//!
//! [`StubEmbeddingProvider`] generates reproducible unit-norm vectors from a
//! hash-seeded RNG, so the same word always maps to the same vector and
//! distinct words land nearly orthogonal in high dimensions. No model files,
//! no network.
//!
//! [`FixedEmbeddingProvider`] returns prescribed vectors per word, for tests
//! that need exact cosine values between specific words.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use rand::{Rng, SeedableRng};

use crate::error::{CoreError, CoreResult};
use crate::similarity::normalize_vec;
use crate::word::normalize;

use super::EmbeddingProvider;

/// Default stub dimension, matching the all-MiniLM-L6-v2 shape the original
/// deployment used.
pub const DEFAULT_STUB_DIMENSIONS: usize = 384;

/// Deterministic, hash-seeded embedding provider.
///
/// Same word (after normalization) always produces the same vector;
/// different words produce uncorrelated vectors.
#[derive(Debug, Clone)]
pub struct StubEmbeddingProvider {
    dimensions: usize,
}

impl StubEmbeddingProvider {
    /// Create a stub provider with the default dimension.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dimensions: DEFAULT_STUB_DIMENSIONS,
        }
    }

    /// Create a stub provider with a specific dimension.
    #[must_use]
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn seed_for(word: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        word.hash(&mut hasher);
        hasher.finish()
    }

    fn vector_for(&self, word: &str) -> CoreResult<Vec<f32>> {
        let word = normalize(word);
        if word.is_empty() {
            return Err(CoreError::Embedding("empty input word".into()));
        }
        let mut rng = rand::rngs::StdRng::seed_from_u64(Self::seed_for(&word));
        let mut vector: Vec<f32> = (0..self.dimensions)
            .map(|_| rng.gen_range(-1.0..1.0))
            .collect();
        normalize_vec(&mut vector);
        Ok(vector)
    }
}

impl Default for StubEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbeddingProvider {
    async fn encode(&self, word: &str) -> CoreResult<Vec<f32>> {
        self.vector_for(word)
    }

    async fn encode_batch(&self, words: &[String]) -> CoreResult<Vec<Vec<f32>>> {
        words.iter().map(|w| self.vector_for(w)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model_id(&self) -> &str {
        "stub-hash-v1"
    }
}

/// Test provider returning prescribed vectors per word.
///
/// Unknown words are an error, which doubles as a way to exercise fatal
/// provider-failure propagation in tests.
#[derive(Debug, Clone)]
pub struct FixedEmbeddingProvider {
    vectors: HashMap<String, Vec<f32>>,
    dimensions: usize,
}

impl FixedEmbeddingProvider {
    /// Build a provider from `(word, vector)` fixtures.
    ///
    /// Vectors are stored as given; supply unit-norm fixtures when tests
    /// assert exact cosine values. Dimension is taken from the first
    /// fixture.
    #[must_use]
    pub fn new<I, S>(fixtures: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: AsRef<str>,
    {
        let vectors: HashMap<String, Vec<f32>> = fixtures
            .into_iter()
            .map(|(word, vector)| (normalize(word.as_ref()), vector))
            .collect();
        let dimensions = vectors.values().next().map_or(0, Vec::len);
        Self {
            vectors,
            dimensions,
        }
    }

    fn vector_for(&self, word: &str) -> CoreResult<Vec<f32>> {
        let word = normalize(word);
        self.vectors
            .get(&word)
            .cloned()
            .ok_or_else(|| CoreError::Embedding(format!("no fixture vector for '{word}'")))
    }
}

#[async_trait]
impl EmbeddingProvider for FixedEmbeddingProvider {
    async fn encode(&self, word: &str) -> CoreResult<Vec<f32>> {
        self.vector_for(word)
    }

    async fn encode_batch(&self, words: &[String]) -> CoreResult<Vec<Vec<f32>>> {
        words.iter().map(|w| self.vector_for(w)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model_id(&self) -> &str {
        "fixed-fixture-v1"
    }
}
