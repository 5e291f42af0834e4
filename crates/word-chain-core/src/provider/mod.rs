//! Embedding provider trait for word-to-vector conversion.
//!
//! The embedding model itself is an external collaborator: this trait is the
//! seam the semantic graph talks through. Implementations must be
//! deterministic per word for a fixed model id and must return unit-norm
//! vectors of a fixed dimension.
//!
//! Provider failures are fatal for the enclosing operation. Errors propagate
//! immediately; there are no fallbacks to fake embeddings and no retries.

use async_trait::async_trait;

use crate::error::CoreResult;

mod stub;

pub use stub::{FixedEmbeddingProvider, StubEmbeddingProvider};

/// Trait for embedding generation.
///
/// Async because the real model call is the only slow dependency in the
/// system; batch encoding exists specifically to amortize that latency over
/// many words per round trip. All implementations must be thread-safe
/// (`Send + Sync`) so a single provider can back the shared graph.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate the embedding for a single word.
    ///
    /// The returned vector has [`dimensions`](Self::dimensions) entries and
    /// unit L2 norm.
    ///
    /// # Errors
    ///
    /// `CoreError::Embedding` if generation fails or the word is empty.
    async fn encode(&self, word: &str) -> CoreResult<Vec<f32>>;

    /// Generate embeddings for a batch of words in one round trip.
    ///
    /// Returns one vector per input word, in input order.
    ///
    /// # Errors
    ///
    /// `CoreError::Embedding` if any generation fails.
    async fn encode_batch(&self, words: &[String]) -> CoreResult<Vec<Vec<f32>>>;

    /// Output dimension of the embeddings.
    fn dimensions(&self) -> usize;

    /// Model identifier, stable across calls. Embeddings are deterministic
    /// per word for a fixed model id.
    fn model_id(&self) -> &str;
}
