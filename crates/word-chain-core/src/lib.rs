//! Word-Chain Core Library
//!
//! Provides the domain types and external-collaborator seams for the
//! word-chain game: players move from a start word to a target word through
//! a chain of semantically related words.
//!
//! # Architecture
//!
//! This crate defines:
//! - Word normalization (`word`)
//! - Dense vector similarity primitives (`similarity`)
//! - The `EmbeddingProvider` trait plus deterministic test providers
//!   (`provider`)
//! - The `WordCatalog` of valid game words (`catalog`)
//! - Configuration structures (`config`)
//! - Error types and result aliases (`error`)
//!
//! The semantic graph and game logic built on top of these live in
//! `word-chain-graph` and `word-chain-game`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod provider;
pub mod similarity;
pub mod word;

// Re-exports for convenience
pub use catalog::WordCatalog;
pub use config::{GameConfig, GraphConfig};
pub use error::{CoreError, CoreResult};
pub use provider::{EmbeddingProvider, FixedEmbeddingProvider, StubEmbeddingProvider};
pub use word::normalize;
