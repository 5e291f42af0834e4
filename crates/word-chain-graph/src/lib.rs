//! Word-Chain Semantic Graph
//!
//! An incremental undirected graph over words. Edges are implicit: two
//! words are connected iff the cosine similarity of their embeddings meets
//! a fixed threshold. Edges are derived once, at insertion time, and the
//! graph only grows for the process lifetime.
//!
//! # Modules
//!
//! - [`graph`]: the [`SemanticGraph`] itself (embedding store, adjacency,
//!   similarity cache)
//! - [`search`]: bounded breadth-first shortest-path search
//! - [`error`]: error types

pub mod error;
pub mod graph;
pub mod search;

pub use error::{GraphError, GraphResult};
pub use graph::{GraphStats, SemanticGraph};
pub use search::shortest_path;
