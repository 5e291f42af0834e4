//! Word-Chain Game Logic
//!
//! Composes the semantic graph into the outward game contract: new-game
//! pairing, path lookup, player-path validation, scoring against the
//! algorithm's reference path, and progressive hints.
//!
//! The [`GameService`] is explicitly constructed and dependency-injected;
//! startup work (catalog load, preload) happens in a documented phase, not
//! behind a lazily-initialized singleton.

pub mod error;
pub mod hint;
pub mod score;
pub mod service;
pub mod validate;

pub use error::{GameError, GameResult};
pub use hint::{Hint, HintEngine};
pub use score::{ScoreResult, ScoringEngine};
pub use service::{GamePair, GameService, ServiceStats};
pub use validate::{PathError, PathValidator, MAX_PATH_STEPS, MIN_PATH_STEPS};
