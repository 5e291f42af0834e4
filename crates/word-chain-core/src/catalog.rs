//! Word catalog: the set of valid game words.
//!
//! The catalog can be built from the built-in default list or loaded from a
//! JSON file holding either a bare array of strings or an object of the form
//! `{"words": [...]}`. Words are normalized on the way in, so membership
//! checks are case- and whitespace-insensitive.

use std::collections::BTreeSet;
use std::path::Path;

use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CoreError, CoreResult};
use crate::word::normalize;

/// Built-in default word list: common, semantically rich words across many
/// categories, so the graph has plenty of plausible chains to offer.
const DEFAULT_WORDS: &[&str] = &[
    // Nature & environment
    "ocean", "wave", "beach", "sand", "water", "river", "lake", "mountain", "forest", "tree",
    "flower", "grass", "sun", "moon", "star", "sky", "cloud", "rain", "snow", "wind",
    // Animals
    "bird", "fish", "dog", "cat", "horse", "lion", "tiger", "elephant", "whale", "shark",
    "eagle", "owl", "bear", "wolf", "rabbit", "mouse", "snake", "spider", "butterfly", "bee",
    // Music & sound
    "music", "song", "sound", "voice", "piano", "guitar", "violin", "drum", "note", "melody",
    "rhythm", "harmony", "concert", "orchestra", "singer", "composer", "keyboard", "key",
    // Colors & art
    "red", "blue", "green", "yellow", "orange", "purple", "pink", "black", "white", "gray",
    "brown", "gold", "silver", "color", "paint", "brush", "canvas", "art", "picture",
    // Emotions & mind
    "love", "hate", "joy", "sadness", "fear", "anger", "peace", "war", "hope", "dream",
    "heart", "soul", "mind", "spirit", "emotion", "feeling", "thought", "idea", "concept",
    // Objects & places
    "door", "window", "house", "home", "room", "chair", "table", "book", "paper",
    "pen", "pencil", "computer", "phone", "car", "bike", "road", "bridge", "building",
    // Food
    "apple", "bread", "cake", "chocolate", "coffee", "tea", "fruit", "vegetable", "rice",
    "meat", "soup", "salad", "pizza", "burger", "sandwich", "cheese", "milk",
    // Actions & movement
    "run", "walk", "jump", "fly", "swim", "dance", "sing", "play", "work", "rest",
    "sleep", "wake", "eat", "drink", "read", "write", "speak", "listen", "see", "watch",
    // Time & space
    "time", "day", "night", "morning", "evening", "week", "month", "year", "season",
    "spring", "summer", "fall", "winter", "space", "earth", "planet", "world", "country",
    // Abstract concepts
    "freedom", "justice", "truth", "beauty", "wisdom", "knowledge", "power", "strength",
    "weakness", "courage", "honor", "respect", "trust", "faith", "belief", "doubt",
    // Technology
    "internet", "network", "data", "information", "code", "program", "software",
    "hardware", "screen", "button", "click", "link", "website",
    // People & relationships
    "family", "parent", "child", "mother", "father", "brother", "sister", "friend", "enemy",
    "neighbor", "teacher", "student", "doctor", "patient", "person", "people", "human",
    // Body & health
    "body", "head", "eye", "ear", "nose", "mouth", "hand", "finger", "foot", "leg",
    "arm", "brain", "blood", "bone", "muscle", "skin", "hair", "tooth",
    // Sports & games
    "game", "sport", "ball", "team", "player", "coach", "win", "lose", "score", "goal",
    "race", "competition", "champion", "victory", "defeat", "match", "tournament",
    // Science & learning
    "science", "math", "physics", "chemistry", "biology", "history", "language", "word",
    "letter", "number", "equation", "theory", "experiment", "research", "study", "learn",
    // Physical phenomena
    "fire", "flame", "heat", "light", "dark", "shadow", "bright", "dim", "warm", "cold",
    "hot", "ice", "freeze", "melt", "solid", "liquid", "gas", "energy", "force", "motion",
];

/// On-disk catalog shape: a bare array or `{"words": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<String>),
    Wrapped { words: Vec<String> },
}

/// Static set of valid game words.
///
/// Sorted internally, so [`all`](WordCatalog::all) is deterministic.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: BTreeSet<String>,
}

impl WordCatalog {
    /// Build the catalog from the built-in default word list.
    #[must_use]
    pub fn with_defaults() -> Self {
        let words = DEFAULT_WORDS.iter().map(|w| normalize(w)).collect();
        let catalog = Self { words };
        info!(word_count = catalog.len(), "Initialized default word catalog");
        catalog
    }

    /// Build an empty catalog. Mostly useful for tests that add words
    /// explicitly.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    /// Load the catalog from a JSON file.
    ///
    /// Accepts a bare array of strings or `{"words": [...]}`.
    ///
    /// # Errors
    ///
    /// `CoreError::Io`/`CoreError::Json` on read or parse failure,
    /// `CoreError::Catalog` when the file holds no words.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let parsed: CatalogFile = serde_json::from_str(&contents)?;
        let raw = match parsed {
            CatalogFile::Bare(words) | CatalogFile::Wrapped { words } => words,
        };
        let words: BTreeSet<String> = raw
            .iter()
            .map(|w| normalize(w))
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(CoreError::Catalog(format!(
                "no words in catalog file {}",
                path.display()
            )));
        }
        info!(word_count = words.len(), path = %path.display(), "Loaded word catalog");
        Ok(Self { words })
    }

    /// Load from a file, falling back to the default list on any failure.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Falling back to default word catalog");
                Self::with_defaults()
            }
        }
    }

    /// Save the catalog as `{"words": [...]}`, sorted.
    ///
    /// # Errors
    ///
    /// `CoreError::Io`/`CoreError::Json` on write or serialization failure.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> CoreResult<()> {
        let file = CatalogFile::Wrapped {
            words: self.all(),
        };
        let contents = serde_json::to_string_pretty(&file)?;
        std::fs::write(path.as_ref(), contents)?;
        Ok(())
    }

    /// Add a word. Returns `true` if it was not already present.
    pub fn add(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    /// Membership check, case- and whitespace-insensitive.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    /// All words, sorted.
    #[must_use]
    pub fn all(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// Random sample of up to `count` distinct words.
    #[must_use]
    pub fn sample(&self, count: usize) -> Vec<String> {
        let mut rng = rand::thread_rng();
        self.words
            .iter()
            .cloned()
            .choose_multiple(&mut rng, count.min(self.words.len()))
    }

    /// Number of words in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the catalog holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_contain_common_words() {
        let catalog = WordCatalog::with_defaults();
        assert!(catalog.len() > 150);
        assert!(catalog.contains("ocean"));
        assert!(catalog.contains("cat"));
        assert!(catalog.contains("music"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let catalog = WordCatalog::with_defaults();
        assert!(catalog.contains("Ocean"));
        assert!(catalog.contains("  CAT "));
        assert!(!catalog.contains("zzyzx"));
    }

    #[test]
    fn test_add_normalizes_and_dedupes() {
        let mut catalog = WordCatalog::empty();
        assert!(catalog.add("  Apple "));
        assert!(!catalog.add("apple"));
        assert!(!catalog.add("   "));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("APPLE"));
    }

    #[test]
    fn test_all_is_sorted() {
        let mut catalog = WordCatalog::empty();
        catalog.add("zebra");
        catalog.add("apple");
        catalog.add("mango");
        assert_eq!(catalog.all(), vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_sample_respects_bounds() {
        let catalog = WordCatalog::with_defaults();
        let sample = catalog.sample(10);
        assert_eq!(sample.len(), 10);
        for word in &sample {
            assert!(catalog.contains(word));
        }

        let mut tiny = WordCatalog::empty();
        tiny.add("one");
        tiny.add("two");
        assert_eq!(tiny.sample(10).len(), 2);
    }

    #[test]
    fn test_from_file_bare_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(&path, r#"["Apple", "  banana ", "cherry"]"#).unwrap();

        let catalog = WordCatalog::from_file(&path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("apple"));
        assert!(catalog.contains("banana"));
    }

    #[test]
    fn test_from_file_wrapped_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(&path, r#"{"words": ["alpha", "beta"]}"#).unwrap();

        let catalog = WordCatalog::from_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("beta"));
    }

    #[test]
    fn test_from_file_empty_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(&path, r#"[]"#).unwrap();

        let result = WordCatalog::from_file(&path);
        assert!(matches!(result, Err(CoreError::Catalog(_))));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let catalog = WordCatalog::load_or_default("/nonexistent/words.json");
        assert!(catalog.contains("ocean"));
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");

        let mut catalog = WordCatalog::empty();
        catalog.add("cat");
        catalog.add("dog");
        catalog.save_to_file(&path).unwrap();

        let reloaded = WordCatalog::from_file(&path).unwrap();
        assert_eq!(reloaded.all(), catalog.all());
    }
}
