//! Word normalization.
//!
//! A word's identity throughout the system is its normalized form:
//! lowercased and trimmed. Every boundary that accepts player or catalog
//! input funnels through [`normalize`] so that `"Cat "` and `"cat"` name
//! the same graph node.

/// Normalize a word to its canonical identity: trimmed and lowercased.
#[inline]
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Cat "), "cat");
        assert_eq!(normalize("OCEAN"), "ocean");
        assert_eq!(normalize("dog"), "dog");
    }

    #[test]
    fn test_normalize_empty_and_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(" Melody ");
        assert_eq!(normalize(&once), once);
    }
}
