//! Word lists
//!
//! A bundled dictionary generated at build time, plus loaders for word lists
//! on disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::dictionary::InMemoryDictionary;

/// The bundled dictionary, ready to query
#[must_use]
pub fn bundled() -> InMemoryDictionary {
    InMemoryDictionary::new(loader::words_from_slice(WORDS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_WORD_LEN;

    #[test]
    fn count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn bundled_words_are_valid() {
        for &word in WORDS {
            assert!(
                (1..=MAX_WORD_LEN).contains(&word.len()),
                "Word '{word}' has unsupported length"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn bundled_dictionary_has_common_lengths() {
        let dict = bundled();
        assert!(dict.words(5).len() > 300);
        assert!(!dict.words(6).is_empty());
        assert!(dict.find("salet").is_some());
    }
}
