//! filters.rs - Post-match suppression.
//!
//! A [`MatchFilter`] decides whether a structurally matched word should
//! be dropped from the report. Filters never change what an automaton
//! can match; they only shape what gets reported, which is why the
//! [`Whitelist`] can mutate freely without any rebuild.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// A rule that suppresses matched words from reports.
pub trait MatchFilter: Send + Sync {
    /// Returns true if the matched word should not be reported.
    fn should_filter(&self, word: &str) -> bool;

    /// The name of the filter, for logging.
    fn name(&self) -> &str;
}

/// A case-folded set of exempt words.
///
/// Cloning is cheap and shares the underlying set, so callers can keep
/// a handle for dynamic add/remove/clear after installing the
/// whitelist into a detector.
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    words: Arc<RwLock<HashSet<String>>>,
}

impl Whitelist {
    /// Creates an empty whitelist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a whitelist pre-populated with `words`.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let whitelist = Self::new();
        for word in words {
            whitelist.add(word.as_ref());
        }
        whitelist
    }

    /// Adds a word. Comparison is case-folded.
    pub fn add(&self, word: &str) {
        self.words.write().unwrap().insert(word.to_lowercase());
    }

    /// Removes a word.
    pub fn remove(&self, word: &str) {
        self.words.write().unwrap().remove(&word.to_lowercase());
    }

    /// Removes every word.
    pub fn clear(&self) {
        self.words.write().unwrap().clear();
    }

    /// Returns true if the word is whitelisted.
    pub fn contains(&self, word: &str) -> bool {
        self.words.read().unwrap().contains(&word.to_lowercase())
    }

    /// Number of whitelisted words.
    pub fn len(&self) -> usize {
        self.words.read().unwrap().len()
    }

    /// True when no word is whitelisted.
    pub fn is_empty(&self) -> bool {
        self.words.read().unwrap().is_empty()
    }
}

impl MatchFilter for Whitelist {
    fn should_filter(&self, word: &str) -> bool {
        self.contains(word)
    }

    fn name(&self) -> &str {
        "whitelist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_folded() {
        let whitelist = Whitelist::with_words(["Analysis"]);
        assert!(whitelist.contains("analysis"));
        assert!(whitelist.contains("ANALYSIS"));
        assert!(!whitelist.contains("analyst"));
    }

    #[test]
    fn add_remove_clear() {
        let whitelist = Whitelist::new();
        assert!(whitelist.is_empty());
        whitelist.add("ok");
        whitelist.add("fine");
        assert_eq!(whitelist.len(), 2);
        whitelist.remove("OK");
        assert!(!whitelist.contains("ok"));
        whitelist.clear();
        assert!(whitelist.is_empty());
    }

    #[test]
    fn clones_share_the_same_set() {
        let a = Whitelist::new();
        let b = a.clone();
        b.add("shared");
        assert!(a.should_filter("shared"));
    }
}
