//! memory.rs - In-memory word lists as a dictionary source.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;

use wordshield_automata::Entry;

use super::DictSource;

/// Loads entries from an in-memory list of words, each with the
/// default `other`/`medium` metadata. Empty words are skipped.
#[derive(Debug, Clone)]
pub struct MemorySource {
    words: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl DictSource for MemorySource {
    fn load(&self) -> Result<Vec<Entry>> {
        Ok(self
            .words
            .iter()
            .filter(|w| !w.is_empty())
            .map(Entry::new)
            .collect())
    }
}
