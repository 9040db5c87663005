//! builtin.rs - The embedded default dictionary.
//!
//! A small JSON dictionary compiled into the binary, parsed once on
//! first use and never mutated afterwards. It is a starting point, not
//! a serious moderation list; real deployments load their own.
//!
//! License: MIT OR Apache-2.0

use log::error;
use once_cell::sync::Lazy;

use wordshield_automata::Entry;

static DEFAULT_ENTRIES: Lazy<Vec<Entry>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../data/default_words.json")).unwrap_or_else(|e| {
        // The embedded dictionary is validated by test; reaching this
        // means a broken build artifact.
        error!("embedded default dictionary failed to parse: {e}");
        Vec::new()
    })
});

/// The built-in default dictionary.
pub fn default_entries() -> &'static [Entry] {
    &DEFAULT_ENTRIES
}
