//! matcher.rs - The shared contract both automatons satisfy.
//!
//! [`Matcher`] is the capability contract: build from a dictionary,
//! find every match, mask matched spans, and an early-exit cleanliness
//! check. [`Automaton`] is the closed set of implementations and the
//! single dispatch point; which kind gets built is gated by dictionary
//! size unless the caller overrides it.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dict::{Category, Entry, Level};
use crate::fail_link::FailLinkAutomaton;
use crate::trie::TrieAutomaton;

/// Below this entry count the plain trie is cheaper overall; at or
/// above it the failure-link automaton's O(n+m) scan wins.
pub const AUTO_SELECT_THRESHOLD: usize = 5000;

/// The only structural failure a build can produce.
///
/// An empty entry *sequence* is fine and yields an automaton that
/// matches nothing; an entry with empty *text* is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("dictionary entry {index} has empty text")]
    EmptyEntry { index: usize },
}

/// Which automaton kind to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Select by entry count ([`AUTO_SELECT_THRESHOLD`]).
    #[default]
    Auto,
    /// Force the plain-trie automaton.
    Trie,
    /// Force the failure-link automaton.
    FailLink,
}

/// One match reported by an automaton.
///
/// Offsets are code-point indices into the scanned text, half-open,
/// with `end > start`. They are never byte offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanMatch {
    /// The dictionary text of the matched entry.
    pub word: String,
    /// Code-point index of the first matched character.
    pub start: usize,
    /// Code-point index one past the last matched character.
    pub end: usize,
    /// Category of the matched entry.
    pub category: Category,
    /// Severity level of the matched entry.
    pub level: Level,
}

/// The operation set every automaton kind provides.
///
/// All scanning operations are total over any input, including empty
/// text, and never fail. After `build` returns, the structure is
/// immutable and safe to share across threads.
pub trait Matcher {
    /// Builds the automaton from the given entries, taking ownership.
    fn build(entries: Vec<Entry>, case_sensitive: bool) -> Result<Self, BuildError>
    where
        Self: Sized;

    /// Finds all matches in scan-discovery order, including
    /// overlapping and nested ones.
    fn find(&self, text: &str) -> Vec<ScanMatch>;

    /// Substitutes every code point covered by any match with `repl`.
    /// The output always has the same code-point length as the input.
    fn replace(&self, text: &str, repl: char) -> String;

    /// Returns true iff `find` would report nothing. Implemented as an
    /// independent scan that exits on the first terminal reached.
    fn is_clean(&self, text: &str) -> bool;
}

/// The closed set of automaton kinds behind one dispatch point.
#[derive(Debug)]
pub enum Automaton {
    Trie(TrieAutomaton),
    FailLink(FailLinkAutomaton),
}

impl Automaton {
    /// Builds an automaton, honoring an explicit kind override or
    /// size-gating the choice for [`AlgorithmKind::Auto`].
    pub fn build_with_kind(
        entries: Vec<Entry>,
        kind: AlgorithmKind,
        case_sensitive: bool,
    ) -> Result<Self, BuildError> {
        let use_trie = match kind {
            AlgorithmKind::Trie => true,
            AlgorithmKind::FailLink => false,
            AlgorithmKind::Auto => entries.len() < AUTO_SELECT_THRESHOLD,
        };
        if use_trie {
            Ok(Automaton::Trie(TrieAutomaton::build(
                entries,
                case_sensitive,
            )?))
        } else {
            Ok(Automaton::FailLink(FailLinkAutomaton::build(
                entries,
                case_sensitive,
            )?))
        }
    }

    /// The kind that was actually built.
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Automaton::Trie(_) => AlgorithmKind::Trie,
            Automaton::FailLink(_) => AlgorithmKind::FailLink,
        }
    }

    /// Number of dictionary entries the automaton was built from.
    pub fn entry_count(&self) -> usize {
        match self {
            Automaton::Trie(t) => t.entry_count(),
            Automaton::FailLink(f) => f.entry_count(),
        }
    }
}

impl Matcher for Automaton {
    fn build(entries: Vec<Entry>, case_sensitive: bool) -> Result<Self, BuildError> {
        Automaton::build_with_kind(entries, AlgorithmKind::Auto, case_sensitive)
    }

    fn find(&self, text: &str) -> Vec<ScanMatch> {
        match self {
            Automaton::Trie(t) => t.find(text),
            Automaton::FailLink(f) => f.find(text),
        }
    }

    fn replace(&self, text: &str, repl: char) -> String {
        match self {
            Automaton::Trie(t) => t.replace(text, repl),
            Automaton::FailLink(f) => f.replace(text, repl),
        }
    }

    fn is_clean(&self, text: &str) -> bool {
        match self {
            Automaton::Trie(t) => t.is_clean(text),
            Automaton::FailLink(f) => f.is_clean(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<Entry> {
        (0..n).map(|i| Entry::new(format!("word{i}"))).collect()
    }

    #[test]
    fn auto_selects_trie_below_threshold() {
        let automaton = Automaton::build(entries(AUTO_SELECT_THRESHOLD - 1), false).unwrap();
        assert_eq!(automaton.kind(), AlgorithmKind::Trie);
    }

    #[test]
    fn auto_selects_fail_link_at_threshold() {
        let automaton = Automaton::build(entries(AUTO_SELECT_THRESHOLD), false).unwrap();
        assert_eq!(automaton.kind(), AlgorithmKind::FailLink);
    }

    #[test]
    fn explicit_kind_bypasses_the_gate() {
        let automaton =
            Automaton::build_with_kind(entries(3), AlgorithmKind::FailLink, false).unwrap();
        assert_eq!(automaton.kind(), AlgorithmKind::FailLink);
        assert_eq!(automaton.entry_count(), 3);
    }

    #[test]
    fn empty_entry_set_is_a_valid_build() {
        let automaton = Automaton::build(Vec::new(), false).unwrap();
        assert!(automaton.find("anything at all").is_empty());
        assert!(automaton.is_clean("anything at all"));
    }

    #[test]
    fn empty_entry_text_fails_the_build() {
        let err = Automaton::build(vec![Entry::new("ok"), Entry::new("")], false).unwrap_err();
        assert_eq!(err, BuildError::EmptyEntry { index: 1 });
    }

    #[test]
    fn both_kinds_agree_that_clean_means_no_matches() {
        let texts = ["", "plain text", "has a bad word", "badbad", "久"];
        for kind in [AlgorithmKind::Trie, AlgorithmKind::FailLink] {
            let automaton = Automaton::build_with_kind(
                vec![Entry::new("bad"), Entry::new("word")],
                kind,
                false,
            )
            .unwrap();
            for text in texts {
                assert_eq!(
                    automaton.is_clean(text),
                    automaton.find(text).is_empty(),
                    "kind {kind:?} disagrees on {text:?}"
                );
            }
        }
    }
}
