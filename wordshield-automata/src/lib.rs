// wordshield-automata/src/lib.rs
//! # wordshield-automata
//!
//! Low-level multi-pattern matching automatons for the wordshield
//! detection engine. Two interchangeable kinds are provided behind the
//! [`Matcher`] contract:
//!
//! * [`FailLinkAutomaton`]: an Aho-Corasick style automaton with
//!   failure links. One pass, O(n + m), reports all overlapping and
//!   suffix-nested matches. Preferred for large dictionaries.
//! * [`TrieAutomaton`]: a plain trie scanned once per start position.
//!   Cheaper to build, O(n * k) to scan. Preferred for small
//!   dictionaries.
//!
//! [`Automaton`] is the closed dispatch point over both; by default the
//! kind is chosen from the entry count at build time.
//!
//! Offsets everywhere are code points, never bytes. Once built, an
//! automaton is immutable and safe to share across any number of
//! threads.
//!
//! License: MIT OR Apache-2.0

pub mod dict;
pub mod fail_link;
pub mod fold;
pub mod matcher;
pub mod trie;

pub use dict::{Category, Entry, Level, ParseNameError};
pub use fail_link::FailLinkAutomaton;
pub use matcher::{
    AlgorithmKind, Automaton, BuildError, Matcher, ScanMatch, AUTO_SELECT_THRESHOLD,
};
pub use trie::TrieAutomaton;
