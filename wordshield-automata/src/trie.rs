//! trie.rs - The plain-trie automaton.
//!
//! Identical trie insertion to the failure-link automaton but no link
//! computation: matching walks the trie once per start position. That
//! makes builds cheaper and scans O(n * k) with k the longest entry,
//! which is the better trade below the auto-select threshold. Prefix
//! and full entries both emit, so `{"ab","abc"}` on `"abcd"` reports
//! both.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

use log::debug;

use crate::dict::Entry;
use crate::fold::fold_char;
use crate::matcher::{BuildError, Matcher, ScanMatch};

const ROOT: u32 = 0;

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, u32>,
    entry: Option<u32>,
}

/// Per-start-position trie scanner, preferred for small dictionaries.
#[derive(Debug)]
pub struct TrieAutomaton {
    nodes: Vec<Node>,
    entries: Vec<Entry>,
    case_sensitive: bool,
}

impl TrieAutomaton {
    /// Number of dictionary entries this automaton was built from.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn scan_chars(&self, text: &str) -> Vec<char> {
        if self.case_sensitive {
            text.chars().collect()
        } else {
            text.chars().map(fold_char).collect()
        }
    }

    fn insert(&mut self, entry_index: u32) {
        let chars: Vec<char> = if self.case_sensitive {
            self.entries[entry_index as usize].text.chars().collect()
        } else {
            self.entries[entry_index as usize]
                .text
                .chars()
                .map(fold_char)
                .collect()
        };
        let mut node = ROOT;
        for c in chars {
            node = match self.nodes[node as usize].children.get(&c).copied() {
                Some(next) => next,
                None => {
                    let next = self.nodes.len() as u32;
                    self.nodes.push(Node::default());
                    self.nodes[node as usize].children.insert(c, next);
                    next
                }
            };
        }
        self.nodes[node as usize].entry = Some(entry_index);
    }

    fn emit(&self, entry_index: u32, start: usize, end: usize) -> ScanMatch {
        let entry = &self.entries[entry_index as usize];
        ScanMatch {
            word: entry.text.clone(),
            start,
            end,
            category: entry.category,
            level: entry.level,
        }
    }
}

impl Matcher for TrieAutomaton {
    fn build(entries: Vec<Entry>, case_sensitive: bool) -> Result<Self, BuildError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.text.is_empty() {
                return Err(BuildError::EmptyEntry { index });
            }
        }
        let mut automaton = Self {
            nodes: vec![Node::default()],
            entries,
            case_sensitive,
        };
        for i in 0..automaton.entries.len() {
            automaton.insert(i as u32);
        }
        debug!(
            "built plain-trie automaton: {} entries, {} nodes",
            automaton.entries.len(),
            automaton.nodes.len()
        );
        Ok(automaton)
    }

    fn find(&self, text: &str) -> Vec<ScanMatch> {
        let chars = self.scan_chars(text);
        let mut matches = Vec::new();
        for i in 0..chars.len() {
            let mut state = ROOT;
            for (j, &c) in chars.iter().enumerate().skip(i) {
                match self.nodes[state as usize].children.get(&c) {
                    Some(&next) => state = next,
                    None => break,
                }
                // Terminals along the walk are prefix matches; emit all.
                if let Some(entry_index) = self.nodes[state as usize].entry {
                    matches.push(self.emit(entry_index, i, j + 1));
                }
            }
        }
        matches
    }

    fn replace(&self, text: &str, repl: char) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        let mut masked = vec![false; chars.len()];
        for m in self.find(text) {
            for flag in &mut masked[m.start..m.end] {
                *flag = true;
            }
        }
        for (c, flag) in chars.iter_mut().zip(masked) {
            if flag {
                *c = repl;
            }
        }
        chars.into_iter().collect()
    }

    fn is_clean(&self, text: &str) -> bool {
        let chars = self.scan_chars(text);
        for i in 0..chars.len() {
            let mut state = ROOT;
            for &c in &chars[i..] {
                match self.nodes[state as usize].children.get(&c) {
                    Some(&next) => state = next,
                    None => break,
                }
                if self.nodes[state as usize].entry.is_some() {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> TrieAutomaton {
        let entries = words.iter().map(|w| Entry::new(*w)).collect();
        TrieAutomaton::build(entries, false).unwrap()
    }

    #[test]
    fn prefix_and_full_entries_both_emit() {
        let automaton = build(&["ab", "abc"]);
        let matches = automaton.find("abcd");
        assert_eq!(matches.len(), 2);
        assert_eq!((matches[0].word.as_str(), matches[0].start, matches[0].end), ("ab", 0, 2));
        assert_eq!((matches[1].word.as_str(), matches[1].start, matches[1].end), ("abc", 0, 3));
    }

    #[test]
    fn overlapping_starts_all_scan() {
        let automaton = build(&["aa"]);
        let matches = automaton.find("aaa");
        assert_eq!(matches.len(), 2);
        assert_eq!((matches[0].start, matches[0].end), (0, 2));
        assert_eq!((matches[1].start, matches[1].end), (1, 3));
    }

    #[test]
    fn replace_masks_matched_spans_only() {
        let automaton = build(&["bad"]);
        assert_eq!(automaton.replace("a bad day", '*'), "a *** day");
    }

    #[test]
    fn case_insensitive_build_folds_entries() {
        let entries = vec![Entry::new("ABC")];
        let automaton = TrieAutomaton::build(entries, false).unwrap();
        assert_eq!(automaton.find("abc").len(), 1);
        assert_eq!(automaton.find("AbC").len(), 1);
    }

    #[test]
    fn cjk_offsets_count_code_points() {
        let automaton = build(&["敏感词"]);
        let matches = automaton.find("一个敏感词测试");
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].start, matches[0].end), (2, 5));
    }

    #[test]
    fn is_clean_matches_find_emptiness() {
        let automaton = build(&["ab", "abc", "xyz"]);
        for text in ["", "abcd", "axbycz", "ab", "a"] {
            assert_eq!(automaton.is_clean(text), automaton.find(text).is_empty());
        }
    }

    #[test]
    fn empty_dictionary_matches_nothing() {
        let automaton = TrieAutomaton::build(Vec::new(), false).unwrap();
        assert!(automaton.find("anything").is_empty());
        assert!(automaton.is_clean("anything"));
        assert_eq!(automaton.replace("anything", '*'), "anything");
    }
}
