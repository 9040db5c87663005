//! fail_link.rs - The failure-link (Aho-Corasick style) automaton.
//!
//! A trie over code points augmented with failure links, so a single
//! left-to-right pass finds every match of every entry, including
//! overlapping and suffix-nested ones, in O(n + m) total work. The
//! node graph is an arena of integer-indexed slots: no self-referential
//! ownership, and the whole structure is one immutable allocation that
//! can be shared freely across threads once built.
//!
//! License: MIT OR Apache-2.0

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::dict::Entry;
use crate::fold::fold_char;
use crate::matcher::{BuildError, Matcher, ScanMatch};

const ROOT: u32 = 0;

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, u32>,
    fail: u32,
    /// Index into `entries` when this node terminates an entry.
    entry: Option<u32>,
}

/// Multi-pattern automaton with failure links, preferred for large
/// dictionaries.
#[derive(Debug)]
pub struct FailLinkAutomaton {
    nodes: Vec<Node>,
    entries: Vec<Entry>,
    /// Code-point length of each entry, indexed like `entries`.
    lens: Vec<usize>,
    case_sensitive: bool,
}

impl FailLinkAutomaton {
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
        // Duplicate texts: the last inserted entry wins.
        self.nodes[node as usize].entry = Some(entry_index);
    }

    /// Computes failure links breadth-first: the root's children fail
    /// to the root; a node reached from `p` via `c` fails to the child
    /// on `c` of the nearest node along `p`'s failure chain, or root.
    fn build_failure_links(&mut self) {
        let mut queue: VecDeque<u32> = VecDeque::new();
        let roots: Vec<u32> = self.nodes[ROOT as usize].children.values().copied().collect();
        for child in roots {
            self.nodes[child as usize].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let transitions: Vec<(char, u32)> = self.nodes[current as usize]
                .children
                .iter()
                .map(|(&c, &child)| (c, child))
                .collect();
            for (c, child) in transitions {
                queue.push_back(child);
                let mut fail = self.nodes[current as usize].fail;
                loop {
                    if let Some(&next) = self.nodes[fail as usize].children.get(&c) {
                        self.nodes[child as usize].fail = next;
                        break;
                    }
                    if fail == ROOT {
                        self.nodes[child as usize].fail = ROOT;
                        break;
                    }
                    fail = self.nodes[fail as usize].fail;
                }
            }
        }
    }

    /// Follows failure links from `state` until a transition on `c`
    /// exists, advancing into it, or resets to root.
    fn advance(&self, mut state: u32, c: char) -> u32 {
        loop {
            if let Some(&next) = self.nodes[state as usize].children.get(&c) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state as usize].fail;
        }
    }

    fn emit(&self, entry_index: u32, end: usize) -> ScanMatch {
        let entry = &self.entries[entry_index as usize];
        ScanMatch {
            word: entry.text.clone(),
            start: end - self.lens[entry_index as usize],
            end,
            category: entry.category,
            level: entry.level,
        }
    }
}

impl Matcher for FailLinkAutomaton {
    fn build(entries: Vec<Entry>, case_sensitive: bool) -> Result<Self, BuildError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.text.is_empty() {
                return Err(BuildError::EmptyEntry { index });
            }
        }
        let lens = entries.iter().map(|e| e.text.chars().count()).collect();
        let mut automaton = Self {
            nodes: vec![Node::default()],
            entries,
            lens,
            case_sensitive,
        };
        for i in 0..automaton.entries.len() {
            automaton.insert(i as u32);
        }
        automaton.build_failure_links();
        debug!(
            "built failure-link automaton: {} entries, {} nodes",
            automaton.entries.len(),
            automaton.nodes.len()
        );
        Ok(automaton)
    }

    fn find(&self, text: &str) -> Vec<ScanMatch> {
        let chars = self.scan_chars(text);
        let mut matches = Vec::new();
        let mut state = ROOT;
        for (i, &c) in chars.iter().enumerate() {
            state = self.advance(state, c);
            // Every terminal along the failure chain ends a match here.
            let mut t = state;
            while t != ROOT {
                if let Some(entry_index) = self.nodes[t as usize].entry {
                    matches.push(self.emit(entry_index, i + 1));
                }
                t = self.nodes[t as usize].fail;
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
        let mut state = ROOT;
        for c in chars {
            state = self.advance(state, c);
            let mut t = state;
            while t != ROOT {
                if self.nodes[t as usize].entry.is_some() {
                    return false;
                }
                t = self.nodes[t as usize].fail;
            }
        }
        true
    }
}
