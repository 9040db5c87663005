//! detector.rs - The detection orchestrator.
//!
//! A [`Detector`] owns the active automaton and composes the full
//! pipeline per call: normalize, match, then whitelist, category and
//! level filtering. The automaton sits behind a `RwLock<Arc<..>>`;
//! readers hold the lock only long enough to clone the `Arc` and then
//! scan lock-free, so a slow rebuild never stalls them. `reload`
//! builds the replacement automaton entirely off-lock and takes the
//! write lock only for the pointer swap.
//!
//! License: MIT OR Apache-2.0

use std::sync::{Arc, Mutex, RwLock};

use log::{debug, info};

use wordshield_automata::{Automaton, Entry, Matcher, ScanMatch};

use crate::config::DetectorConfig;
use crate::errors::WordshieldError;
use crate::filters::{MatchFilter, Whitelist};
use crate::normalize::{NormalizedText, Pipeline};
use crate::result::{DetectionResult, Match};
use crate::watcher::FileWatcher;

/// The main prohibited-word detector.
pub struct Detector {
    automaton: RwLock<Arc<Automaton>>,
    pipeline: Pipeline,
    whitelist: Whitelist,
    extra_filters: RwLock<Vec<Box<dyn MatchFilter>>>,
    watchers: Mutex<Vec<FileWatcher>>,
    config: DetectorConfig,
}

impl Detector {
    /// Builds a detector from a dictionary and configuration, with an
    /// empty whitelist.
    pub fn new(entries: Vec<Entry>, config: DetectorConfig) -> Result<Self, WordshieldError> {
        Self::with_whitelist(entries, config, Whitelist::new())
    }

    /// Builds a detector with a pre-populated whitelist. The whitelist
    /// handle stays valid for dynamic mutation afterwards.
    pub fn with_whitelist(
        entries: Vec<Entry>,
        config: DetectorConfig,
        whitelist: Whitelist,
    ) -> Result<Self, WordshieldError> {
        let automaton = Automaton::build_with_kind(entries, config.algorithm, config.case_sensitive)?;
        let pipeline = Pipeline::from_config(&config);
        info!(
            "detector ready: {} entries, {:?} automaton, {} normalizer stage(s)",
            automaton.entry_count(),
            automaton.kind(),
            pipeline.len()
        );
        Ok(Self {
            automaton: RwLock::new(Arc::new(automaton)),
            pipeline,
            whitelist,
            extra_filters: RwLock::new(Vec::new()),
            watchers: Mutex::new(Vec::new()),
            config,
        })
    }

    /// The configuration this detector was built with.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// The whitelist handle, for dynamic add/remove/clear.
    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Clones the active automaton reference. Readers scan against the
    /// snapshot without holding any lock.
    fn snapshot(&self) -> Arc<Automaton> {
        Arc::clone(&self.automaton.read().unwrap())
    }

    /// Returns true if the text contains any reportable word.
    ///
    /// Structural check: the whitelist and category/level filters are
    /// not consulted, so a whitelisted word still makes the text
    /// "containing". Use `find` for the filtered view.
    pub fn contains(&self, text: &str) -> bool {
        !self.validate(text)
    }

    /// Returns true if the text is clean. Negation-equivalent to
    /// [`Detector::contains`]; same structural semantics.
    pub fn validate(&self, text: &str) -> bool {
        let normalized = self.pipeline.normalize(text);
        self.snapshot().is_clean(&normalized.text)
    }

    /// Finds all matches that survive whitelist, category and level
    /// filtering. Offsets refer to the original input text, in code
    /// points.
    pub fn find(&self, text: &str) -> Vec<Match> {
        let normalized = self.pipeline.normalize(text);
        let automaton = self.snapshot();
        self.filter_matches(automaton.find(&normalized.text), &normalized)
    }

    /// Finds all filtered matches and produces the masked normalized
    /// text, from a single shared normalization pass.
    pub fn find_all(&self, text: &str) -> DetectionResult {
        let normalized = self.pipeline.normalize(text);
        let automaton = self.snapshot();
        let matches = self.filter_matches(automaton.find(&normalized.text), &normalized);
        let filtered_text = automaton.replace(&normalized.text, self.config.replace_char);
        DetectionResult {
            found: !matches.is_empty(),
            matches,
            filtered_text,
        }
    }

    /// Replaces every matched span with the first code point of
    /// `replacement`. An empty replacement returns the input unchanged.
    ///
    /// The returned text is the *normalized* text with matches masked;
    /// callers needing masking in original-input space can combine
    /// [`Detector::find`] offsets with their own rewriting.
    pub fn replace(&self, text: &str, replacement: &str) -> String {
        match replacement.chars().next() {
            Some(repl) => self.replace_char(text, repl),
            None => text.to_string(),
        }
    }

    /// Replaces every matched span with `repl`. See
    /// [`Detector::replace`] for the normalized-text caveat.
    pub fn replace_char(&self, text: &str, repl: char) -> String {
        let normalized = self.pipeline.normalize(text);
        self.snapshot().replace(&normalized.text, repl)
    }

    /// Replaces matched spans with the configured default replacement
    /// character.
    pub fn filter_text(&self, text: &str) -> String {
        self.replace_char(text, self.config.replace_char)
    }

    /// Atomically replaces the dictionary.
    ///
    /// The new automaton is built before any lock is taken; only on
    /// success is it published, with the write lock held just for the
    /// pointer swap. On failure the previous automaton keeps serving
    /// and the error is returned to the caller. Concurrent reloads
    /// serialize on the write lock; the last successful publish wins.
    pub fn reload(&self, entries: Vec<Entry>) -> Result<(), WordshieldError> {
        let count = entries.len();
        let automaton =
            Automaton::build_with_kind(entries, self.config.algorithm, self.config.case_sensitive)?;
        let kind = automaton.kind();
        *self.automaton.write().unwrap() = Arc::new(automaton);
        info!("dictionary reloaded: {count} entries, {kind:?} automaton");
        Ok(())
    }

    /// Installs an additional suppression rule.
    pub fn add_filter(&self, filter: Box<dyn MatchFilter>) {
        debug!("installing match filter '{}'", filter.name());
        self.extra_filters.write().unwrap().push(filter);
    }

    /// Registers a background watcher owned by this detector.
    pub(crate) fn attach_watcher(&self, watcher: FileWatcher) {
        self.watchers.lock().unwrap().push(watcher);
    }

    /// Stops every owned background watcher. Idempotent; detection
    /// keeps working after close.
    pub fn close(&self) {
        let watchers: Vec<FileWatcher> = self.watchers.lock().unwrap().drain(..).collect();
        for mut watcher in watchers {
            watcher.stop();
        }
    }

    fn should_filter(&self, word: &str) -> bool {
        if self.whitelist.should_filter(word) {
            return true;
        }
        self.extra_filters
            .read()
            .unwrap()
            .iter()
            .any(|f| f.should_filter(word))
    }

    fn filter_matches(
        &self,
        scan_matches: Vec<ScanMatch>,
        normalized: &NormalizedText,
    ) -> Vec<Match> {
        let mut result = Vec::with_capacity(scan_matches.len());
        for m in scan_matches {
            if self.should_filter(&m.word) {
                continue;
            }
            if !self.config.categories.is_empty() && !m.category.intersects(self.config.categories)
            {
                continue;
            }
            if m.level < self.config.min_level {
                continue;
            }
            let (start, end) = normalized.original_span(m.start, m.end);
            result.push(Match {
                word: m.word,
                start,
                end,
                category: m.category,
                level: m.level,
            });
            if self.config.max_matches > 0 && result.len() >= self.config.max_matches {
                break;
            }
        }
        result
    }
}

impl Drop for Detector {
    fn drop(&mut self) {
        self.close();
    }
}
