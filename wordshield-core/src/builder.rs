//! builder.rs - Fluent construction of a detector.
//!
//! Collects dictionary and whitelist sources, normalizer toggles and
//! filter settings, then wires everything together in `build`.
//! Dictionary source failures abort the build; whitelist source
//! failures are logged and skipped so an unreachable exemption list
//! never blocks detection from coming up.
//!
//! License: MIT OR Apache-2.0

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::warn;

use wordshield_automata::{AlgorithmKind, Category, Entry, Level};

use crate::builtin;
use crate::config::DetectorConfig;
use crate::detector::Detector;
use crate::filters::Whitelist;
use crate::loader::{DictSource, FileSource, HttpSource, MemorySource};
use crate::watcher::FileWatcher;

/// Fluent builder for [`Detector`].
#[derive(Default)]
pub struct DetectorBuilder {
    config: DetectorConfig,
    entries: Vec<Entry>,
    sources: Vec<Box<dyn DictSource>>,
    whitelist_words: Vec<String>,
    whitelist_sources: Vec<Box<dyn DictSource>>,
    watched_files: Vec<PathBuf>,
    watch: bool,
}

impl DetectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration at once.
    pub fn config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Forces a specific automaton kind instead of size-gated auto
    /// selection.
    pub fn algorithm(mut self, kind: AlgorithmKind) -> Self {
        self.config.algorithm = kind;
        self
    }

    /// Makes matching case-sensitive (the default is insensitive).
    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.config.case_sensitive = sensitive;
        self
    }

    /// Enables symbol stripping and whitespace collapsing.
    pub fn symbol_fold(mut self) -> Self {
        self.config.symbol_fold = true;
        self
    }

    /// Enables traditional-to-simplified script folding.
    pub fn script_fold(mut self) -> Self {
        self.config.script_fold = true;
        self
    }

    /// Enables look-alike character folding.
    pub fn homoglyph_fold(mut self) -> Self {
        self.config.homoglyph_fold = true;
        self
    }

    /// Enables CJK-to-pinyin expansion.
    pub fn phonetic_fold(mut self) -> Self {
        self.config.phonetic_fold = true;
        self
    }

    /// Sets the default replacement character.
    pub fn replace_char(mut self, c: char) -> Self {
        self.config.replace_char = c;
        self
    }

    /// Only report matches intersecting these categories.
    pub fn categories(mut self, categories: Category) -> Self {
        self.config.categories = categories;
        self
    }

    /// Only report matches at or above this level.
    pub fn min_level(mut self, level: Level) -> Self {
        self.config.min_level = level;
        self
    }

    /// Caps the number of matches a single call reports; 0 lifts the
    /// cap.
    pub fn max_matches(mut self, max: usize) -> Self {
        self.config.max_matches = max;
        self
    }

    /// Adds plain words to the dictionary with default metadata.
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources.push(Box::new(MemorySource::new(
            words.into_iter().map(Into::into).collect::<Vec<_>>(),
        )));
        self
    }

    /// Adds fully specified entries to the dictionary.
    pub fn entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        self.entries.extend(entries);
        self
    }

    /// Adds the embedded default dictionary.
    pub fn default_dictionary(mut self) -> Self {
        self.entries.extend(builtin::default_entries().iter().cloned());
        self
    }

    /// Adds a dictionary file. Watched for changes when
    /// [`DetectorBuilder::watch`] is enabled.
    pub fn file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        let path = path.into();
        self.watched_files.push(path.clone());
        self.sources.push(Box::new(FileSource::new(path)));
        self
    }

    /// Adds a remote dictionary URL.
    pub fn http(mut self, url: impl Into<String>) -> Self {
        self.sources.push(Box::new(HttpSource::new(url)));
        self
    }

    /// Adds any custom dictionary source.
    pub fn source(mut self, source: Box<dyn DictSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds words to the whitelist.
    pub fn whitelist<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whitelist_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Loads whitelist words from a file.
    pub fn whitelist_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.whitelist_sources.push(Box::new(FileSource::new(path.into())));
        self
    }

    /// Loads whitelist words from a URL.
    pub fn whitelist_http(mut self, url: impl Into<String>) -> Self {
        self.whitelist_sources.push(Box::new(HttpSource::new(url)));
        self
    }

    /// Reloads file dictionaries automatically when they change on
    /// disk, polling at `interval`.
    pub fn watch(mut self, interval: Duration) -> Self {
        self.watch = true;
        self.config.watch_interval = interval;
        self
    }

    /// Loads every source, builds the automaton and wires filters and
    /// watchers. Dictionary source failures abort; whitelist source
    /// failures are skipped.
    pub fn build(self) -> Result<Arc<Detector>> {
        let mut entries = self.entries;
        for source in &self.sources {
            entries.extend(source.load().context("failed to load dictionary source")?);
        }

        let whitelist = Whitelist::with_words(&self.whitelist_words);
        for source in &self.whitelist_sources {
            match source.load() {
                Ok(loaded) => {
                    for entry in loaded {
                        whitelist.add(&entry.text);
                    }
                }
                Err(e) => warn!("skipping failed whitelist source: {e}"),
            }
        }

        let detector = Arc::new(Detector::with_whitelist(entries, self.config, whitelist)?);

        if self.watch {
            let interval = detector.config().watch_interval;
            for path in self.watched_files {
                let watcher = FileWatcher::spawn(Arc::downgrade(&detector), path, interval);
                detector.attach_watcher(watcher);
            }
        }

        Ok(detector)
    }
}
