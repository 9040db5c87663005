// wordshield-core/src/lib.rs
//! # Wordshield Core Library
//!
//! `wordshield-core` flags and redacts prohibited substrings inside
//! arbitrary Unicode text, resilient to simple evasion tricks: spacing
//! and punctuation interference, homoglyph substitution, traditional
//! script variants and pinyin transliteration. Matching is purely
//! lexical; there is no natural-language understanding here.
//!
//! The matching automatons themselves live in the `wordshield-automata`
//! crate; this crate adds the text-normalization pipeline, filtering,
//! dictionary ingestion and the detection orchestrator with atomic hot
//! reload.
//!
//! ## Modules
//!
//! * `config`: `DetectorConfig`, fixed per detector at construction.
//! * `normalize`: the ordered, toggleable transform pipeline with
//!   position maps back to the original input.
//! * `filters`: the `MatchFilter` trait and the dynamic `Whitelist`.
//! * `detector`: the `Detector` orchestrator and hot reload.
//! * `result`: `Match` and `DetectionResult` reporting types.
//! * `loader`: `DictSource` implementations for memory, files and HTTP.
//! * `builder`: fluent `DetectorBuilder` construction.
//! * `watcher`: background polling of dictionary files.
//! * `builtin`: the embedded default dictionary.
//! * `errors`: the `WordshieldError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordshield_core::DetectorBuilder;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let detector = DetectorBuilder::new()
//!         .words(["badword", "evil"])
//!         .symbol_fold()
//!         .build()?;
//!
//!     assert!(detector.contains("totally b.a.d.w.o.r.d content"));
//!
//!     let matches = detector.find("some badword here");
//!     assert_eq!(matches.len(), 1);
//!     assert_eq!(matches[0].word, "badword");
//!
//!     assert_eq!(detector.filter_text("pure evil"), "pure ****");
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! All detection operations are pure computation over their input and
//! safe to call from any number of threads at once. `Detector::reload`
//! builds the replacement automaton before taking any lock and
//! publishes it with a single pointer swap, so readers are never
//! blocked by a rebuild and a failed reload leaves the previous
//! dictionary serving.
//!
//! ## Error Handling
//!
//! The only error the detection core emits is a structural build
//! failure (an entry with empty text) from build/reload, reported as
//! [`WordshieldError`]. Every scanning operation is total over any
//! input, including empty text. Ingestion collaborators use
//! `anyhow::Error` with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod builder;
pub mod builtin;
pub mod config;
pub mod detector;
pub mod errors;
pub mod filters;
pub mod loader;
pub mod normalize;
pub mod result;
pub mod watcher;

/// Re-exports the dictionary model and automaton types from the
/// engine crate, so most consumers need only this crate.
pub use wordshield_automata::{
    AlgorithmKind, Automaton, BuildError, Category, Entry, Level, Matcher, ScanMatch,
    AUTO_SELECT_THRESHOLD,
};

/// Re-exports the fluent builder.
pub use builder::DetectorBuilder;

/// Re-exports the embedded default dictionary.
pub use builtin::default_entries;

/// Re-exports the detector configuration.
pub use config::DetectorConfig;

/// Re-exports the detection orchestrator.
pub use detector::Detector;

/// Re-exports the custom error type for clear error reporting.
pub use errors::WordshieldError;

/// Re-exports post-match suppression types.
pub use filters::{MatchFilter, Whitelist};

/// Re-exports dictionary ingestion sources.
pub use loader::{DictSource, FileSource, HttpSource, MemorySource};

/// Re-exports the normalizer pipeline types for advanced usage.
pub use normalize::{NormalizedText, Pipeline, TextTransform, TransformOutput};

/// Re-exports reporting types.
pub use result::{DetectionResult, Match};

/// Re-exports the file watcher handle.
pub use watcher::FileWatcher;
