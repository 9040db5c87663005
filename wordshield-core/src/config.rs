//! Configuration for the detector.
//!
//! [`DetectorConfig`] is fixed at construction: the normalizer toggles,
//! case sensitivity, replacement character and the category/level/count
//! filters are not swappable afterwards. Only the dictionary itself can
//! change, through `Detector::reload`.
//!
//! License: MIT OR Apache-2.0

use std::time::Duration;

use serde::{Deserialize, Serialize};

use wordshield_automata::{AlgorithmKind, Category, Level};

/// Configuration options for a detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Which matching automaton to build; `Auto` gates on entry count.
    pub algorithm: AlgorithmKind,

    /// Whether matching is case-sensitive. Case folding happens inside
    /// the automaton layer, not in the normalizer pipeline.
    pub case_sensitive: bool,

    /// Drop non-letter/digit/CJK characters and collapse whitespace
    /// runs before matching. Defeats spacing and punctuation evasion.
    pub symbol_fold: bool,

    /// Fold traditional-script CJK characters to their simplified
    /// counterparts before matching.
    pub script_fold: bool,

    /// Fold visually similar characters to one canonical
    /// representative before matching. Defeats look-alike substitution.
    pub homoglyph_fold: bool,

    /// Replace recognized CJK characters with their pinyin syllable
    /// before matching, so a dictionary authored in one script matches
    /// content in the other. This transform changes text length.
    pub phonetic_fold: bool,

    /// Default character used to mask matched spans.
    pub replace_char: char,

    /// Only report matches intersecting these categories. The empty
    /// set allows all categories.
    pub categories: Category,

    /// Minimum severity level a match must have to be reported.
    pub min_level: Level,

    /// Maximum number of matches to return; 0 means no limit.
    pub max_matches: usize,

    /// Interval between file-change checks when watching is enabled.
    #[serde(with = "duration_secs")]
    pub watch_interval: Duration,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::Auto,
            case_sensitive: false,
            symbol_fold: false,
            script_fold: false,
            homoglyph_fold: false,
            phonetic_fold: false,
            replace_char: '*',
            categories: Category::empty(),
            min_level: Level::Low,
            max_matches: 0,
            watch_interval: Duration::from_secs(30),
        }
    }
}

/// Serializes a `Duration` as whole seconds, which is the only
/// granularity the watcher needs.
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
