//! result.rs - Structured detection results.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use wordshield_automata::{Category, Level};

/// A single reported match.
///
/// Offsets are code-point indices into the *original* input text,
/// half-open, with `end > start` — even when length-changing
/// normalization was applied before matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The dictionary text of the matched entry.
    pub word: String,
    /// Code-point index of the first matched character in the input.
    pub start: usize,
    /// Code-point index one past the last matched character.
    pub end: usize,
    /// Category of the matched entry.
    pub category: Category,
    /// Severity level of the matched entry.
    pub level: Level,
}

/// Full result of a `find_all` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Whether any match survived filtering.
    pub found: bool,
    /// All surviving matches.
    pub matches: Vec<Match>,
    /// The normalized text with every matched span masked.
    pub filtered_text: String,
}

impl DetectionResult {
    /// Returns true if any match intersects `category`.
    pub fn has_category(&self, category: Category) -> bool {
        self.matches.iter().any(|m| m.category.intersects(category))
    }

    /// Returns true if any match has exactly `level`.
    pub fn has_level(&self, level: Level) -> bool {
        self.matches.iter().any(|m| m.level == level)
    }

    /// The matches intersecting `category`.
    pub fn by_category(&self, category: Category) -> Vec<&Match> {
        self.matches
            .iter()
            .filter(|m| m.category.intersects(category))
            .collect()
    }

    /// The matches at exactly `level`.
    pub fn by_level(&self, level: Level) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.level == level).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DetectionResult {
        DetectionResult {
            found: true,
            matches: vec![
                Match {
                    word: "kill".into(),
                    start: 0,
                    end: 4,
                    category: Category::VIOLENCE,
                    level: Level::High,
                },
                Match {
                    word: "spam".into(),
                    start: 10,
                    end: 14,
                    category: Category::AD | Category::OTHER,
                    level: Level::Low,
                },
            ],
            filtered_text: "**** some ****".into(),
        }
    }

    #[test]
    fn category_helpers() {
        let result = sample();
        assert!(result.has_category(Category::AD));
        assert!(!result.has_category(Category::POLITICAL));
        assert_eq!(result.by_category(Category::VIOLENCE).len(), 1);
    }

    #[test]
    fn level_helpers() {
        let result = sample();
        assert!(result.has_level(Level::High));
        assert!(!result.has_level(Level::Critical));
        assert_eq!(result.by_level(Level::Low)[0].word, "spam");
    }
}
