//! Text normalization applied before matching.
//!
//! The pipeline is an ordered list of pure, independently-toggleable
//! transforms composed in a fixed order: symbol fold, script fold,
//! homoglyph fold, phonetic fold. Every transform is safe to re-apply
//! to its own output.
//!
//! Transforms may drop characters (symbol fold) or expand them
//! (phonetic fold), so each one emits a position map from its output
//! code points back to its input code points. The pipeline composes
//! those maps so a match found in normalized text can be reported
//! against the original input.
//!
//! Case folding is deliberately not a pipeline stage; it lives in the
//! automaton layer and is configured once per detector.
//!
//! License: MIT OR Apache-2.0

mod homoglyph;
mod phonetic;
mod script;
mod symbol;

pub use homoglyph::HomoglyphFold;
pub use phonetic::PhoneticFold;
pub use script::ScriptFold;
pub use symbol::SymbolFold;

use crate::config::DetectorConfig;

/// Output of a single transform: the new text plus a map from each of
/// its code points to the code-point index it came from in the input.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub text: String,
    pub map: Vec<usize>,
}

impl TransformOutput {
    /// Identity output for a transform that changed nothing.
    pub fn identity(text: &str) -> Self {
        Self {
            text: text.to_string(),
            map: (0..text.chars().count()).collect(),
        }
    }
}

/// A pure text transform in the normalizer pipeline.
pub trait TextTransform: Send + Sync {
    /// The name of the transform, for logging.
    fn name(&self) -> &'static str;

    /// Applies the transform, reporting where each output code point
    /// came from.
    fn apply(&self, text: &str) -> TransformOutput;
}

/// Normalized text together with the composed map back to the original
/// input's code points.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    pub text: String,
    map: Vec<usize>,
}

impl NormalizedText {
    /// Maps a half-open span of normalized code points back to the
    /// original input. `end` maps through the last covered position so
    /// an expansion syllable collapses back to its source character.
    pub fn original_span(&self, start: usize, end: usize) -> (usize, usize) {
        match (self.map.get(start), end.checked_sub(1).and_then(|i| self.map.get(i))) {
            (Some(&s), Some(&e)) => (s, e + 1),
            _ => (start, end),
        }
    }
}

/// The configured, ordered transform list of one detector.
pub struct Pipeline {
    transforms: Vec<Box<dyn TextTransform>>,
}

impl Pipeline {
    /// Builds the pipeline for a config, in the fixed composition
    /// order regardless of which toggles are set.
    pub fn from_config(config: &DetectorConfig) -> Self {
        let mut transforms: Vec<Box<dyn TextTransform>> = Vec::new();
        if config.symbol_fold {
            transforms.push(Box::new(SymbolFold));
        }
        if config.script_fold {
            transforms.push(Box::new(ScriptFold));
        }
        if config.homoglyph_fold {
            transforms.push(Box::new(HomoglyphFold));
        }
        if config.phonetic_fold {
            transforms.push(Box::new(PhoneticFold));
        }
        Self { transforms }
    }

    /// Runs every transform in order, composing the position maps.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let mut current = text.to_string();
        let mut map: Vec<usize> = (0..text.chars().count()).collect();
        for transform in &self.transforms {
            let output = transform.apply(&current);
            map = output.map.iter().map(|&i| map[i]).collect();
            current = output.text;
        }
        NormalizedText { text: current, map }
    }

    /// Number of enabled transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// True when no transform is enabled and normalization is the
    /// identity.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> DetectorConfig {
        DetectorConfig {
            symbol_fold: true,
            script_fold: true,
            homoglyph_fold: true,
            phonetic_fold: true,
            ..DetectorConfig::default()
        }
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = Pipeline::from_config(&DetectorConfig::default());
        assert!(pipeline.is_empty());
        let normalized = pipeline.normalize("Hello, world!");
        assert_eq!(normalized.text, "Hello, world!");
        assert_eq!(normalized.original_span(7, 12), (7, 12));
    }

    #[test]
    fn transforms_compose_in_fixed_order() {
        let pipeline = Pipeline::from_config(&full_config());
        assert_eq!(pipeline.len(), 4);
        // "f*u*c*k" -> symbol fold drops the stars -> "fuck".
        let normalized = pipeline.normalize("f*u*c*k");
        assert_eq!(normalized.text, "fuck");
        assert_eq!(normalized.original_span(0, 4), (0, 7));
    }

    #[test]
    fn composed_map_survives_dropping_and_expansion() {
        let pipeline = Pipeline::from_config(&full_config());
        // Symbol fold drops the dot, phonetic fold expands the CJK char.
        let normalized = pipeline.normalize("x.傻y");
        assert_eq!(normalized.text, "xshay");
        // "sha" (positions 1..4) came from the single char at index 2.
        assert_eq!(normalized.original_span(1, 4), (2, 3));
        // Trailing 'y' maps to index 3.
        assert_eq!(normalized.original_span(4, 5), (3, 4));
    }

    #[test]
    fn normalizing_empty_text_is_safe() {
        let pipeline = Pipeline::from_config(&full_config());
        let normalized = pipeline.normalize("");
        assert_eq!(normalized.text, "");
    }

    #[test]
    fn pipeline_is_idempotent() {
        let pipeline = Pipeline::from_config(&full_config());
        let once = pipeline.normalize("He11o, 世界! ○k");
        let twice = pipeline.normalize(&once.text);
        assert_eq!(twice.text, once.text);
    }
}
