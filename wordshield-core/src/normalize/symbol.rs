//! symbol.rs - Symbol stripping and whitespace collapsing.
//!
//! Drops every character that is neither letter, digit nor CJK
//! ideograph, and collapses whitespace runs to a single space. This is
//! the transform that defeats `b.a.d` / `b a d` style spacing evasion.
//!
//! License: MIT OR Apache-2.0

use super::{TextTransform, TransformOutput};

/// Returns true for CJK ideographs, which `char::is_alphabetic`
/// already covers for the unified block but not for every extension.
pub(crate) fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'      // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'    // Extension A
        | '\u{20000}'..='\u{2A6DF}'  // Extension B
        | '\u{2A700}'..='\u{2B73F}'  // Extension C
        | '\u{2B740}'..='\u{2B81F}'  // Extension D
        | '\u{2B820}'..='\u{2CEAF}'  // Extension E
    )
}

/// Drops symbols and collapses whitespace runs.
pub struct SymbolFold;

impl TextTransform for SymbolFold {
    fn name(&self) -> &'static str {
        "symbol"
    }

    fn apply(&self, text: &str) -> TransformOutput {
        let mut out = String::with_capacity(text.len());
        let mut map = Vec::with_capacity(text.chars().count());
        let mut last_was_space = false;
        for (i, c) in text.chars().enumerate() {
            if c.is_alphabetic() || c.is_numeric() || is_cjk(c) {
                out.push(c);
                map.push(i);
                last_was_space = false;
            } else if c.is_whitespace() {
                // A run of whitespace, possibly interleaved with
                // dropped symbols, collapses to one space.
                if !last_was_space {
                    out.push(' ');
                    map.push(i);
                    last_was_space = true;
                }
            }
            // Anything else is interference; drop it.
        }
        TransformOutput { text: out, map }
    }
}
