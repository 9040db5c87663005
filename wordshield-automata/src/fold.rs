//! fold.rs - Single code-point case folding.
//!
//! Matching works on code-point indices, so the fold used for
//! case-insensitive automatons has to be strictly 1:1. Full Unicode
//! lowercasing can expand a character into several (e.g. `İ`), which
//! would shift every offset after it; taking the first code point of
//! the lowercase mapping keeps indices stable.
//!
//! License: MIT OR Apache-2.0

/// Folds one code point to its lowercase form, 1:1.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(first), None) => first,
        // Multi-char expansion: keep the original to preserve offsets.
        _ => c,
    }
}
