//! homoglyph.rs - Look-alike character folding.
//!
//! Many-to-one fold of visually similar characters to one canonical
//! representative, so `p0rn` or Cyrillic-letter substitutions match a
//! dictionary authored in plain letters. The canonical form of each
//! group is the character dictionaries are actually written with: the
//! lowercase ASCII letter for leet/lookalike groups, the common
//! simplified character for CJK confusion groups.
//!
//! Table invariant: no canonical representative appears as a variant,
//! which is what makes the fold idempotent. Enforced by test.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{TextTransform, TransformOutput};

/// Variant -> canonical representative.
static HOMOGLYPHS: Lazy<HashMap<char, char>> = Lazy::new(|| {
    [
        // Digits and symbols that read as letters.
        ('0', 'o'), ('〇', 'o'), ('○', 'o'),
        ('1', 'i'), ('|', 'i'),
        ('3', 'e'), ('ε', 'e'),
        ('9', 'g'),
        ('@', 'a'), ('α', 'a'),
        ('$', 's'), ('§', 's'),
        // Cyrillic letters indistinguishable from Latin ones.
        ('а', 'a'), ('о', 'o'), ('е', 'e'), ('с', 'c'), ('р', 'p'), ('х', 'x'),
        // CJK characters commonly substituted for each other.
        ('煞', '傻'), ('儍', '傻'),
        ('涩', '色'), ('瑟', '色'),
        ('堵', '赌'), ('睹', '赌'),
        ('独', '毒'), ('督', '毒'),
        ('皇', '黄'), ('煌', '黄'),
        ('爆', '暴'), ('曝', '暴'),
    ]
    .into_iter()
    .collect()
});

/// Folds visually similar characters to their canonical form, 1:1.
pub struct HomoglyphFold;

impl TextTransform for HomoglyphFold {
    fn name(&self) -> &'static str {
        "homoglyph"
    }

    fn apply(&self, text: &str) -> TransformOutput {
        let mut out = String::with_capacity(text.len());
        let mut map = Vec::with_capacity(text.chars().count());
        for (i, c) in text.chars().enumerate() {
            out.push(*HOMOGLYPHS.get(&c).unwrap_or(&c));
            map.push(i);
        }
        TransformOutput { text: out, map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leet_digits_fold_to_letters() {
        let out = HomoglyphFold.apply("p0rn and k1ll");
        assert_eq!(out.text, "porn and kill");
    }

    #[test]
    fn cyrillic_lookalikes_fold_to_latin() {
        // The 'о' here is U+043E.
        let out = HomoglyphFold.apply("pоrn");
        assert_eq!(out.text, "porn");
    }

    #[test]
    fn cjk_variants_fold_to_canonical() {
        let out = HomoglyphFold.apply("爆力");
        assert_eq!(out.text, "暴力");
    }

    #[test]
    fn no_canonical_is_itself_a_variant() {
        for canonical in HOMOGLYPHS.values() {
            assert!(
                !HOMOGLYPHS.contains_key(canonical),
                "'{canonical}' is both a canonical form and a variant"
            );
        }
    }

    #[test]
    fn is_idempotent() {
        let once = HomoglyphFold.apply("h3ll0 w0rld 曝光");
        let twice = HomoglyphFold.apply(&once.text);
        assert_eq!(twice.text, once.text);
    }

    #[test]
    fn map_is_identity_for_1_to_1_fold() {
        let out = HomoglyphFold.apply("a0b");
        assert_eq!(out.map, vec![0, 1, 2]);
    }
}
