//! phonetic.rs - CJK-to-pinyin expansion.
//!
//! Replaces recognized CJK characters with their pinyin syllable so a
//! dictionary authored in one script matches content written in the
//! other (`sha bi` matching `傻比`, and vice versa when the dictionary
//! holds the pinyin form). This is the one length-changing transform
//! in the pipeline: every emitted code point maps back to the CJK
//! character it expanded from, so reported offsets still refer to the
//! original input.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{TextTransform, TransformOutput};

/// Character -> pinyin syllable for the most frequent characters plus
/// the ones that show up in banned fragments.
static PINYIN: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    [
        // Common fragments.
        ('傻', "sha"), ('比', "bi"), ('测', "ce"), ('试', "shi"),
        ('敏', "min"), ('感', "gan"), ('词', "ci"),
        // Numerals.
        ('一', "yi"), ('二', "er"), ('三', "san"), ('四', "si"), ('五', "wu"),
        ('六', "liu"), ('七', "qi"), ('八', "ba"), ('九', "jiu"), ('十', "shi"),
        // High-frequency characters.
        ('的', "de"), ('了', "le"), ('是', "shi"), ('我', "wo"), ('不', "bu"),
        ('在', "zai"), ('人', "ren"), ('有', "you"), ('他', "ta"), ('这', "zhe"),
        ('个', "ge"), ('们', "men"), ('中', "zhong"), ('来', "lai"), ('上', "shang"),
        ('大', "da"), ('为', "wei"), ('和', "he"), ('国', "guo"), ('地', "di"),
        ('到', "dao"), ('以', "yi"), ('说', "shuo"), ('时', "shi"), ('要', "yao"),
        ('就', "jiu"), ('出', "chu"), ('会', "hui"), ('可', "ke"), ('也', "ye"),
        ('你', "ni"), ('对', "dui"), ('生', "sheng"), ('能', "neng"), ('而', "er"),
        ('子', "zi"), ('那', "na"), ('得', "de"), ('于', "yu"), ('着', "zhe"),
        ('下', "xia"), ('自', "zi"), ('之', "zhi"), ('年', "nian"), ('过', "guo"),
        ('发', "fa"), ('后', "hou"), ('作', "zuo"), ('里', "li"), ('用', "yong"),
        ('道', "dao"), ('行', "xing"), ('所', "suo"), ('然', "ran"), ('家', "jia"),
        ('种', "zhong"), ('事', "shi"), ('成', "cheng"), ('方', "fang"), ('多', "duo"),
        ('经', "jing"), ('么', "me"), ('去', "qu"), ('法', "fa"), ('学', "xue"),
        ('如', "ru"), ('她', "ta"), ('只', "zhi"), ('现', "xian"), ('当', "dang"),
        ('样', "yang"), ('看', "kan"), ('文', "wen"), ('无', "wu"), ('开', "kai"),
        ('手', "shou"), ('主', "zhu"), ('又', "you"), ('高', "gao"), ('小', "xiao"),
        ('动', "dong"), ('部', "bu"), ('机', "ji"), ('问', "wen"), ('分', "fen"),
        // Banned-fragment vocabulary.
        ('政', "zheng"), ('治', "zhi"), ('色', "se"), ('情', "qing"), ('暴', "bao"),
        ('力', "li"), ('毒', "du"), ('品', "pin"), ('赌', "du"), ('博', "bo"),
        ('枪', "qiang"), ('支', "zhi"), ('弹', "dan"), ('药', "yao"), ('死', "si"),
        ('杀', "sha"), ('血', "xue"), ('腥', "xing"), ('恐', "kong"), ('怖', "bu"),
        ('黄', "huang"),
    ]
    .into_iter()
    .collect()
});

/// Expands recognized CJK characters into pinyin syllables.
pub struct PhoneticFold;

impl TextTransform for PhoneticFold {
    fn name(&self) -> &'static str {
        "phonetic"
    }

    fn apply(&self, text: &str) -> TransformOutput {
        let mut out = String::with_capacity(text.len());
        let mut map = Vec::with_capacity(text.chars().count());
        for (i, c) in text.chars().enumerate() {
            match PINYIN.get(&c) {
                Some(syllable) => {
                    out.push_str(syllable);
                    map.extend(std::iter::repeat(i).take(syllable.chars().count()));
                }
                None => {
                    out.push(c);
                    map.push(i);
                }
            }
        }
        TransformOutput { text: out, map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_characters_expand_to_pinyin() {
        let out = PhoneticFold.apply("傻比");
        assert_eq!(out.text, "shabi");
        assert_eq!(out.map, vec![0, 0, 0, 1, 1]);
    }

    #[test]
    fn unrecognized_characters_pass_through() {
        let out = PhoneticFold.apply("abc傻");
        assert_eq!(out.text, "abcsha");
        assert_eq!(out.map, vec![0, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn is_idempotent_on_its_own_output() {
        // Pinyin output is plain Latin letters, which the table never
        // maps again.
        let once = PhoneticFold.apply("敏感词");
        let twice = PhoneticFold.apply(&once.text);
        assert_eq!(twice.text, once.text);
    }

    #[test]
    fn empty_input_is_safe() {
        let out = PhoneticFold.apply("");
        assert_eq!(out.text, "");
        assert!(out.map.is_empty());
    }
}
