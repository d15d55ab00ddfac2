//! Code-point tables for script detection and width folding

use std::ops::RangeInclusive;

pub const HIRAGANA: RangeInclusive<char> = '\u{3040}'..='\u{309F}';
pub const KATAKANA: RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';
pub const CJK_EXTENSION_A: RangeInclusive<char> = '\u{3400}'..='\u{4DBF}';
pub const CJK_UNIFIED: RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';

/// Ideographic (fullwidth) space
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

const FULLWIDTH_DIGITS: RangeInclusive<char> = '\u{FF10}'..='\u{FF19}';
const FULLWIDTH_UPPER: RangeInclusive<char> = '\u{FF21}'..='\u{FF3A}';
const FULLWIDTH_LOWER: RangeInclusive<char> = '\u{FF41}'..='\u{FF5A}';

/// Distance between a fullwidth ASCII variant and its halfwidth form
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Characters that separate words, in addition to whitespace
pub const DELIMITERS: &[char] = &[
    // ASCII punctuation and brackets
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '<', '>', '"', '\'', '`', '/',
    '\\', '|', '-', '_', '=', '+', '*', '&', '^', '%', '$', '#', '@', '~',
    // CJK punctuation and brackets
    '、', '。', '，', '．', '！', '？', '：', '；', '「', '」', '『', '』', '（', '）', '［', '］',
    '【', '】', '〈', '〉', '《', '》', '〔', '〕', '｛', '｝', '・', '…', '‥', '〜', '～', '／',
    '＼', '｜', '＂', '＇', '“', '”', '‘', '’',
];

pub fn is_hiragana(c: char) -> bool {
    HIRAGANA.contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    KATAKANA.contains(&c)
}

pub fn is_cjk_ideograph(c: char) -> bool {
    CJK_UNIFIED.contains(&c) || CJK_EXTENSION_A.contains(&c)
}

/// Hiragana, Katakana or CJK ideograph
pub fn is_cjk(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || is_cjk_ideograph(c)
}

pub fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(&c)
}

/// True when the word is non-empty and consists only of `[a-z0-9]`
pub fn is_ascii_word(word: &str) -> bool {
    !word.is_empty()
        && word
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

pub fn contains_cjk(word: &str) -> bool {
    word.chars().any(is_cjk)
}

/// Fold fullwidth Latin letters and digits to their halfwidth form
pub fn to_halfwidth(c: char) -> char {
    if FULLWIDTH_DIGITS.contains(&c) || FULLWIDTH_UPPER.contains(&c) || FULLWIDTH_LOWER.contains(&c)
    {
        char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_ranges() {
        assert!(is_hiragana('あ'));
        assert!(is_hiragana('ん'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(is_cjk_ideograph('管'));
        assert!(is_cjk_ideograph('㐀'));
        assert!(!is_cjk('a'));
        assert!(!is_cjk('。'));
        assert!(!is_cjk('Ａ'));
    }

    #[test]
    fn test_halfwidth_folding() {
        assert_eq!(to_halfwidth('Ａ'), 'A');
        assert_eq!(to_halfwidth('ｚ'), 'z');
        assert_eq!(to_halfwidth('０'), '0');
        assert_eq!(to_halfwidth('９'), '9');
        // Fullwidth punctuation is left alone
        assert_eq!(to_halfwidth('！'), '！');
        assert_eq!(to_halfwidth('あ'), 'あ');
    }

    #[test]
    fn test_delimiters() {
        assert!(is_delimiter(' '));
        assert!(is_delimiter(IDEOGRAPHIC_SPACE));
        assert!(is_delimiter('、'));
        assert!(is_delimiter('「'));
        assert!(is_delimiter('-'));
        assert!(!is_delimiter('a'));
        assert!(!is_delimiter('ー'));
    }

    #[test]
    fn test_ascii_word() {
        assert!(is_ascii_word("rust2024"));
        assert!(!is_ascii_word("Rust"));
        assert!(!is_ascii_word("café"));
        assert!(!is_ascii_word(""));
        assert!(contains_cjk("abc漢字"));
        assert!(!contains_cjk("abc"));
    }
}
