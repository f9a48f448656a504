//! Character-class checks shared by filters and splitters.

use std::sync::LazyLock;

use regex::Regex;

static JAPANESE_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Hiragana}\p{Katakana}\p{Han}ー]").expect("valid japanese char regex")
});

static JAPANESE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Hiragana}\p{Katakana}\p{Han}ー]+$").expect("valid japanese text regex")
});

static LATIN_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]$").expect("valid latin letter regex"));

static LATIN_LETTER_OR_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]|-)$").expect("valid symbol regex"));

static JAPANESE_PHONETIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\p{Hiragana}\p{Katakana}]$").expect("valid phonetic regex")
});

/// True when `text` has at least one hiragana, katakana, or kanji character.
pub fn contains_japanese(text: &str) -> bool {
    JAPANESE_CHAR.is_match(text)
}

/// True when `text` is made only of hiragana, katakana, and kanji.
pub fn is_japanese_text(text: &str) -> bool {
    JAPANESE_TEXT.is_match(text)
}

pub fn is_latin_letter(text: &str) -> bool {
    LATIN_LETTER.is_match(text)
}

pub fn is_latin_letter_or_hyphen(text: &str) -> bool {
    LATIN_LETTER_OR_HYPHEN.is_match(text)
}

/// A lone Latin letter or kana, used like a variable name on slides.
pub fn is_japanese_phonetic(text: &str) -> bool {
    JAPANESE_PHONETIC.is_match(text)
}
