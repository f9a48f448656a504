use slides_term_types::Term;

use super::TermFilter;
use crate::chars::{contains_japanese, is_japanese_phonetic, is_latin_letter};

/// Rejects variable-like terms (`x`, `a b`) built from lone phonetic letters.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishSymbolLikeFilter;

impl TermFilter for EnglishSymbolLikeFilter {
    fn inscope(&self, term: &Term) -> bool {
        !contains_japanese(&term.key())
    }

    fn is_candidate(&self, scoped_term: &Term) -> bool {
        !has_phonetic_symbol(scoped_term, is_latin_letter)
    }
}

/// Japanese counterpart: lone kana count as phonetic symbols as well.
#[derive(Clone, Copy, Debug, Default)]
pub struct JapaneseSymbolLikeFilter;

impl TermFilter for JapaneseSymbolLikeFilter {
    fn inscope(&self, term: &Term) -> bool {
        contains_japanese(&term.key())
    }

    fn is_candidate(&self, scoped_term: &Term) -> bool {
        !has_phonetic_symbol(scoped_term, is_japanese_phonetic)
    }
}

/// A phonetic symbol is either the whole (single-morpheme) term, or two
/// adjacent morphemes that are both phonetic symbols.
fn has_phonetic_symbol(term: &Term, is_phonetic: fn(&str) -> bool) -> bool {
    let morphemes = term.morphemes();
    if let [only] = morphemes {
        return is_phonetic(&only.surface_form);
    }
    morphemes
        .windows(2)
        .any(|pair| is_phonetic(&pair[0].surface_form) && is_phonetic(&pair[1].surface_form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::*;

    #[test]
    fn english_rejects_bare_letters() {
        let filter = EnglishSymbolLikeFilter;
        assert!(!filter.is_candidate(&term(vec![noun("x")])));
        assert!(!filter.is_candidate(&term(vec![noun("vector"), noun("a"), noun("b")])));
        assert!(filter.is_candidate(&term(vec![noun("vector"), noun("a")])));
        assert!(filter.is_candidate(&term(vec![noun("ab")])));
    }

    #[test]
    fn japanese_counts_kana() {
        let filter = JapaneseSymbolLikeFilter;
        let kana_pair = term(vec![ja_noun("ア"), ja_noun("イ"), ja_noun("学習")]);
        assert!(filter.inscope(&kana_pair));
        assert!(!filter.is_candidate(&kana_pair));
        assert!(filter.is_candidate(&term(vec![ja_noun("学習"), ja_noun("A")])));
    }
}
