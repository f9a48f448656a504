use slides_term_types::Term;

use super::TermFilter;
use crate::classifier::{EnglishClassifier, JapaneseClassifier, MorphemeClassifier};

// Numeric filters key off tagset attributes, not script, so both are always in scope.

/// Rejects numeric phrases such as `2024` or `（3）`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JapaneseNumericFilter {
    classifier: JapaneseClassifier,
}

impl TermFilter for JapaneseNumericFilter {
    fn inscope(&self, _term: &Term) -> bool {
        true
    }

    fn is_candidate(&self, scoped_term: &Term) -> bool {
        !is_numeric_phrase(scoped_term, &self.classifier)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishNumericFilter {
    classifier: EnglishClassifier,
}

impl TermFilter for EnglishNumericFilter {
    fn inscope(&self, _term: &Term) -> bool {
        true
    }

    fn is_candidate(&self, scoped_term: &Term) -> bool {
        !is_numeric_phrase(scoped_term, &self.classifier)
    }
}

fn is_numeric_phrase(term: &Term, classifier: &impl MorphemeClassifier) -> bool {
    term.morphemes()
        .iter()
        .all(|m| classifier.is_numeral(m) || classifier.is_meaningless(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::*;
    use slides_term_types::Morpheme;

    #[test]
    fn japanese_numbers_and_brackets() {
        let filter = JapaneseNumericFilter::default();
        let num = |s: &str| Morpheme::new(s, "名詞").with_category("数");
        let bracket = Morpheme::new("（", "記号").with_category("括弧開");
        assert!(!filter.is_candidate(&term(vec![bracket, num("3")])));
        assert!(filter.is_candidate(&term(vec![num("3"), ja_noun("次元")])));
    }

    #[test]
    fn english_numbers_and_punctuation() {
        let filter = EnglishNumericFilter::default();
        let phrase = term(vec![Morpheme::new("3.5", "NUM"), Morpheme::new("%", "SYM")]);
        assert!(!filter.is_candidate(&phrase));
        assert!(filter.is_candidate(&term(vec![Morpheme::new("3", "NUM"), noun("layers")])));
        // Japanese-tagged digits are not English numerals.
        let ja_digit = term(vec![Morpheme::new("3", "名詞").with_category("数")]);
        assert!(filter.is_candidate(&ja_digit));
    }
}
