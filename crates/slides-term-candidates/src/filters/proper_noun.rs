use slides_term_types::{Morpheme, Term};

use super::TermFilter;
use crate::chars::{contains_japanese, is_japanese_text};
use crate::classifier::{EnglishClassifier, JapaneseClassifier, MorphemeClassifier};

/// Rejects terms that are nothing but person/region names glued together with
/// modifying particles or connectors.
#[derive(Clone, Copy, Debug, Default)]
pub struct JapaneseProperNounFilter {
    classifier: JapaneseClassifier,
}

impl JapaneseProperNounFilter {
    fn is_name_part(&self, morpheme: &Morpheme) -> bool {
        self.classifier.is_region_or_person(morpheme)
            || self.classifier.is_modifying_particle(morpheme)
            || self.classifier.is_connector_symbol(morpheme)
    }
}

impl TermFilter for JapaneseProperNounFilter {
    fn inscope(&self, term: &Term) -> bool {
        is_japanese_text(&term.key())
    }

    fn is_candidate(&self, scoped_term: &Term) -> bool {
        !scoped_term.morphemes().iter().all(|m| self.is_name_part(m))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishProperNounFilter {
    classifier: EnglishClassifier,
}

impl EnglishProperNounFilter {
    fn is_name_part(&self, morpheme: &Morpheme) -> bool {
        self.classifier.is_region_or_person(morpheme)
            || self.classifier.is_adposition(morpheme)
            || self.classifier.is_connector_symbol(morpheme)
    }
}

impl TermFilter for EnglishProperNounFilter {
    fn inscope(&self, term: &Term) -> bool {
        !contains_japanese(&term.key())
    }

    fn is_candidate(&self, scoped_term: &Term) -> bool {
        !scoped_term.morphemes().iter().all(|m| self.is_name_part(m))
    }
}
