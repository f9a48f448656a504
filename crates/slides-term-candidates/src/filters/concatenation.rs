use slides_term_types::{Morpheme, Term};

use super::TermFilter;
use crate::chars::contains_japanese;
use crate::classifier::{EnglishClassifier, JapaneseClassifier, MorphemeClassifier};

/// Rejects Japanese morpheme runs that cannot stand as a phrase: dangling
/// particles, auxiliaries, prefixes, suffixes, or stacked connectors.
#[derive(Clone, Copy, Debug, Default)]
pub struct JapaneseConcatenationFilter {
    classifier: JapaneseClassifier,
}

impl JapaneseConcatenationFilter {
    fn is_joint_like(&self, morpheme: &Morpheme) -> bool {
        self.classifier.is_particle(morpheme) || self.classifier.is_connector_symbol(morpheme)
    }

    fn is_valid_head(&self, morpheme: &Morpheme) -> bool {
        let c = &self.classifier;
        !(c.is_particle(morpheme)
            || c.is_auxiliary_verb(morpheme)
            || c.is_connector_symbol(morpheme)
            || c.is_suffix(morpheme))
    }

    fn is_valid_tail(&self, morpheme: &Morpheme) -> bool {
        let c = &self.classifier;
        !(c.is_particle(morpheme)
            || c.is_auxiliary_verb(morpheme)
            || c.is_connector_symbol(morpheme)
            || c.is_prefix(morpheme))
    }
}

impl TermFilter for JapaneseConcatenationFilter {
    fn inscope(&self, term: &Term) -> bool {
        contains_japanese(&term.key())
    }

    fn is_candidate(&self, scoped_term: &Term) -> bool {
        let morphemes = scoped_term.morphemes();
        let (Some(first), Some(last)) = (morphemes.first(), morphemes.last()) else {
            return false;
        };
        self.is_valid_head(first)
            && self.is_valid_tail(last)
            && morphemes
                .windows(2)
                .all(|pair| !(self.is_joint_like(&pair[0]) && self.is_joint_like(&pair[1])))
    }
}

const EN_TAIL_POS: &[&str] = &["NOUN", "PROPN", "NUM", "SYM", "X"];

/// Rejects English runs that start or end on a function word or connector,
/// end on a non-nominal, or stack two connectors.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishConcatenationFilter {
    classifier: EnglishClassifier,
}

impl EnglishConcatenationFilter {
    fn is_joint_like(&self, morpheme: &Morpheme) -> bool {
        self.classifier.is_adposition(morpheme) || self.classifier.is_connector_symbol(morpheme)
    }

    fn is_edge_breaker(&self, morpheme: &Morpheme) -> bool {
        self.is_joint_like(morpheme) || self.classifier.is_coordinating_conjunction(morpheme)
    }
}

impl TermFilter for EnglishConcatenationFilter {
    fn inscope(&self, term: &Term) -> bool {
        !contains_japanese(&term.key())
    }

    fn is_candidate(&self, scoped_term: &Term) -> bool {
        let morphemes = scoped_term.morphemes();
        let (Some(first), Some(last)) = (morphemes.first(), morphemes.last()) else {
            return false;
        };
        if self.is_edge_breaker(first) || self.is_edge_breaker(last) {
            return false;
        }
        if !EN_TAIL_POS.contains(&last.pos.as_str()) {
            return false;
        }
        morphemes
            .windows(2)
            .all(|pair| !(self.is_joint_like(&pair[0]) && self.is_joint_like(&pair[1])))
    }
}
