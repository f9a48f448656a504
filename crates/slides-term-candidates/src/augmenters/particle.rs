use slides_term_types::{Morpheme, Term};

use super::Augmenter;
use crate::classifier::{EnglishClassifier, JapaneseClassifier, MorphemeClassifier};

/// `機械学習の理論` yields `機械学習` and `理論`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JapaneseModifyingParticleAugmenter {
    classifier: JapaneseClassifier,
}

impl Augmenter for JapaneseModifyingParticleAugmenter {
    fn augment(&self, term: &Term) -> Vec<Term> {
        joint_segments(term, |m| self.classifier.is_modifier_joint(m))
    }
}

/// `theory of machine learning` yields `theory` and `machine learning`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishAdpositionAugmenter {
    classifier: EnglishClassifier,
}

impl Augmenter for EnglishAdpositionAugmenter {
    fn augment(&self, term: &Term) -> Vec<Term> {
        joint_segments(term, |m| self.classifier.is_modifier_joint(m))
    }
}

/// Every run of consecutive joint-delimited segments shorter than the whole
/// term. Joints at the cut points are dropped; inner joints are kept.
fn joint_segments(term: &Term, is_joint: impl Fn(&Morpheme) -> bool) -> Vec<Term> {
    let joints: Vec<usize> = term
        .morphemes()
        .iter()
        .enumerate()
        .filter(|(_, m)| is_joint(m))
        .map(|(i, _)| i)
        .collect();
    if joints.is_empty() {
        return Vec::new();
    }

    // Segment k spans starts[k]..ends[k].
    let starts: Vec<usize> = std::iter::once(0).chain(joints.iter().map(|j| j + 1)).collect();
    let ends: Vec<usize> = joints.iter().copied().chain(std::iter::once(term.len())).collect();
    let num_segments = starts.len();

    let mut variants = Vec::new();
    for length in 1..num_segments {
        for first in 0..=num_segments - length {
            let range = starts[first]..ends[first + length - 1];
            if range.is_empty() {
                continue;
            }
            if let Some(variant) = term.slice(range) {
                variants.push(variant);
            }
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::*;

    fn keys(terms: &[Term]) -> Vec<String> {
        terms.iter().map(Term::key).collect()
    }

    #[test]
    fn japanese_splits_at_particles() {
        let t = term(vec![
            ja_noun("機械"),
            ja_noun("学習"),
            ja_no(),
            ja_noun("理論"),
        ]);
        let out = JapaneseModifyingParticleAugmenter::default().augment(&t);
        assert_eq!(keys(&out), vec!["機械学習", "理論"]);
    }

    #[test]
    fn english_keeps_inner_joints_in_longer_runs() {
        let of = || Morpheme::new("of", "ADP");
        let t = term(vec![
            noun("proof"),
            of(),
            noun("bound"),
            of(),
            noun("error"),
        ]);
        let out = EnglishAdpositionAugmenter::default().augment(&t);
        assert_eq!(
            keys(&out),
            vec!["proof", "bound", "error", "proofofbound", "boundoferror"]
        );
    }

    #[test]
    fn edge_joints_produce_no_empty_segments() {
        let t = term(vec![ja_no(), ja_noun("学習")]);
        let out = JapaneseModifyingParticleAugmenter::default().augment(&t);
        assert_eq!(keys(&out), vec!["学習"]);
    }

    #[test]
    fn terms_without_joints_yield_nothing() {
        let t = term(vec![noun("graph"), noun("theory")]);
        assert!(EnglishAdpositionAugmenter::default().augment(&t).is_empty());
    }
}
