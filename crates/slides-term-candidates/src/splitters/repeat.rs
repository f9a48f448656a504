use std::iter;
use std::ops::Range;

use slides_term_types::{Morpheme, Term};

use super::Splitter;
use crate::classifier::{EnglishClassifier, JapaneseClassifier, MorphemeClassifier};
use crate::filters::FilterCombiner;

/// Splits run-on terms at repeated morphemes.
///
/// Slide text often concatenates several phrases that share a word
/// (`graph search graph coloring`). A repeat marks a phrase boundary:
///
/// 1. Backward: scanning from the tail, whenever the morpheme just before
///    position `i` equals the last morpheme of the current window `[i, j)`,
///    the window is split off and `j` moves to `i`.
/// 2. Forward, on what is left: whenever the morpheme at `j` equals the first
///    morpheme of the current segment, `[start, j)` is split off.
///
/// Fragments come back in their original order (forward fragments, center,
/// backward fragments), so with an accept-all filter they concatenate back to
/// the input. Terms holding a particle, adposition, or connector are already
/// structured phrases and are returned untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct RepeatSplitter {
    ja: JapaneseClassifier,
    en: EnglishClassifier,
}

impl RepeatSplitter {
    fn contains_connector_morpheme(&self, term: &Term) -> bool {
        term.morphemes().iter().any(|m| {
            self.ja.is_modifying_particle(m)
                || self.ja.is_connector_symbol(m)
                || self.en.is_adposition(m)
                || self.en.is_connector_symbol(m)
        })
    }
}

impl Splitter for RepeatSplitter {
    fn split(&self, term: Term, filter: &FilterCombiner) -> Vec<Term> {
        if self.contains_connector_morpheme(&term) {
            return vec![term];
        }

        let morphemes = term.morphemes();
        let (head_end, backward) = backward_split(morphemes);
        let (forward, center) = forward_split(morphemes, head_end);

        forward
            .into_iter()
            .chain(iter::once(center))
            .chain(backward)
            .filter_map(|range| term.slice(range))
            .filter(|fragment| filter.is_candidate(fragment))
            .collect()
    }
}

/// Returns the end of the remaining head and the split-off tail windows in
/// original order. Only positions with a preceding morpheme are examined, so
/// the head is never empty.
fn backward_split(morphemes: &[Morpheme]) -> (usize, Vec<Range<usize>>) {
    let mut fragments = Vec::new();
    let mut j = morphemes.len();
    for i in (1..morphemes.len()).rev() {
        if morphemes[i - 1].surface_form == morphemes[j - 1].surface_form {
            fragments.push(i..j);
            j = i;
        }
    }
    fragments.reverse();
    (j, fragments)
}

/// Splits `morphemes[..end]` at every recurrence of the current segment's
/// first morpheme; the last segment is the center.
fn forward_split(morphemes: &[Morpheme], end: usize) -> (Vec<Range<usize>>, Range<usize>) {
    let mut fragments = Vec::new();
    let mut start = 0;
    for j in 1..end {
        if morphemes[start].surface_form == morphemes[j].surface_form {
            fragments.push(start..j);
            start = j;
        }
    }
    (fragments, start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::*;

    fn keys(terms: &[Term]) -> Vec<String> {
        terms.iter().map(Term::key).collect()
    }

    fn nouns(surfaces: &[&str]) -> Term {
        term(surfaces.iter().map(|s| noun(s)).collect())
    }

    #[test]
    fn forward_repeat_splits_leading_phrase() {
        let splitter = RepeatSplitter::default();
        let out = splitter.split(nouns(&["A", "B", "A", "C"]), &FilterCombiner::accept_all());
        assert_eq!(keys(&out), vec!["AB", "AC"]);
    }

    #[test]
    fn backward_repeat_splits_trailing_phrase() {
        let splitter = RepeatSplitter::default();
        let out = splitter.split(nouns(&["X", "A", "Y", "A"]), &FilterCombiner::accept_all());
        assert_eq!(keys(&out), vec!["XA", "YA"]);
    }

    #[test]
    fn fragments_reconstruct_the_term() {
        let splitter = RepeatSplitter::default();
        let cases: &[&[&str]] = &[
            &["graph", "search", "graph", "coloring", "graph"],
            &["A", "B", "A", "B"],
            &["A", "A", "A"],
            &["deep", "learning"],
            &["x"],
            &["p", "q", "p", "r", "s", "r"],
        ];
        for surfaces in cases {
            let original = nouns(surfaces);
            let out = splitter.split(original.clone(), &FilterCombiner::accept_all());
            let rebuilt: Vec<&str> = out
                .iter()
                .flat_map(|t| t.morphemes().iter().map(|m| m.surface_form.as_str()))
                .collect();
            assert_eq!(&rebuilt, surfaces, "case {surfaces:?}");
            assert!(out.iter().all(|t| !t.is_empty()));
        }
    }

    #[test]
    fn connector_terms_are_kept_whole() {
        let splitter = RepeatSplitter::default();
        let t = term(vec![noun("A"), Morpheme::new("of", "ADP"), noun("A")]);
        let out = splitter.split(t.clone(), &FilterCombiner::accept_all());
        assert_eq!(keys(&out), vec![t.key()]);
    }

    #[test]
    fn rejected_fragments_are_dropped() {
        let splitter = RepeatSplitter::default();
        // The leading fragment ends in two bare letters and fails the symbol-like filter.
        let out = splitter.split(
            nouns(&["model", "x", "y", "model", "training"]),
            &FilterCombiner::default(),
        );
        assert_eq!(keys(&out), vec!["modeltraining"]);
    }

    #[test]
    fn fragments_inherit_metadata() {
        let splitter = RepeatSplitter::default();
        let mut t = nouns(&["A", "B", "A", "C"]);
        t.fontsize = 28.0;
        let out = splitter.split(t, &FilterCombiner::accept_all());
        assert!(out.iter().all(|f| f.fontsize == 28.0 && !f.augmented));
    }
}
