use slides_term_types::Term;

use super::Splitter;
use crate::chars::{is_latin_letter, is_latin_letter_or_hyphen};
use crate::filters::FilterCombiner;

/// Detaches a trailing one-letter code from a name (`Algorithm - A`).
///
/// The head is kept only if it is itself a candidate; otherwise the term is
/// returned whole so a name is never silently dropped. The symbol fragment is
/// kept only if it passes the filters on its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolNameSplitter;

impl Splitter for SymbolNameSplitter {
    fn split(&self, term: Term, filter: &FilterCombiner) -> Vec<Term> {
        let n = term.len();
        if n < 2 {
            return vec![term];
        }

        let morphemes = term.morphemes();
        let last = &morphemes[n - 1].surface_form;
        let second_last = &morphemes[n - 2].surface_form;
        if !is_latin_letter_or_hyphen(last) || is_latin_letter(second_last) {
            return vec![term];
        }

        let (Some(name), Some(symbol)) = (term.slice(0..n - 1), term.slice(n - 1..n)) else {
            return vec![term];
        };
        if !filter.is_candidate(&name) {
            return vec![term];
        }

        let mut fragments = vec![name];
        if filter.is_candidate(&symbol) {
            fragments.push(symbol);
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::*;
    use slides_term_types::Morpheme;

    fn algorithm_a() -> Term {
        term(vec![
            noun("Algorithm"),
            Morpheme::new("-", "PUNCT"),
            Morpheme::new("A", "PROPN"),
        ])
    }

    fn keys(terms: &[Term]) -> Vec<String> {
        terms.iter().map(Term::key).collect()
    }

    #[test]
    fn splits_trailing_symbol_when_both_parts_pass() {
        let out = SymbolNameSplitter.split(algorithm_a(), &FilterCombiner::accept_all());
        assert_eq!(keys(&out), vec!["Algorithm-", "A"]);
    }

    #[test]
    fn keeps_term_whole_when_name_is_rejected() {
        // The default English concatenation filter rejects a trailing hyphen.
        let out = SymbolNameSplitter.split(algorithm_a(), &FilterCombiner::default());
        assert_eq!(keys(&out), vec!["Algorithm-A"]);
    }

    #[test]
    fn drops_rejected_symbol_but_keeps_name() {
        let t = term(vec![noun("Method"), Morpheme::new("B", "PROPN")]);
        let out = SymbolNameSplitter.split(t, &FilterCombiner::default());
        assert_eq!(keys(&out), vec!["Method"]);
    }

    #[test]
    fn hyphen_before_the_symbol_does_not_block_the_split() {
        // Only a single Latin letter in second-to-last position keeps the term whole.
        let t = term(vec![
            noun("x"),
            Morpheme::new("-", "PUNCT"),
            Morpheme::new("-", "PUNCT"),
        ]);
        let out = SymbolNameSplitter.split(t.clone(), &FilterCombiner::accept_all());
        assert_eq!(keys(&out), vec!["x-", "-"]);

        // The default filters reject the `x-` head, so the term stays whole.
        let out = SymbolNameSplitter.split(t, &FilterCombiner::default());
        assert_eq!(keys(&out), vec!["x--"]);
    }

    #[test]
    fn ignores_letter_pairs_and_short_terms() {
        let pair = term(vec![noun("x"), noun("y")]);
        assert_eq!(keys(&SymbolNameSplitter.split(pair, &FilterCombiner::accept_all())), vec!["xy"]);
        let single = term(vec![noun("z")]);
        assert_eq!(keys(&SymbolNameSplitter.split(single, &FilterCombiner::accept_all())), vec!["z"]);
    }
}
