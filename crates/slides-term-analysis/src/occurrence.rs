use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use slides_term_types::{DomainCandidates, LinguSeq};
use tracing::debug;

use crate::runner::{AnalysisRunner, Occurrence};

/// Occurrence counts of the known sub-candidates of one domain.
///
/// Every count includes occurrences embedded in a longer candidate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TermOccurrence {
    pub term_freq: HashMap<String, usize>,
    pub lingu_freq: HashMap<LinguSeq, usize>,
    /// Number of documents containing the term.
    pub doc_term_freq: HashMap<String, usize>,
    pub doc_lingu_freq: HashMap<LinguSeq, usize>,
}

#[derive(Default)]
struct OccurrenceTally {
    term_freq: HashMap<String, usize>,
    lingu_freq: HashMap<LinguSeq, usize>,
    doc_term_set: HashMap<String, HashSet<usize>>,
    doc_lingu_set: HashMap<LinguSeq, HashSet<usize>>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TermOccurrenceAnalyzer {
    runner: AnalysisRunner,
}

impl TermOccurrenceAnalyzer {
    pub fn new(ignore_augmented: bool) -> Self {
        Self {
            runner: AnalysisRunner::new(ignore_augmented),
        }
    }

    pub fn analyze(&self, domain: &DomainCandidates) -> TermOccurrence {
        let tally = self.run(domain, OccurrenceTally::default(), |tally, occ| {
            let lingu_seq = occ.term.linguistic_sequence();
            increment(&mut tally.term_freq, occ.key);
            tally
                .doc_term_set
                .entry(occ.key.to_owned())
                .or_default()
                .insert(occ.doc_id);
            tally
                .doc_lingu_set
                .entry(lingu_seq.clone())
                .or_default()
                .insert(occ.doc_id);
            *tally.lingu_freq.entry(lingu_seq).or_insert(0) += 1;
        });

        debug!(
            "domain {}: {} distinct terms, {} linguistic sequences",
            domain.domain,
            tally.term_freq.len(),
            tally.lingu_freq.len()
        );
        TermOccurrence {
            term_freq: tally.term_freq,
            lingu_freq: tally.lingu_freq,
            doc_term_freq: into_counts(tally.doc_term_set),
            doc_lingu_freq: into_counts(tally.doc_lingu_set),
        }
    }

    pub fn analyze_term_freq(&self, domain: &DomainCandidates) -> HashMap<String, usize> {
        self.run(domain, HashMap::new(), |term_freq, occ| increment(term_freq, occ.key))
    }

    pub fn analyze_lingu_freq(&self, domain: &DomainCandidates) -> HashMap<LinguSeq, usize> {
        self.run(domain, HashMap::new(), |lingu_freq, occ| {
            *lingu_freq.entry(occ.term.linguistic_sequence()).or_insert(0) += 1;
        })
    }

    pub fn analyze_doc_term_freq(&self, domain: &DomainCandidates) -> HashMap<String, usize> {
        let sets = self.run(
            domain,
            HashMap::new(),
            |sets: &mut HashMap<String, HashSet<usize>>, occ| {
                sets.entry(occ.key.to_owned()).or_default().insert(occ.doc_id);
            },
        );
        into_counts(sets)
    }

    pub fn analyze_doc_lingu_freq(&self, domain: &DomainCandidates) -> HashMap<LinguSeq, usize> {
        let sets = self.run(
            domain,
            HashMap::new(),
            |sets: &mut HashMap<LinguSeq, HashSet<usize>>, occ| {
                sets.entry(occ.term.linguistic_sequence())
                    .or_default()
                    .insert(occ.doc_id);
            },
        );
        into_counts(sets)
    }

    fn run<R>(
        &self,
        domain: &DomainCandidates,
        initial: R,
        update: impl FnMut(&mut R, Occurrence<'_>),
    ) -> R {
        let dict = self.runner.candidate_dict(domain);
        self.runner
            .run_through_known_subcandidates(domain, &dict, initial, update)
    }
}

fn increment(freq: &mut HashMap<String, usize>, key: &str) {
    match freq.get_mut(key) {
        Some(count) => *count += 1,
        None => {
            freq.insert(key.to_owned(), 1);
        }
    }
}

fn into_counts<K: Eq + Hash>(sets: HashMap<K, HashSet<usize>>) -> HashMap<K, usize> {
    sets.into_iter().map(|(key, docs)| (key, docs.len())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn counts_embedded_occurrences() {
        let d = domain(vec![
            vec![term(&["machine", "learning"], 24.0), term(&["learning"], 12.0)],
            vec![term(&["machine", "learning", "model"], 18.0)],
        ]);
        let occurrence = TermOccurrenceAnalyzer::default().analyze(&d);

        assert_eq!(occurrence.term_freq["machinelearning"], 2);
        assert_eq!(occurrence.term_freq["learning"], 3);
        assert_eq!(occurrence.term_freq["machinelearningmodel"], 1);
        // "machine" and "model" never occur as candidates on their own.
        assert!(!occurrence.term_freq.contains_key("machine"));
        assert!(!occurrence.term_freq.contains_key("model"));

        assert_eq!(occurrence.doc_term_freq["learning"], 2);
        assert_eq!(occurrence.doc_term_freq["machinelearningmodel"], 1);
    }

    #[test]
    fn linguistic_sequences_pool_structurally_equal_terms() {
        let d = domain(vec![
            vec![term(&["deep", "learning"], 10.0)],
            vec![term(&["graph", "theory"], 10.0)],
        ]);
        let analyzer = TermOccurrenceAnalyzer::default();
        let occurrence = analyzer.analyze(&d);
        let noun_noun = term(&["a", "b"], 1.0).linguistic_sequence();
        assert_eq!(occurrence.lingu_freq[&noun_noun], 2);
        assert_eq!(occurrence.doc_lingu_freq[&noun_noun], 2);
        assert_eq!(analyzer.analyze_lingu_freq(&d), occurrence.lingu_freq);
        assert_eq!(analyzer.analyze_doc_lingu_freq(&d), occurrence.doc_lingu_freq);
    }

    #[test]
    fn single_table_methods_agree_with_analyze() {
        let d = domain(vec![
            vec![term(&["a", "b"], 10.0), term(&["b"], 10.0)],
            vec![term(&["a", "b", "a"], 10.0), term(&["a"], 10.0)],
        ]);
        let analyzer = TermOccurrenceAnalyzer::default();
        let occurrence = analyzer.analyze(&d);
        assert_eq!(analyzer.analyze_term_freq(&d), occurrence.term_freq);
        assert_eq!(analyzer.analyze_doc_term_freq(&d), occurrence.doc_term_freq);
    }
}
