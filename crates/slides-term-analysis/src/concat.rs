use std::collections::HashMap;

use slides_term_types::DomainCandidates;

use crate::runner::AnalysisRunner;

/// How often each morpheme has a neighbor inside a candidate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TermConcat {
    /// Occurrences with a morpheme immediately to the left.
    pub left_freq: HashMap<String, usize>,
    /// Occurrences with a morpheme immediately to the right.
    pub right_freq: HashMap<String, usize>,
    /// Adjacent `(left, right)` surface pairs.
    pub pair_freq: HashMap<(String, String), usize>,
}

impl TermConcat {
    pub fn left(&self, surface: &str) -> usize {
        self.left_freq.get(surface).copied().unwrap_or(0)
    }

    pub fn right(&self, surface: &str) -> usize {
        self.right_freq.get(surface).copied().unwrap_or(0)
    }

    /// Adjacency edges sorted by surface pair, so graph walks over them are
    /// reproducible.
    pub fn sorted_pairs(&self) -> Vec<(&str, &str, usize)> {
        let mut pairs: Vec<(&str, &str, usize)> = self
            .pair_freq
            .iter()
            .map(|((left, right), &count)| (left.as_str(), right.as_str(), count))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TermConcatAnalyzer {
    runner: AnalysisRunner,
}

impl TermConcatAnalyzer {
    pub fn new(ignore_augmented: bool) -> Self {
        Self {
            runner: AnalysisRunner::new(ignore_augmented),
        }
    }

    pub fn analyze(&self, domain: &DomainCandidates) -> TermConcat {
        self.runner
            .run_through_candidates(domain, TermConcat::default(), |concat, occ| {
                let morphemes = occ.term.morphemes;
                for (i, morpheme) in morphemes.iter().enumerate() {
                    if i > 0 {
                        *concat
                            .left_freq
                            .entry(morpheme.surface_form.clone())
                            .or_insert(0) += 1;
                    }
                    if i + 1 < morphemes.len() {
                        *concat
                            .right_freq
                            .entry(morpheme.surface_form.clone())
                            .or_insert(0) += 1;
                    }
                }
                for pair in morphemes.windows(2) {
                    let edge = (pair[0].surface_form.clone(), pair[1].surface_form.clone());
                    *concat.pair_freq.entry(edge).or_insert(0) += 1;
                }
            })
    }
}
