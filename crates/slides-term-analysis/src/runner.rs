use slides_term_types::{DomainCandidateDict, DomainCandidates, Term, TermRef};

/// One visited (sub-)candidate.
#[derive(Clone, Copy, Debug)]
pub struct Occurrence<'a> {
    /// Index of the owning document within the domain.
    pub doc_id: usize,
    pub page_num: u32,
    pub key: &'a str,
    pub term: TermRef<'a>,
}

/// Walks the candidates of a domain and folds them into a result.
#[derive(Clone, Copy, Debug)]
pub struct AnalysisRunner {
    ignore_augmented: bool,
}

impl Default for AnalysisRunner {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AnalysisRunner {
    pub fn new(ignore_augmented: bool) -> Self {
        Self { ignore_augmented }
    }

    pub fn ignore_augmented(&self) -> bool {
        self.ignore_augmented
    }

    /// The membership set analyzers restrict their counting to.
    pub fn candidate_dict<'d>(&self, domain: &'d DomainCandidates) -> DomainCandidateDict<'d> {
        domain.candidate_dict(self.ignore_augmented)
    }

    pub fn run_through_candidates<R>(
        &self,
        domain: &DomainCandidates,
        initial: R,
        mut update: impl FnMut(&mut R, Occurrence<'_>),
    ) -> R {
        let mut result = initial;
        for (doc_id, page_num, candidate) in counted_candidates(domain, self.ignore_augmented) {
            let key = candidate.key();
            update(
                &mut result,
                Occurrence {
                    doc_id,
                    page_num,
                    key: &key,
                    term: candidate.view(),
                },
            );
        }
        result
    }

    /// Visits every contiguous sub-range `[i, j)` of every candidate,
    /// `n(n+1)/2` per candidate of `n` morphemes.
    pub fn run_through_subcandidates<R>(
        &self,
        domain: &DomainCandidates,
        initial: R,
        update: impl FnMut(&mut R, Occurrence<'_>),
    ) -> R {
        self.walk_subcandidates(domain, |_| true, initial, update)
    }

    /// Like [`run_through_subcandidates`](Self::run_through_subcandidates),
    /// but only visits sub-ranges whose string is in `dict`.
    pub fn run_through_known_subcandidates<R>(
        &self,
        domain: &DomainCandidates,
        dict: &DomainCandidateDict<'_>,
        initial: R,
        update: impl FnMut(&mut R, Occurrence<'_>),
    ) -> R {
        self.walk_subcandidates(domain, |key| dict.contains(key), initial, update)
    }

    fn walk_subcandidates<R>(
        &self,
        domain: &DomainCandidates,
        accept: impl Fn(&str) -> bool,
        initial: R,
        mut update: impl FnMut(&mut R, Occurrence<'_>),
    ) -> R {
        let mut result = initial;
        // Keys grow one morpheme at a time, so one buffer serves every range.
        let mut key = String::new();
        for (doc_id, page_num, candidate) in counted_candidates(domain, self.ignore_augmented) {
            let whole = candidate.view();
            for i in 0..whole.len() {
                key.clear();
                for j in i + 1..=whole.len() {
                    key.push_str(&whole.morphemes[j - 1].surface_form);
                    if !accept(&key) {
                        continue;
                    }
                    let Some(term) = whole.sub_term(i..j) else {
                        continue;
                    };
                    update(
                        &mut result,
                        Occurrence {
                            doc_id,
                            page_num,
                            key: &key,
                            term,
                        },
                    );
                }
            }
        }
        result
    }
}

fn counted_candidates(
    domain: &DomainCandidates,
    ignore_augmented: bool,
) -> impl Iterator<Item = (usize, u32, &Term)> {
    domain
        .documents
        .iter()
        .enumerate()
        .flat_map(move |(doc_id, document)| {
            document.pages.iter().flat_map(move |page| {
                page.candidates
                    .iter()
                    .filter(move |candidate| !(ignore_augmented && candidate.augmented))
                    .map(move |candidate| (doc_id, page.page_num, candidate))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn visits_every_sub_range() {
        let d = domain(vec![vec![term(&["a", "b", "c"], 10.0)]]);
        let keys = AnalysisRunner::default().run_through_subcandidates(
            &d,
            Vec::new(),
            |keys, occ| keys.push(occ.key.to_string()),
        );
        assert_eq!(keys, vec!["a", "ab", "abc", "b", "bc", "c"]);
    }

    #[test]
    fn skips_augmented_candidates_when_asked() {
        let mut d = domain(vec![vec![term(&["a"], 10.0), term(&["b"], 10.0)]]);
        d.documents[0].pages[0].candidates[1].augmented = true;

        let count = |runner: AnalysisRunner| {
            runner.run_through_candidates(&d, 0usize, |n, _| *n += 1)
        };
        assert_eq!(count(AnalysisRunner::new(true)), 1);
        assert_eq!(count(AnalysisRunner::new(false)), 2);
    }

    #[test]
    fn known_sub_ranges_follow_the_dictionary() {
        let d = domain(vec![
            vec![term(&["graph", "search"], 10.0)],
            vec![term(&["search"], 10.0)],
        ]);
        let runner = AnalysisRunner::default();
        let dict = runner.candidate_dict(&d);
        let visited = runner.run_through_known_subcandidates(&d, &dict, Vec::new(), |v, occ| {
            v.push((occ.doc_id, occ.key.to_string()))
        });
        assert_eq!(
            visited,
            vec![
                (0, "graphsearch".to_string()),
                (0, "search".to_string()),
                (1, "search".to_string()),
            ]
        );
    }
}
