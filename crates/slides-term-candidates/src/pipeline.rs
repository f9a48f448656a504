use slides_term_types::{DocumentCandidates, DomainCandidates, PageCandidates, Term};
use tracing::{debug, info};

use crate::augmenters::AugmenterCombiner;
use crate::config::CandidateConfig;
use crate::filters::FilterCombiner;
use crate::splitters::SplitterCombiner;

/// Filter, split, then augment: turns raw extracted phrases into candidates.
#[derive(Debug, Default)]
pub struct CandidatePipeline {
    filter: FilterCombiner,
    splitter: SplitterCombiner,
    augmenter: AugmenterCombiner,
}

impl CandidatePipeline {
    pub fn new(config: &CandidateConfig) -> Self {
        Self {
            filter: FilterCombiner::from_kinds(&config.term_filters),
            splitter: SplitterCombiner::from_kinds(&config.splitters),
            augmenter: AugmenterCombiner::from_kinds(&config.augmenters),
        }
    }

    pub fn filter(&self) -> &FilterCombiner {
        &self.filter
    }

    /// Returns the accepted fragments of `term`, each followed by its
    /// augmented variants. A rejected term yields nothing.
    pub fn refine(&self, term: Term) -> Vec<Term> {
        if !self.filter.is_candidate(&term) {
            return Vec::new();
        }
        let mut refined = Vec::new();
        for fragment in self.splitter.split(term, &self.filter) {
            let variants = self.augmenter.augment(&fragment, &self.filter);
            refined.push(fragment);
            refined.extend(variants);
        }
        refined
    }

    pub fn refine_domain(&self, raw: &DomainCandidates) -> DomainCandidates {
        let mut raw_count = 0usize;
        let mut accepted = 0usize;
        let documents = raw
            .documents
            .iter()
            .map(|document| {
                let pages = document
                    .pages
                    .iter()
                    .map(|page| {
                        let candidates: Vec<Term> = page
                            .candidates
                            .iter()
                            .cloned()
                            .flat_map(|term| self.refine(term))
                            .collect();
                        raw_count += page.candidates.len();
                        accepted += candidates.len();
                        PageCandidates {
                            page_num: page.page_num,
                            candidates,
                        }
                    })
                    .collect();
                debug!("refined candidates of {}", document.path);
                DocumentCandidates {
                    path: document.path.clone(),
                    pages,
                }
            })
            .collect();

        info!(
            "domain {}: {accepted} candidates from {raw_count} raw terms",
            raw.domain
        );
        DomainCandidates {
            domain: raw.domain.clone(),
            documents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::*;
    use slides_term_types::Morpheme;

    fn keys(terms: &[Term]) -> Vec<String> {
        terms.iter().map(Term::key).collect()
    }

    #[test]
    fn refine_rejects_splits_and_augments() {
        let pipeline = CandidatePipeline::default();

        assert!(pipeline.refine(term(vec![noun("x")])).is_empty());

        let of = Morpheme::new("of", "ADP");
        let out = pipeline.refine(term(vec![noun("theory"), of, noun("computation")]));
        assert_eq!(keys(&out), vec!["theoryofcomputation", "theory", "computation"]);
        assert!(!out[0].augmented);
        assert!(out[1..].iter().all(|t| t.augmented));
    }

    #[test]
    fn refine_domain_preserves_structure() {
        let pipeline = CandidatePipeline::new(&CandidateConfig::default());
        let raw = DomainCandidates {
            domain: "ml".into(),
            documents: vec![DocumentCandidates {
                path: "intro.pdf".into(),
                pages: vec![
                    PageCandidates {
                        page_num: 1,
                        candidates: vec![term(vec![noun("neural"), noun("network")])],
                    },
                    PageCandidates {
                        page_num: 4,
                        candidates: vec![term(vec![Morpheme::new("2024", "NUM")])],
                    },
                ],
            }],
        };
        let refined = pipeline.refine_domain(&raw);
        assert_eq!(refined.domain, "ml");
        assert_eq!(refined.documents[0].path, "intro.pdf");
        let pages = &refined.documents[0].pages;
        assert_eq!(pages.iter().map(|p| p.page_num).collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(keys(&pages[0].candidates), vec!["neuralnetwork"]);
        assert!(pages[1].candidates.is_empty());
    }
}
