//! Statistics over a domain's candidate terms.
//!
//! Every analyzer walks the domain through an [`AnalysisRunner`]. The
//! occurrence and font analyzers count each contiguous sub-range of a
//! candidate whose string is itself a candidate somewhere in the domain, so a
//! term embedded in a longer phrase is still counted.

mod charfont;
mod concat;
mod occurrence;
mod runner;

pub use charfont::TermCharFontAnalyzer;
pub use concat::{TermConcat, TermConcatAnalyzer};
pub use occurrence::{TermOccurrence, TermOccurrenceAnalyzer};
pub use runner::{AnalysisRunner, Occurrence};

#[cfg(test)]
pub(crate) mod test_support {
    use slides_term_types::{DocumentCandidates, DomainCandidates, Morpheme, PageCandidates, Term};

    pub fn term(surfaces: &[&str], fontsize: f64) -> Term {
        Term::new(
            surfaces.iter().map(|s| Morpheme::new(*s, "NOUN")).collect(),
            fontsize,
            false,
        )
        .unwrap()
    }

    /// One page per document, holding the given terms.
    pub fn domain(documents: Vec<Vec<Term>>) -> DomainCandidates {
        DomainCandidates {
            domain: "test".into(),
            documents: documents
                .into_iter()
                .enumerate()
                .map(|(i, candidates)| DocumentCandidates {
                    path: format!("doc{i}.pdf"),
                    pages: vec![PageCandidates {
                        page_num: 1,
                        candidates,
                    }],
                })
                .collect(),
        }
    }
}
