use std::collections::HashMap;

use slides_term_types::DomainCandidates;

use crate::runner::AnalysisRunner;

/// Tracks the largest font size each known sub-candidate was seen in.
///
/// A sub-range inherits the font size of the candidate it was cut from.
/// Terms absent from the result should be read as size `0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TermCharFontAnalyzer {
    runner: AnalysisRunner,
}

impl TermCharFontAnalyzer {
    pub fn new(ignore_augmented: bool) -> Self {
        Self {
            runner: AnalysisRunner::new(ignore_augmented),
        }
    }

    pub fn analyze_term_maxsize(&self, domain: &DomainCandidates) -> HashMap<String, f64> {
        let dict = self.runner.candidate_dict(domain);
        self.runner.run_through_known_subcandidates(
            domain,
            &dict,
            HashMap::new(),
            |maxsize: &mut HashMap<String, f64>, occ| match maxsize.get_mut(occ.key) {
                Some(size) => *size = size.max(occ.term.fontsize),
                None => {
                    maxsize.insert(occ.key.to_owned(), occ.term.fontsize);
                }
            },
        )
    }
}
