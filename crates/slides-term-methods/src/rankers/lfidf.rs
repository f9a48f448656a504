use slides_term_types::{DomainCandidateDict, DomainTermRanking, ScoredTerm, Term, extended_log10};

use super::tfidf::{IdfMode, TfMode, idf_weight, tf_weight};
use crate::rankingdata::{LfIdfRankingData, font_weight};

/// TF-IDF with the term frequency further weighted by how common the term's
/// linguistic sequence is in its domain:
/// `log10(maxsize * tf * lf(seq) * idf)`.
///
/// `lfmode` applies the tf weighting schemes to linguistic-sequence counts,
/// pooled over the compared domains.
#[derive(Clone, Copy, Debug, Default)]
pub struct LfIdfRanker {
    lfmode: TfMode,
    idfmode: IdfMode,
}

impl LfIdfRanker {
    pub fn new(lfmode: TfMode, idfmode: IdfMode) -> Self {
        Self { lfmode, idfmode }
    }

    /// `ranking_data_list` holds every compared domain, including the one
    /// described by `ranking_data`.
    pub fn rank_terms(
        &self,
        candidates: &DomainCandidateDict<'_>,
        ranking_data: &LfIdfRankingData,
        ranking_data_list: &[LfIdfRankingData],
    ) -> DomainTermRanking {
        let scores = candidates
            .iter()
            .map(|candidate| self.score(candidate, ranking_data, ranking_data_list))
            .collect();
        DomainTermRanking::from_scores(candidates.domain(), scores)
    }

    fn score(
        &self,
        candidate: &Term,
        ranking_data: &LfIdfRankingData,
        ranking_data_list: &[LfIdfRankingData],
    ) -> ScoredTerm {
        let key = candidate.key();
        let lingu_seq = candidate.linguistic_sequence();

        let pooled_lf: Vec<usize> = ranking_data_list
            .iter()
            .map(|data| data.lingu_freq(&lingu_seq))
            .collect();
        let lf = tf_weight(self.lfmode, ranking_data.lingu_freq(&lingu_seq), &pooled_lf);

        let num_docs = ranking_data_list.iter().map(|data| data.num_docs).sum();
        let df = ranking_data_list.iter().map(|data| data.doc_freq(&key)).sum();
        let idf = idf_weight(self.idfmode, num_docs, df);

        let tf = ranking_data.term_freq(&key) as f64;
        let maxsize = font_weight(ranking_data.term_maxsize.as_ref(), &key, 0.0);
        let score = extended_log10(maxsize * tf * lf * idf);
        ScoredTerm::new(key, score)
    }
}
