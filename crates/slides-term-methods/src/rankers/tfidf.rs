use serde::{Deserialize, Serialize};
use slides_term_types::{DomainCandidateDict, DomainTermRanking, ScoredTerm, extended_log10};

use crate::rankingdata::{TfIdfRankingData, font_weight};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TfMode {
    #[default]
    Natural,
    Log,
    /// `0.5 + 0.5 * tf / max_tf` over all compared domains.
    Augmented,
    /// Log frequency normalized by the log of the cross-domain average.
    Logave,
    Binary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdfMode {
    #[default]
    Natural,
    Smooth,
    Prob,
    Unary,
}

/// Scores a domain's candidates against document counts pooled over every
/// compared domain.
#[derive(Clone, Copy, Debug, Default)]
pub struct TfIdfRanker {
    tfmode: TfMode,
    idfmode: IdfMode,
}

impl TfIdfRanker {
    pub fn new(tfmode: TfMode, idfmode: IdfMode) -> Self {
        Self { tfmode, idfmode }
    }

    /// `ranking_data_list` holds every compared domain, including the one
    /// described by `ranking_data`.
    pub fn rank_terms(
        &self,
        candidates: &DomainCandidateDict<'_>,
        ranking_data: &TfIdfRankingData,
        ranking_data_list: &[TfIdfRankingData],
    ) -> DomainTermRanking {
        let scores = candidates
            .iter()
            .map(|candidate| self.score(&candidate.key(), ranking_data, ranking_data_list))
            .collect();
        DomainTermRanking::from_scores(candidates.domain(), scores)
    }

    fn score(
        &self,
        candidate: &str,
        ranking_data: &TfIdfRankingData,
        ranking_data_list: &[TfIdfRankingData],
    ) -> ScoredTerm {
        let pooled_tf: Vec<usize> = ranking_data_list
            .iter()
            .map(|data| data.term_freq(candidate))
            .collect();
        let tf = tf_weight(self.tfmode, ranking_data.term_freq(candidate), &pooled_tf);

        let num_docs = ranking_data_list.iter().map(|data| data.num_docs).sum();
        let df = ranking_data_list
            .iter()
            .map(|data| data.doc_freq(candidate))
            .sum();
        let idf = idf_weight(self.idfmode, num_docs, df);

        let maxsize = font_weight(ranking_data.term_maxsize.as_ref(), candidate, 0.0);
        ScoredTerm::new(candidate, extended_log10(maxsize * tf * idf))
    }
}

/// Weight of a raw count `tf`; `pooled` holds the same key's count in every
/// compared domain.
pub(crate) fn tf_weight(mode: TfMode, tf: usize, pooled: &[usize]) -> f64 {
    if tf == 0 {
        // Every mode but `augmented` maps zero to zero.
        return match mode {
            TfMode::Augmented => 0.5,
            _ => 0.0,
        };
    }

    let tf = tf as f64;
    match mode {
        TfMode::Natural => tf,
        TfMode::Log => tf.log10(),
        TfMode::Augmented => {
            let max_tf = pooled.iter().copied().max().unwrap_or(0).max(1) as f64;
            0.5 + 0.5 * tf / max_tf
        }
        TfMode::Logave => {
            let tf_sum: usize = pooled.iter().sum();
            let ave_tf = tf_sum as f64 / pooled.len().max(1) as f64;
            (1.0 + tf.log10()) / (1.0 + ave_tf.log10())
        }
        TfMode::Binary => 1.0,
    }
}

/// Inverse document frequency over `num_docs` pooled documents.
pub(crate) fn idf_weight(mode: IdfMode, num_docs: usize, df: usize) -> f64 {
    if df == 0 {
        return match mode {
            IdfMode::Unary => 1.0,
            _ => 0.0,
        };
    }

    let (num_docs, df) = (num_docs as f64, df as f64);
    match mode {
        IdfMode::Natural => (num_docs / df).log10(),
        IdfMode::Smooth => (num_docs / (df + 1.0)).log10() + 1.0,
        IdfMode::Prob if num_docs > df => ((num_docs - df) / df).log10().max(0.0),
        IdfMode::Prob => 0.0,
        IdfMode::Unary => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn data(domain: &str, tf: usize, df: usize, num_docs: usize, size: f64) -> TfIdfRankingData {
        TfIdfRankingData {
            domain: domain.into(),
            term_freq: HashMap::from([("t".to_string(), tf)]),
            doc_freq: HashMap::from([("t".to_string(), df)]),
            num_docs,
            term_maxsize: Some(HashMap::from([("t".to_string(), size)])),
        }
    }

    #[test]
    fn natural_tf_is_monotonic_for_fixed_idf() {
        let ranker = TfIdfRanker::new(TfMode::Natural, IdfMode::Unary);
        let mut last = f64::NEG_INFINITY;
        for tf in 1..20 {
            let own = data("a", tf, 1, 4, 16.0);
            let list = vec![own.clone(), data("b", 0, 0, 4, 0.0)];
            let score = ranker.score("t", &own, &list).score;
            assert!(score >= last, "tf {tf}: {score} < {last}");
            last = score;
        }
    }

    #[test]
    fn idf_modes_pool_documents_across_domains() {
        let list = vec![data("a", 5, 3, 10, 24.0), data("b", 1, 1, 8, 14.0)];
        // tf 5 and font 24 are shared by every mode, so the scores differ by idf only.
        let idf = |mode| {
            let score = TfIdfRanker::new(TfMode::Natural, mode)
                .score("t", &list[0], &list)
                .score;
            10f64.powf(score) / (5.0 * 24.0)
        };
        assert!((idf(IdfMode::Natural) - (18.0f64 / 4.0).log10()).abs() < 1e-9);
        assert!((idf(IdfMode::Smooth) - ((18.0f64 / 5.0).log10() + 1.0)).abs() < 1e-9);
        assert!((idf(IdfMode::Prob) - (14.0f64 / 4.0).log10()).abs() < 1e-9);
        assert!((idf(IdfMode::Unary) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn idf_of_unseen_and_saturated_keys() {
        assert_eq!(idf_weight(IdfMode::Natural, 10, 0), 0.0);
        assert_eq!(idf_weight(IdfMode::Unary, 10, 0), 1.0);
        assert_eq!(idf_weight(IdfMode::Prob, 4, 4), 0.0);
    }

    #[test]
    fn tf_modes() {
        let pooled = [10, 20];
        let tf = |mode| tf_weight(mode, 10, &pooled);
        assert_eq!(tf(TfMode::Natural), 10.0);
        assert!((tf(TfMode::Log) - 1.0).abs() < 1e-12);
        assert!((tf(TfMode::Augmented) - 0.75).abs() < 1e-12);
        assert!((tf(TfMode::Logave) - 2.0 / (1.0 + 15.0f64.log10())).abs() < 1e-12);
        assert_eq!(tf(TfMode::Binary), 1.0);
    }

    #[test]
    fn degenerate_inputs_fall_to_the_floor() {
        let ranker = TfIdfRanker::default();
        // Present in every document: log10(1) == 0.
        let own = data("a", 3, 2, 2, 12.0);
        let score = ranker.score("t", &own, std::slice::from_ref(&own)).score;
        assert_eq!(score, slides_term_types::SCORE_FLOOR);
    }

    #[test]
    fn unknown_terms_score_the_floor() {
        let own = data("a", 3, 2, 2, 12.0);
        let score = TfIdfRanker::default()
            .score("missing", &own, std::slice::from_ref(&own))
            .score;
        assert_eq!(score, slides_term_types::SCORE_FLOOR);
    }
}
