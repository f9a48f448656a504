use serde::{Deserialize, Serialize};
use slides_term_types::{
    DomainCandidateDict, DomainTermRanking, SCORE_FLOOR, ScoredTerm, extended_log10,
};

use crate::rankingdata::{MdpRankingData, font_weight};

/// Reduces a term's per-domain z-values to one score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCompiler {
    /// Specific relative to every other domain.
    #[default]
    Min,
    /// Specific relative to at least one other domain.
    Max,
    Mean,
}

impl ScoreCompiler {
    /// `None` when there is nothing to compare against.
    pub fn compile(self, scores: impl IntoIterator<Item = f64>) -> Option<f64> {
        let scores = scores.into_iter();
        match self {
            ScoreCompiler::Min => scores.reduce(f64::min),
            ScoreCompiler::Max => scores.reduce(f64::max),
            ScoreCompiler::Mean => {
                let (sum, count) = scores.fold((0.0, 0usize), |(sum, n), s| (sum + s, n + 1));
                (count > 0).then(|| sum / count as f64)
            }
        }
    }
}

/// Multi-domain pertinence: how much more prominent a term is in its own
/// domain than in each of the others, as a pooled-variance z-value.
#[derive(Clone, Copy, Debug, Default)]
pub struct MdpRanker {
    compile_scores: ScoreCompiler,
}

impl MdpRanker {
    pub fn new(compile_scores: ScoreCompiler) -> Self {
        Self { compile_scores }
    }

    pub fn rank_terms(
        &self,
        candidates: &DomainCandidateDict<'_>,
        ranking_data: &MdpRankingData,
        other_ranking_data_list: &[&MdpRankingData],
    ) -> DomainTermRanking {
        let scores = candidates
            .iter()
            .map(|candidate| {
                let key = candidate.key();
                let score = self
                    .compile_scores
                    .compile(
                        other_ranking_data_list
                            .iter()
                            .map(|other| z_value(&key, ranking_data, other)),
                    )
                    .unwrap_or(SCORE_FLOOR);
                ScoredTerm::new(key, score)
            })
            .collect();
        DomainTermRanking::from_scores(candidates.domain(), scores)
    }
}

fn z_value(candidate: &str, ours: &MdpRankingData, theirs: &MdpRankingData) -> f64 {
    let our_maxsize = font_weight(ours.term_maxsize.as_ref(), candidate, 1.0);
    let their_maxsize = font_weight(theirs.term_maxsize.as_ref(), candidate, 0.0);

    let our_freq = ours.term_freq(candidate) as f64;
    let their_freq = theirs.term_freq(candidate) as f64;
    let (our_total, their_total) = (ours.num_terms as f64, theirs.num_terms as f64);

    let our_prob = ratio(our_freq, our_total);
    let their_prob = ratio(their_freq, their_total);
    let pooled_prob = ratio(our_freq + their_freq, our_total + their_total);

    let numerator = our_maxsize * our_prob - their_maxsize * their_prob;
    let denominator = pooled_prob
        * (1.0 - pooled_prob)
        * (ratio(1.0, our_total) + ratio(1.0, their_total));
    if denominator <= 0.0 {
        return SCORE_FLOOR;
    }
    extended_log10(numerator / denominator)
}

/// `a / b`, or zero for an empty domain.
fn ratio(a: f64, b: f64) -> f64 {
    if b > 0.0 { a / b } else { 0.0 }
}
