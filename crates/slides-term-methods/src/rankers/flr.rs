use slides_term_analysis::TermConcat;
use slides_term_types::{DomainCandidateDict, DomainTermRanking, ScoredTerm, extended_log10};

use crate::rankingdata::{FlrRankingData, font_weight};

/// Frequency times the geometric mean of how productive a term's morphemes
/// are as parts of longer compounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlrRanker;

impl FlrRanker {
    pub fn rank_terms(
        &self,
        candidates: &DomainCandidateDict<'_>,
        ranking_data: &FlrRankingData,
    ) -> DomainTermRanking {
        let scores = candidates
            .iter()
            .map(|candidate| {
                let key = candidate.key();
                let surfaces = candidate.morphemes().iter().map(|m| m.surface_form.as_str());
                let score = flr_score(&key, surfaces, ranking_data);
                ScoredTerm::new(key, score)
            })
            .collect();
        DomainTermRanking::from_scores(candidates.domain(), scores)
    }
}

fn flr_score<'a>(
    key: &str,
    surfaces: impl ExactSizeIterator<Item = &'a str>,
    ranking_data: &FlrRankingData,
) -> f64 {
    if surfaces.len() == 0 {
        return extended_log10(0.0);
    }
    let lr = lr_factor(surfaces, &ranking_data.concat);
    let maxsize = font_weight(ranking_data.term_maxsize.as_ref(), key, 0.0);
    let freq = ranking_data.term_freq(key) as f64;
    extended_log10(maxsize * freq * lr)
}

/// `(Π (left(m) + 1)(right(m) + 1))^(1/2n)`, computed in log space. `1.0` for
/// an empty term.
pub(crate) fn lr_factor<'a>(
    surfaces: impl ExactSizeIterator<Item = &'a str>,
    concat: &TermConcat,
) -> f64 {
    let n = surfaces.len();
    if n == 0 {
        return 1.0;
    }
    let log_sum: f64 = surfaces
        .map(|surface| {
            let left = (concat.left(surface) + 1) as f64;
            let right = (concat.right(surface) + 1) as f64;
            left.ln() + right.ln()
        })
        .sum();
    (log_sum / (2 * n) as f64).exp()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn data() -> FlrRankingData {
        FlrRankingData {
            domain: "d".into(),
            term_freq: HashMap::from([("graphtheory".to_string(), 2)]),
            concat: TermConcat {
                left_freq: HashMap::from([("theory".to_string(), 3)]),
                right_freq: HashMap::from([("graph".to_string(), 8)]),
                ..TermConcat::default()
            },
            term_maxsize: None,
        }
    }

    #[test]
    fn combines_frequency_and_neighbor_counts() {
        // LR = ((1 * 9) * (4 * 1))^(1/4) = 36^(1/4)
        let score = flr_score("graphtheory", ["graph", "theory"].into_iter(), &data());
        let expected = (2.0 * 36f64.powf(0.25)).log10();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn unseen_terms_score_the_floor() {
        let score = flr_score("tree", ["tree"].into_iter(), &data());
        assert_eq!(score, slides_term_types::SCORE_FLOOR);
    }
}
