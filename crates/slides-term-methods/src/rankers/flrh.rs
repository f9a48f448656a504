use slides_term_types::{DomainCandidateDict, DomainTermRanking, ScoredTerm, extended_log10};

use super::flr::lr_factor;
use super::hits::hits_factor;
use crate::rankingdata::{FlrhRankingData, font_weight};

/// FLR with the neighbor-count mean further weighted by the HITS factor:
/// `log10(maxsize * freq * LR * H)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlrhRanker;

impl FlrhRanker {
    pub fn rank_terms(
        &self,
        candidates: &DomainCandidateDict<'_>,
        ranking_data: &FlrhRankingData,
    ) -> DomainTermRanking {
        let scores = candidates
            .iter()
            .map(|candidate| {
                let key = candidate.key();
                let surfaces = || candidate.morphemes().iter().map(|m| m.surface_form.as_str());
                let lr = lr_factor(surfaces(), &ranking_data.concat);
                let h = hits_factor(surfaces(), &ranking_data.hub_authority);
                let maxsize = font_weight(ranking_data.term_maxsize.as_ref(), &key, 0.0);
                let freq = ranking_data.term_freq(&key) as f64;
                ScoredTerm::new(key, extended_log10(maxsize * freq * lr * h))
            })
            .collect();
        DomainTermRanking::from_scores(candidates.domain(), scores)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use slides_term_analysis::TermConcat;
    use slides_term_types::SCORE_FLOOR;

    use super::*;
    use crate::rankers::HubAuthority;
    use crate::test_support::*;

    #[test]
    fn combines_flr_and_hits_factors() {
        let concat = TermConcat {
            left_freq: HashMap::from([("theory".to_string(), 1)]),
            right_freq: HashMap::from([("graph".to_string(), 1)]),
            pair_freq: HashMap::from([(("graph".to_string(), "theory".to_string()), 1)]),
        };
        let data = FlrhRankingData {
            domain: "d".into(),
            term_freq: HashMap::from([("graphtheory".to_string(), 3)]),
            hub_authority: HubAuthority::from_concat(&concat),
            concat,
            term_maxsize: None,
        };
        let d = domain("d", vec![vec![term(&["graph", "theory"], 10.0), term(&["tree"], 10.0)]]);
        let candidates = d.candidate_dict(true);
        let ranking = FlrhRanker.rank_terms(&candidates, &data);

        // LR = (1 * 2 * 2 * 1)^(1/4) = sqrt(2); H = sqrt(2) likewise.
        assert_eq!(ranking.ranking[0].term, "graphtheory");
        assert!((ranking.ranking[0].score - 6f64.log10()).abs() < 1e-12);
        assert_eq!(ranking.ranking[1].score, SCORE_FLOOR);
    }
}
