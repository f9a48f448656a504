use std::collections::HashMap;

use slides_term_analysis::TermConcat;
use slides_term_types::{DomainCandidateDict, DomainTermRanking, ScoredTerm, extended_log10};

use crate::rankingdata::{HitsRankingData, font_weight};

const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-9;

/// Hub and authority scores of morphemes on the adjacency graph of a
/// domain's candidates, each normalized so the largest is `1.0`.
///
/// An edge `a -> b` is weighted by how often `a` directly precedes `b` inside
/// a candidate. A good hub precedes good authorities; a good authority
/// follows good hubs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HubAuthority {
    pub hub: HashMap<String, f64>,
    pub authority: HashMap<String, f64>,
}

impl HubAuthority {
    pub fn from_concat(concat: &TermConcat) -> Self {
        let edges = concat.sorted_pairs();
        let mut hub: HashMap<String, f64> = edges
            .iter()
            .map(|(left, _, _)| (left.to_string(), 1.0))
            .collect();
        let mut authority: HashMap<String, f64> = edges
            .iter()
            .map(|(_, right, _)| (right.to_string(), 1.0))
            .collect();

        for _ in 0..MAX_ITERATIONS {
            let mut next_authority: HashMap<String, f64> = HashMap::with_capacity(authority.len());
            for &(left, right, count) in &edges {
                *next_authority.entry(right.to_owned()).or_insert(0.0) +=
                    count as f64 * hub.get(left).copied().unwrap_or(0.0);
            }
            normalize_max(&mut next_authority);

            let mut next_hub: HashMap<String, f64> = HashMap::with_capacity(hub.len());
            for &(left, right, count) in &edges {
                *next_hub.entry(left.to_owned()).or_insert(0.0) +=
                    count as f64 * next_authority.get(right).copied().unwrap_or(0.0);
            }
            normalize_max(&mut next_hub);

            let delta = max_delta(&hub, &next_hub).max(max_delta(&authority, &next_authority));
            hub = next_hub;
            authority = next_authority;
            if delta < TOLERANCE {
                break;
            }
        }

        Self { hub, authority }
    }

    pub fn hub(&self, surface: &str) -> f64 {
        self.hub.get(surface).copied().unwrap_or(0.0)
    }

    pub fn authority(&self, surface: &str) -> f64 {
        self.authority.get(surface).copied().unwrap_or(0.0)
    }
}

fn normalize_max(scores: &mut HashMap<String, f64>) {
    let max = scores.values().copied().fold(0.0, f64::max);
    if max > 0.0 {
        scores.values_mut().for_each(|score| *score /= max);
    }
}

fn max_delta(before: &HashMap<String, f64>, after: &HashMap<String, f64>) -> f64 {
    after
        .iter()
        .map(|(key, value)| (value - before.get(key).copied().unwrap_or(0.0)).abs())
        .fold(0.0, f64::max)
}

/// `(Π (1 + hub(m))(1 + authority(m)))^(1/2n)`, in `[1, 2]`. `1.0` for an
/// empty term.
pub(crate) fn hits_factor<'a>(
    surfaces: impl ExactSizeIterator<Item = &'a str>,
    hub_authority: &HubAuthority,
) -> f64 {
    let n = surfaces.len();
    if n == 0 {
        return 1.0;
    }
    let log_sum: f64 = surfaces
        .map(|surface| {
            (1.0 + hub_authority.hub(surface)).ln() + (1.0 + hub_authority.authority(surface)).ln()
        })
        .sum();
    (log_sum / (2 * n) as f64).exp()
}

/// Frequency weighted by the hub and authority scores of a term's morphemes.
#[derive(Clone, Copy, Debug, Default)]
pub struct HitsRanker;

impl HitsRanker {
    pub fn rank_terms(
        &self,
        candidates: &DomainCandidateDict<'_>,
        ranking_data: &HitsRankingData,
    ) -> DomainTermRanking {
        let scores = candidates
            .iter()
            .map(|candidate| {
                let key = candidate.key();
                let surfaces = candidate.morphemes().iter().map(|m| m.surface_form.as_str());
                let h = hits_factor(surfaces, &ranking_data.hub_authority);
                let maxsize = font_weight(ranking_data.term_maxsize.as_ref(), &key, 0.0);
                let freq = ranking_data.term_freq(&key) as f64;
                let score = extended_log10(maxsize * freq * h);
                ScoredTerm::new(key, score)
            })
            .collect();
        DomainTermRanking::from_scores(candidates.domain(), scores)
    }
}
