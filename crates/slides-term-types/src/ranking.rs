use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// Score assigned to non-positive (or NaN) log arguments.
///
/// Finite and far below any real `log10`, so degenerate terms sort last
/// without aborting a ranking run.
pub const SCORE_FLOOR: f64 = -1.0e20;

/// `log10` that never fails: non-positive and NaN inputs map to
/// [`SCORE_FLOOR`], positive infinity to `f64::MAX`.
pub fn extended_log10(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        SCORE_FLOOR
    } else if x.is_infinite() {
        f64::MAX
    } else {
        x.log10()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
}

impl ScoredTerm {
    pub fn new(term: impl Into<String>, score: f64) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// Terms of one domain in descending score order, each term at most once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainTermRanking {
    pub domain: String,
    pub ranking: Vec<ScoredTerm>,
}

impl DomainTermRanking {
    /// Order `scores` by descending score.
    ///
    /// Duplicate term strings keep their first entry. Ties keep encounter
    /// order (the sort is stable), so output is deterministic.
    pub fn from_scores(domain: impl Into<String>, scores: Vec<ScoredTerm>) -> Self {
        let mut seen = HashSet::new();
        let mut ranking: Vec<ScoredTerm> = scores
            .into_iter()
            .filter(|scored| seen.insert(scored.term.clone()))
            .collect();
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self {
            domain: domain.into(),
            ranking,
        }
    }

    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

/// Accepted technical terms of a domain with their scores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainTermScoreDict {
    pub domain: String,
    pub term_scores: BTreeMap<String, f64>,
}
