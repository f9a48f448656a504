use std::collections::BTreeMap;

use slides_term_types::{DomainTermRanking, DomainTermScoreDict};
use thiserror::Error;

pub const DEFAULT_ACCEPTANCE_RATE: f64 = 0.9;

#[derive(Debug, Error, PartialEq)]
pub enum ConverterError {
    #[error("acceptance rate must be within (0, 1), got {0}")]
    AcceptanceRate(f64),
}

/// Keeps the terms scoring strictly above the score found at
/// `floor(acceptance_rate * len)` in a descending ranking.
#[derive(Clone, Copy, Debug)]
pub struct RankingToScoreDictConverter {
    acceptance_rate: f64,
}

impl Default for RankingToScoreDictConverter {
    fn default() -> Self {
        Self {
            acceptance_rate: DEFAULT_ACCEPTANCE_RATE,
        }
    }
}

impl RankingToScoreDictConverter {
    pub fn new(acceptance_rate: f64) -> Result<Self, ConverterError> {
        if !(acceptance_rate > 0.0 && acceptance_rate < 1.0) {
            return Err(ConverterError::AcceptanceRate(acceptance_rate));
        }
        Ok(Self { acceptance_rate })
    }

    pub fn acceptance_rate(&self) -> f64 {
        self.acceptance_rate
    }

    pub fn convert(&self, ranking: &DomainTermRanking) -> DomainTermScoreDict {
        let threshold_index = (self.acceptance_rate * ranking.len() as f64).floor() as usize;
        let term_scores = match ranking.ranking.get(threshold_index) {
            Some(threshold) => ranking
                .ranking
                .iter()
                .filter(|scored| scored.score > threshold.score)
                .map(|scored| (scored.term.clone(), scored.score))
                .collect(),
            None => BTreeMap::new(),
        };
        DomainTermScoreDict {
            domain: ranking.domain.clone(),
            term_scores,
        }
    }
}
