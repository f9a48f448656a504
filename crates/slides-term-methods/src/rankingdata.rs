use std::collections::HashMap;

use slides_term_analysis::TermConcat;
use slides_term_types::LinguSeq;

use crate::rankers::HubAuthority;

/// Per-domain statistics read by [`TfIdfRanker`](crate::TfIdfRanker).
#[derive(Clone, Debug, PartialEq)]
pub struct TfIdfRankingData {
    pub domain: String,
    pub term_freq: HashMap<String, usize>,
    pub doc_freq: HashMap<String, usize>,
    pub num_docs: usize,
    /// `None` when font sizes were not collected.
    pub term_maxsize: Option<HashMap<String, f64>>,
}

impl TfIdfRankingData {
    pub fn term_freq(&self, term: &str) -> usize {
        self.term_freq.get(term).copied().unwrap_or(0)
    }

    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }
}

/// Per-domain statistics read by [`LfIdfRanker`](crate::LfIdfRanker).
#[derive(Clone, Debug, PartialEq)]
pub struct LfIdfRankingData {
    pub domain: String,
    pub term_freq: HashMap<String, usize>,
    pub doc_freq: HashMap<String, usize>,
    /// Occurrences of each linguistic sequence.
    pub lingu_freq: HashMap<LinguSeq, usize>,
    pub num_docs: usize,
    pub term_maxsize: Option<HashMap<String, f64>>,
}

impl LfIdfRankingData {
    pub fn term_freq(&self, term: &str) -> usize {
        self.term_freq.get(term).copied().unwrap_or(0)
    }

    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    pub fn lingu_freq(&self, lingu_seq: &LinguSeq) -> usize {
        self.lingu_freq.get(lingu_seq).copied().unwrap_or(0)
    }
}

/// Per-domain statistics read by [`MdpRanker`](crate::MdpRanker).
#[derive(Clone, Debug, PartialEq)]
pub struct MdpRankingData {
    pub domain: String,
    pub term_freq: HashMap<String, usize>,
    /// Sum of `term_freq`, embedded occurrences included.
    pub num_terms: usize,
    pub term_maxsize: Option<HashMap<String, f64>>,
}

impl MdpRankingData {
    pub fn new(
        domain: impl Into<String>,
        term_freq: HashMap<String, usize>,
        term_maxsize: Option<HashMap<String, f64>>,
    ) -> Self {
        let num_terms = term_freq.values().sum();
        Self {
            domain: domain.into(),
            term_freq,
            num_terms,
            term_maxsize,
        }
    }

    pub fn term_freq(&self, term: &str) -> usize {
        self.term_freq.get(term).copied().unwrap_or(0)
    }
}

/// Per-domain statistics read by [`FlrRanker`](crate::FlrRanker).
#[derive(Clone, Debug, PartialEq)]
pub struct FlrRankingData {
    pub domain: String,
    pub term_freq: HashMap<String, usize>,
    pub concat: TermConcat,
    pub term_maxsize: Option<HashMap<String, f64>>,
}

impl FlrRankingData {
    pub fn term_freq(&self, term: &str) -> usize {
        self.term_freq.get(term).copied().unwrap_or(0)
    }
}

/// Per-domain statistics read by [`HitsRanker`](crate::HitsRanker).
#[derive(Clone, Debug, PartialEq)]
pub struct HitsRankingData {
    pub domain: String,
    pub term_freq: HashMap<String, usize>,
    pub hub_authority: HubAuthority,
    pub term_maxsize: Option<HashMap<String, f64>>,
}

impl HitsRankingData {
    pub fn term_freq(&self, term: &str) -> usize {
        self.term_freq.get(term).copied().unwrap_or(0)
    }
}

/// Per-domain statistics read by [`FlrhRanker`](crate::FlrhRanker).
#[derive(Clone, Debug, PartialEq)]
pub struct FlrhRankingData {
    pub domain: String,
    pub term_freq: HashMap<String, usize>,
    pub concat: TermConcat,
    pub hub_authority: HubAuthority,
    pub term_maxsize: Option<HashMap<String, f64>>,
}

impl FlrhRankingData {
    pub fn term_freq(&self, term: &str) -> usize {
        self.term_freq.get(term).copied().unwrap_or(0)
    }
}

/// Font weight of `term`: `1.0` when sizes were not collected, `absent` when
/// they were but the term was never seen.
pub(crate) fn font_weight(term_maxsize: Option<&HashMap<String, f64>>, term: &str, absent: f64) -> f64 {
    match term_maxsize {
        Some(maxsize) => maxsize.get(term).copied().unwrap_or(absent),
        None => 1.0,
    }
}
