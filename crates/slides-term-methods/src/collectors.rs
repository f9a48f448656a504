//! Collectors run the analyzers once per domain and package what a ranker
//! needs.

use slides_term_analysis::{TermCharFontAnalyzer, TermConcatAnalyzer, TermOccurrenceAnalyzer};
use slides_term_types::DomainCandidates;
use tracing::{debug, warn};

use crate::rankers::HubAuthority;
use crate::rankingdata::{
    FlrRankingData, FlrhRankingData, HitsRankingData, LfIdfRankingData, MdpRankingData,
    TfIdfRankingData,
};

pub trait RankingDataCollector: Send + Sync {
    type Data: Send + Sync;

    fn collect(&self, domain: &DomainCandidates) -> Self::Data;
}

#[derive(Clone, Copy, Debug)]
pub struct TfIdfRankingDataCollector {
    collect_charfont: bool,
    occurrence: TermOccurrenceAnalyzer,
    char_font: TermCharFontAnalyzer,
}

impl TfIdfRankingDataCollector {
    pub fn new(collect_charfont: bool, ignore_augmented: bool) -> Self {
        Self {
            collect_charfont,
            occurrence: TermOccurrenceAnalyzer::new(ignore_augmented),
            char_font: TermCharFontAnalyzer::new(ignore_augmented),
        }
    }
}

impl RankingDataCollector for TfIdfRankingDataCollector {
    type Data = TfIdfRankingData;

    fn collect(&self, domain: &DomainCandidates) -> TfIdfRankingData {
        let term_freq = self.occurrence.analyze_term_freq(domain);
        let doc_freq = self.occurrence.analyze_doc_term_freq(domain);
        let term_maxsize = self
            .collect_charfont
            .then(|| self.char_font.analyze_term_maxsize(domain));
        debug!(
            "collected tfidf data for {}: {} documents, {} terms",
            domain.domain,
            domain.num_documents(),
            term_freq.len()
        );
        TfIdfRankingData {
            domain: domain.domain.clone(),
            term_freq,
            doc_freq,
            num_docs: domain.num_documents(),
            term_maxsize,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LfIdfRankingDataCollector {
    collect_charfont: bool,
    occurrence: TermOccurrenceAnalyzer,
    char_font: TermCharFontAnalyzer,
}

impl LfIdfRankingDataCollector {
    pub fn new(collect_charfont: bool, ignore_augmented: bool) -> Self {
        Self {
            collect_charfont,
            occurrence: TermOccurrenceAnalyzer::new(ignore_augmented),
            char_font: TermCharFontAnalyzer::new(ignore_augmented),
        }
    }
}

impl RankingDataCollector for LfIdfRankingDataCollector {
    type Data = LfIdfRankingData;

    fn collect(&self, domain: &DomainCandidates) -> LfIdfRankingData {
        let occurrence = self.occurrence.analyze(domain);
        let term_maxsize = self
            .collect_charfont
            .then(|| self.char_font.analyze_term_maxsize(domain));
        debug!(
            "collected lfidf data for {}: {} terms, {} linguistic sequences",
            domain.domain,
            occurrence.term_freq.len(),
            occurrence.lingu_freq.len()
        );
        LfIdfRankingData {
            domain: domain.domain.clone(),
            term_freq: occurrence.term_freq,
            doc_freq: occurrence.doc_term_freq,
            lingu_freq: occurrence.lingu_freq,
            num_docs: domain.num_documents(),
            term_maxsize,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MdpRankingDataCollector {
    collect_charfont: bool,
    occurrence: TermOccurrenceAnalyzer,
    char_font: TermCharFontAnalyzer,
}

impl MdpRankingDataCollector {
    pub fn new(collect_charfont: bool, ignore_augmented: bool) -> Self {
        Self {
            collect_charfont,
            occurrence: TermOccurrenceAnalyzer::new(ignore_augmented),
            char_font: TermCharFontAnalyzer::new(ignore_augmented),
        }
    }
}

impl RankingDataCollector for MdpRankingDataCollector {
    type Data = MdpRankingData;

    fn collect(&self, domain: &DomainCandidates) -> MdpRankingData {
        let term_freq = self.occurrence.analyze_term_freq(domain);
        let term_maxsize = self
            .collect_charfont
            .then(|| self.char_font.analyze_term_maxsize(domain));
        let data = MdpRankingData::new(domain.domain.clone(), term_freq, term_maxsize);
        if data.num_terms == 0 {
            warn!("domain {} has no counted terms", domain.domain);
        } else {
            debug!(
                "collected mdp data for {}: {} occurrences",
                domain.domain, data.num_terms
            );
        }
        data
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FlrRankingDataCollector {
    collect_charfont: bool,
    occurrence: TermOccurrenceAnalyzer,
    concat: TermConcatAnalyzer,
    char_font: TermCharFontAnalyzer,
}

impl FlrRankingDataCollector {
    pub fn new(collect_charfont: bool, ignore_augmented: bool) -> Self {
        Self {
            collect_charfont,
            occurrence: TermOccurrenceAnalyzer::new(ignore_augmented),
            concat: TermConcatAnalyzer::new(ignore_augmented),
            char_font: TermCharFontAnalyzer::new(ignore_augmented),
        }
    }
}

impl RankingDataCollector for FlrRankingDataCollector {
    type Data = FlrRankingData;

    fn collect(&self, domain: &DomainCandidates) -> FlrRankingData {
        FlrRankingData {
            domain: domain.domain.clone(),
            term_freq: self.occurrence.analyze_term_freq(domain),
            concat: self.concat.analyze(domain),
            term_maxsize: self
                .collect_charfont
                .then(|| self.char_font.analyze_term_maxsize(domain)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HitsRankingDataCollector {
    collect_charfont: bool,
    occurrence: TermOccurrenceAnalyzer,
    concat: TermConcatAnalyzer,
    char_font: TermCharFontAnalyzer,
}

impl HitsRankingDataCollector {
    pub fn new(collect_charfont: bool, ignore_augmented: bool) -> Self {
        Self {
            collect_charfont,
            occurrence: TermOccurrenceAnalyzer::new(ignore_augmented),
            concat: TermConcatAnalyzer::new(ignore_augmented),
            char_font: TermCharFontAnalyzer::new(ignore_augmented),
        }
    }
}

impl RankingDataCollector for HitsRankingDataCollector {
    type Data = HitsRankingData;

    fn collect(&self, domain: &DomainCandidates) -> HitsRankingData {
        let concat = self.concat.analyze(domain);
        HitsRankingData {
            domain: domain.domain.clone(),
            term_freq: self.occurrence.analyze_term_freq(domain),
            hub_authority: HubAuthority::from_concat(&concat),
            term_maxsize: self
                .collect_charfont
                .then(|| self.char_font.analyze_term_maxsize(domain)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FlrhRankingDataCollector {
    collect_charfont: bool,
    occurrence: TermOccurrenceAnalyzer,
    concat: TermConcatAnalyzer,
    char_font: TermCharFontAnalyzer,
}

impl FlrhRankingDataCollector {
    pub fn new(collect_charfont: bool, ignore_augmented: bool) -> Self {
        Self {
            collect_charfont,
            occurrence: TermOccurrenceAnalyzer::new(ignore_augmented),
            concat: TermConcatAnalyzer::new(ignore_augmented),
            char_font: TermCharFontAnalyzer::new(ignore_augmented),
        }
    }
}

impl RankingDataCollector for FlrhRankingDataCollector {
    type Data = FlrhRankingData;

    fn collect(&self, domain: &DomainCandidates) -> FlrhRankingData {
        let concat = self.concat.analyze(domain);
        FlrhRankingData {
            domain: domain.domain.clone(),
            term_freq: self.occurrence.analyze_term_freq(domain),
            hub_authority: HubAuthority::from_concat(&concat),
            concat,
            term_maxsize: self
                .collect_charfont
                .then(|| self.char_font.analyze_term_maxsize(domain)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn mdp_num_terms_sums_frequencies() {
        let d = domain(
            "a",
            vec![vec![term(&["deep", "learning"], 20.0), term(&["learning"], 10.0)]],
        );
        let data = MdpRankingDataCollector::new(true, true).collect(&d);
        assert_eq!(data.term_freq("learning"), 2);
        assert_eq!(data.num_terms, 3);
        assert_eq!(data.term_maxsize.as_ref().unwrap()["learning"], 20.0);
    }

    #[test]
    fn lfidf_counts_linguistic_sequences() {
        let d = domain(
            "a",
            vec![
                vec![term(&["deep", "learning"], 20.0)],
                vec![term(&["graph", "theory"], 18.0), term(&["graph"], 18.0)],
            ],
        );
        let data = LfIdfRankingDataCollector::new(true, true).collect(&d);
        let noun_noun = term(&["x", "y"], 1.0).linguistic_sequence();
        let noun = term(&["x"], 1.0).linguistic_sequence();
        assert_eq!(data.lingu_freq(&noun_noun), 2);
        // `graph` alone and inside `graphtheory`; `deep` is not a candidate.
        assert_eq!(data.lingu_freq(&noun), 2);
        assert_eq!(data.doc_freq("graph"), 1);
        assert_eq!(data.num_docs, 2);
    }

    #[test]
    fn graph_collectors_share_the_adjacency_graph() {
        let d = domain(
            "a",
            vec![vec![term(&["graph", "theory"], 20.0), term(&["graph", "search"], 20.0)]],
        );
        let hits = HitsRankingDataCollector::new(false, true).collect(&d);
        let flrh = FlrhRankingDataCollector::new(false, true).collect(&d);
        assert_eq!(hits.hub_authority, flrh.hub_authority);
        assert!((hits.hub_authority.hub("graph") - 1.0).abs() < 1e-12);
        assert_eq!(flrh.concat.right("graph"), 2);
        assert!(hits.term_maxsize.is_none());
    }

    #[test]
    fn charfont_collection_is_optional() {
        let d = domain("a", vec![vec![term(&["graph"], 20.0)], vec![]]);
        let data = TfIdfRankingDataCollector::new(false, true).collect(&d);
        assert!(data.term_maxsize.is_none());
        assert_eq!(data.num_docs, 2);
        assert_eq!(data.doc_freq("graph"), 1);
    }
}
