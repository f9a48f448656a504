//! Ranking methods pair a collector with a ranker.

use rayon::prelude::*;
use slides_term_types::{DomainCandidates, DomainTermRanking};
use tracing::{info, warn};

use crate::collectors::{
    FlrRankingDataCollector, FlrhRankingDataCollector, HitsRankingDataCollector,
    LfIdfRankingDataCollector, MdpRankingDataCollector, RankingDataCollector,
    TfIdfRankingDataCollector,
};
use crate::config::{GraphMethodConfig, LfIdfConfig, MdpConfig, MethodConfig, TfIdfConfig};
use crate::rankers::{FlrRanker, FlrhRanker, HitsRanker, LfIdfRanker, MdpRanker, TfIdfRanker};
use crate::rankingdata::MdpRankingData;

/// A method that ranks each domain on its own statistics.
pub trait SingleDomainRankingMethod: Send + Sync {
    fn rank_terms(&self, domain: &DomainCandidates) -> DomainTermRanking;
}

/// A method that ranks each domain against the others. Rankings come back
/// in the order of `domains`.
pub trait MultiDomainRankingMethod: Send + Sync {
    fn rank_terms(&self, domains: &[DomainCandidates]) -> Vec<DomainTermRanking>;
}

#[derive(Clone, Copy, Debug)]
pub struct TfIdfMethod {
    collector: TfIdfRankingDataCollector,
    ranker: TfIdfRanker,
    ignore_augmented: bool,
}

impl TfIdfMethod {
    pub fn new(config: &TfIdfConfig) -> Self {
        Self {
            collector: TfIdfRankingDataCollector::new(
                config.consider_charfont,
                config.ignore_augmented,
            ),
            ranker: TfIdfRanker::new(config.tfmode, config.idfmode),
            ignore_augmented: config.ignore_augmented,
        }
    }
}

impl MultiDomainRankingMethod for TfIdfMethod {
    fn rank_terms(&self, domains: &[DomainCandidates]) -> Vec<DomainTermRanking> {
        let ranking_data_list: Vec<_> = domains
            .par_iter()
            .map(|domain| self.collector.collect(domain))
            .collect();

        domains
            .par_iter()
            .zip(ranking_data_list.par_iter())
            .map(|(domain, ranking_data)| {
                let candidates = domain.candidate_dict(self.ignore_augmented);
                self.ranker
                    .rank_terms(&candidates, ranking_data, &ranking_data_list)
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LfIdfMethod {
    collector: LfIdfRankingDataCollector,
    ranker: LfIdfRanker,
    ignore_augmented: bool,
}

impl LfIdfMethod {
    pub fn new(config: &LfIdfConfig) -> Self {
        Self {
            collector: LfIdfRankingDataCollector::new(
                config.consider_charfont,
                config.ignore_augmented,
            ),
            ranker: LfIdfRanker::new(config.lfmode, config.idfmode),
            ignore_augmented: config.ignore_augmented,
        }
    }
}

impl MultiDomainRankingMethod for LfIdfMethod {
    fn rank_terms(&self, domains: &[DomainCandidates]) -> Vec<DomainTermRanking> {
        let ranking_data_list: Vec<_> = domains
            .par_iter()
            .map(|domain| self.collector.collect(domain))
            .collect();

        domains
            .par_iter()
            .zip(ranking_data_list.par_iter())
            .map(|(domain, ranking_data)| {
                let candidates = domain.candidate_dict(self.ignore_augmented);
                self.ranker
                    .rank_terms(&candidates, ranking_data, &ranking_data_list)
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MdpMethod {
    collector: MdpRankingDataCollector,
    ranker: MdpRanker,
    ignore_augmented: bool,
}

impl MdpMethod {
    pub fn new(config: &MdpConfig) -> Self {
        Self {
            collector: MdpRankingDataCollector::new(
                config.consider_charfont,
                config.ignore_augmented,
            ),
            ranker: MdpRanker::new(config.compile_scores),
            ignore_augmented: config.ignore_augmented,
        }
    }
}

impl MultiDomainRankingMethod for MdpMethod {
    fn rank_terms(&self, domains: &[DomainCandidates]) -> Vec<DomainTermRanking> {
        if domains.len() < 2 {
            warn!(
                "mdp compares domains against each other; with {} domain(s) every score is the floor",
                domains.len()
            );
        }

        let ranking_data_list: Vec<MdpRankingData> = domains
            .par_iter()
            .map(|domain| self.collector.collect(domain))
            .collect();

        domains
            .par_iter()
            .enumerate()
            .map(|(index, domain)| {
                let others: Vec<&MdpRankingData> = ranking_data_list
                    .iter()
                    .enumerate()
                    .filter(|(other, _)| *other != index)
                    .map(|(_, data)| data)
                    .collect();
                let candidates = domain.candidate_dict(self.ignore_augmented);
                self.ranker
                    .rank_terms(&candidates, &ranking_data_list[index], &others)
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FlrMethod {
    collector: FlrRankingDataCollector,
    ranker: FlrRanker,
    ignore_augmented: bool,
}

impl FlrMethod {
    pub fn new(config: &GraphMethodConfig) -> Self {
        Self {
            collector: FlrRankingDataCollector::new(
                config.consider_charfont,
                config.ignore_augmented,
            ),
            ranker: FlrRanker,
            ignore_augmented: config.ignore_augmented,
        }
    }
}

impl SingleDomainRankingMethod for FlrMethod {
    fn rank_terms(&self, domain: &DomainCandidates) -> DomainTermRanking {
        let ranking_data = self.collector.collect(domain);
        let candidates = domain.candidate_dict(self.ignore_augmented);
        self.ranker.rank_terms(&candidates, &ranking_data)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HitsMethod {
    collector: HitsRankingDataCollector,
    ranker: HitsRanker,
    ignore_augmented: bool,
}

impl HitsMethod {
    pub fn new(config: &GraphMethodConfig) -> Self {
        Self {
            collector: HitsRankingDataCollector::new(
                config.consider_charfont,
                config.ignore_augmented,
            ),
            ranker: HitsRanker,
            ignore_augmented: config.ignore_augmented,
        }
    }
}

impl SingleDomainRankingMethod for HitsMethod {
    fn rank_terms(&self, domain: &DomainCandidates) -> DomainTermRanking {
        let ranking_data = self.collector.collect(domain);
        let candidates = domain.candidate_dict(self.ignore_augmented);
        self.ranker.rank_terms(&candidates, &ranking_data)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FlrhMethod {
    collector: FlrhRankingDataCollector,
    ranker: FlrhRanker,
    ignore_augmented: bool,
}

impl FlrhMethod {
    pub fn new(config: &GraphMethodConfig) -> Self {
        Self {
            collector: FlrhRankingDataCollector::new(
                config.consider_charfont,
                config.ignore_augmented,
            ),
            ranker: FlrhRanker,
            ignore_augmented: config.ignore_augmented,
        }
    }
}

impl SingleDomainRankingMethod for FlrhMethod {
    fn rank_terms(&self, domain: &DomainCandidates) -> DomainTermRanking {
        let ranking_data = self.collector.collect(domain);
        let candidates = domain.candidate_dict(self.ignore_augmented);
        self.ranker.rank_terms(&candidates, &ranking_data)
    }
}

/// Any configured method, run over a set of domains.
#[derive(Clone, Copy, Debug)]
pub enum RankingMethod {
    TfIdf(TfIdfMethod),
    LfIdf(LfIdfMethod),
    Flr(FlrMethod),
    Hits(HitsMethod),
    Flrh(FlrhMethod),
    Mdp(MdpMethod),
}

impl RankingMethod {
    pub fn from_config(config: &MethodConfig) -> Self {
        match config {
            MethodConfig::Tfidf(config) => RankingMethod::TfIdf(TfIdfMethod::new(config)),
            MethodConfig::Lfidf(config) => RankingMethod::LfIdf(LfIdfMethod::new(config)),
            MethodConfig::Flr(config) => RankingMethod::Flr(FlrMethod::new(config)),
            MethodConfig::Hits(config) => RankingMethod::Hits(HitsMethod::new(config)),
            MethodConfig::Flrh(config) => RankingMethod::Flrh(FlrhMethod::new(config)),
            MethodConfig::Mdp(config) => RankingMethod::Mdp(MdpMethod::new(config)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RankingMethod::TfIdf(_) => "tfidf",
            RankingMethod::LfIdf(_) => "lfidf",
            RankingMethod::Flr(_) => "flr",
            RankingMethod::Hits(_) => "hits",
            RankingMethod::Flrh(_) => "flrh",
            RankingMethod::Mdp(_) => "mdp",
        }
    }

    /// Rankings are returned in the order of `domains`.
    pub fn rank_domains(&self, domains: &[DomainCandidates]) -> Vec<DomainTermRanking> {
        info!("ranking {} domain(s) with {}", domains.len(), self.name());
        let rankings: Vec<DomainTermRanking> = match self {
            RankingMethod::TfIdf(method) => method.rank_terms(domains),
            RankingMethod::LfIdf(method) => method.rank_terms(domains),
            RankingMethod::Mdp(method) => method.rank_terms(domains),
            RankingMethod::Flr(method) => rank_each(method, domains),
            RankingMethod::Hits(method) => rank_each(method, domains),
            RankingMethod::Flrh(method) => rank_each(method, domains),
        };
        for ranking in &rankings {
            info!("{}: {} ranked terms", ranking.domain, ranking.len());
        }
        rankings
    }
}

fn rank_each(
    method: &impl SingleDomainRankingMethod,
    domains: &[DomainCandidates],
) -> Vec<DomainTermRanking> {
    domains
        .par_iter()
        .map(|domain| method.rank_terms(domain))
        .collect()
}

impl From<&MethodConfig> for RankingMethod {
    fn from(config: &MethodConfig) -> Self {
        RankingMethod::from_config(config)
    }
}
