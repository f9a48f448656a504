//! Term ranking methods.
//!
//! A method collects per-domain statistics with the analyzers from
//! `slides-term-analysis`, scores every distinct candidate of a domain, and
//! returns a [`DomainTermRanking`](slides_term_types::DomainTermRanking)
//! sorted by descending score. [`RankingToScoreDictConverter`] then keeps the
//! top share of a ranking.
//!
//! | method | kind | score |
//! |---|---|---|
//! | TF-IDF | multi-domain | `log10(maxsize * tf * idf)`, idf pooled over domains |
//! | LF-IDF | multi-domain | `log10(maxsize * tf * lf * idf)`, lf from the term's linguistic sequence |
//! | FLR | single-domain | `log10(maxsize * freq * LR)` |
//! | HITS | single-domain | `log10(maxsize * freq * H)`, H from morpheme hub/authority scores |
//! | FLRH | single-domain | `log10(maxsize * freq * LR * H)` |
//! | MDP | multi-domain | reduction of pooled-variance z-values against each other domain |
//!
//! Non-positive score arguments map to
//! [`SCORE_FLOOR`](slides_term_types::SCORE_FLOOR) instead of failing.

pub mod collectors;
mod config;
mod converter;
mod methods;
pub mod rankers;
mod rankingdata;

pub use collectors::RankingDataCollector;
pub use config::{
    ConfigError, GraphMethodConfig, LfIdfConfig, MdpConfig, MethodConfig, TfIdfConfig,
};
pub use converter::{ConverterError, DEFAULT_ACCEPTANCE_RATE, RankingToScoreDictConverter};
pub use methods::{
    FlrMethod, FlrhMethod, HitsMethod, LfIdfMethod, MdpMethod, MultiDomainRankingMethod,
    RankingMethod, SingleDomainRankingMethod, TfIdfMethod,
};
pub use rankers::{
    FlrRanker, FlrhRanker, HitsRanker, HubAuthority, IdfMode, LfIdfRanker, MdpRanker,
    ScoreCompiler, TfIdfRanker, TfMode,
};
pub use rankingdata::{
    FlrRankingData, FlrhRankingData, HitsRankingData, LfIdfRankingData, MdpRankingData,
    TfIdfRankingData,
};

#[cfg(test)]
pub(crate) mod test_support {
    use slides_term_types::{DocumentCandidates, DomainCandidates, Morpheme, PageCandidates, Term};

    pub fn term(surfaces: &[&str], fontsize: f64) -> Term {
        Term::new(
            surfaces.iter().map(|s| Morpheme::new(*s, "NOUN")).collect(),
            fontsize,
            false,
        )
        .unwrap()
    }

    /// One page per document.
    pub fn domain(name: &str, documents: Vec<Vec<Term>>) -> DomainCandidates {
        DomainCandidates {
            domain: name.into(),
            documents: documents
                .into_iter()
                .enumerate()
                .map(|(i, candidates)| DocumentCandidates {
                    path: format!("{name}/{i}.pdf"),
                    pages: vec![PageCandidates {
                        page_num: 1,
                        candidates,
                    }],
                })
                .collect(),
        }
    }
}
