//! Rankers turn collected statistics into a descending-score term list.
//!
//! Each ranker scores the distinct candidates of one domain in encounter
//! order; [`DomainTermRanking::from_scores`](slides_term_types::DomainTermRanking::from_scores)
//! sorts them stably, so equal scores keep that order.

mod flr;
mod flrh;
mod hits;
mod lfidf;
mod mdp;
mod tfidf;

pub use flr::FlrRanker;
pub use flrh::FlrhRanker;
pub use hits::{HitsRanker, HubAuthority};
pub use lfidf::LfIdfRanker;
pub use mdp::{MdpRanker, ScoreCompiler};
pub use tfidf::{IdfMode, TfIdfRanker, TfMode};
