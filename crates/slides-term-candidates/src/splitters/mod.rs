//! Splitters break an over-long accepted term into smaller valid terms.
//!
//! Every splitter re-validates its fragments against the [`FilterCombiner`]
//! and drops the ones it rejects.

mod repeat;
mod symbol_name;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use slides_term_types::Term;

use crate::config::ConfigError;
use crate::filters::FilterCombiner;

pub use repeat::RepeatSplitter;
pub use symbol_name::SymbolNameSplitter;

pub trait Splitter: Send + Sync {
    fn split(&self, term: Term, filter: &FilterCombiner) -> Vec<Term>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitterKind {
    Repeat,
    SymbolName,
}

impl SplitterKind {
    pub const ALL: [SplitterKind; 2] = [SplitterKind::Repeat, SplitterKind::SymbolName];

    pub fn name(self) -> &'static str {
        match self {
            SplitterKind::Repeat => "repeat",
            SplitterKind::SymbolName => "symbol_name",
        }
    }

    pub fn build(self) -> Box<dyn Splitter> {
        match self {
            SplitterKind::Repeat => Box::new(RepeatSplitter::default()),
            SplitterKind::SymbolName => Box::new(SymbolNameSplitter),
        }
    }
}

impl fmt::Display for SplitterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SplitterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SplitterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::UnknownVariant {
                stage: "splitter",
                name: s.to_string(),
            })
    }
}

/// Applies splitters in sequence; each one sees every fragment of the last.
pub struct SplitterCombiner {
    splitters: Vec<Box<dyn Splitter>>,
}

impl SplitterCombiner {
    pub fn new(splitters: Vec<Box<dyn Splitter>>) -> Self {
        Self { splitters }
    }

    pub fn from_kinds(kinds: &[SplitterKind]) -> Self {
        Self::new(kinds.iter().map(|kind| kind.build()).collect())
    }

    pub fn split(&self, term: Term, filter: &FilterCombiner) -> Vec<Term> {
        let mut terms = vec![term];
        for splitter in &self.splitters {
            terms = terms
                .into_iter()
                .flat_map(|term| splitter.split(term, filter))
                .collect();
        }
        terms
    }
}

impl Default for SplitterCombiner {
    fn default() -> Self {
        Self::from_kinds(&SplitterKind::ALL)
    }
}

impl fmt::Debug for SplitterCombiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitterCombiner")
            .field("splitters", &self.splitters.len())
            .finish()
    }
}
