//! Term filters and the combiner that decides candidacy.
//!
//! A filter first says whether a term is in its scope (for example, only
//! Japanese-script terms); out-of-scope terms are never rejected by it. A term
//! is a candidate iff every in-scope filter accepts it.

mod concatenation;
mod numeric;
mod proper_noun;
mod symbol_like;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use slides_term_types::Term;

use crate::config::ConfigError;

pub use concatenation::{EnglishConcatenationFilter, JapaneseConcatenationFilter};
pub use numeric::{EnglishNumericFilter, JapaneseNumericFilter};
pub use proper_noun::{EnglishProperNounFilter, JapaneseProperNounFilter};
pub use symbol_like::{EnglishSymbolLikeFilter, JapaneseSymbolLikeFilter};

pub trait TermFilter: Send + Sync {
    fn inscope(&self, term: &Term) -> bool;

    fn is_candidate(&self, scoped_term: &Term) -> bool;
}

/// Selectable filter variants, in the order they are listed in config.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermFilterKind {
    JapaneseConcatenation,
    EnglishConcatenation,
    JapaneseSymbolLike,
    EnglishSymbolLike,
    JapaneseProperNoun,
    EnglishProperNoun,
    JapaneseNumeric,
    EnglishNumeric,
}

impl TermFilterKind {
    pub const ALL: [TermFilterKind; 8] = [
        TermFilterKind::JapaneseConcatenation,
        TermFilterKind::EnglishConcatenation,
        TermFilterKind::JapaneseSymbolLike,
        TermFilterKind::EnglishSymbolLike,
        TermFilterKind::JapaneseProperNoun,
        TermFilterKind::EnglishProperNoun,
        TermFilterKind::JapaneseNumeric,
        TermFilterKind::EnglishNumeric,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TermFilterKind::JapaneseConcatenation => "japanese_concatenation",
            TermFilterKind::EnglishConcatenation => "english_concatenation",
            TermFilterKind::JapaneseSymbolLike => "japanese_symbol_like",
            TermFilterKind::EnglishSymbolLike => "english_symbol_like",
            TermFilterKind::JapaneseProperNoun => "japanese_proper_noun",
            TermFilterKind::EnglishProperNoun => "english_proper_noun",
            TermFilterKind::JapaneseNumeric => "japanese_numeric",
            TermFilterKind::EnglishNumeric => "english_numeric",
        }
    }

    pub fn build(self) -> Box<dyn TermFilter> {
        match self {
            TermFilterKind::JapaneseConcatenation => Box::new(JapaneseConcatenationFilter::default()),
            TermFilterKind::EnglishConcatenation => Box::new(EnglishConcatenationFilter::default()),
            TermFilterKind::JapaneseSymbolLike => Box::new(JapaneseSymbolLikeFilter),
            TermFilterKind::EnglishSymbolLike => Box::new(EnglishSymbolLikeFilter),
            TermFilterKind::JapaneseProperNoun => Box::new(JapaneseProperNounFilter::default()),
            TermFilterKind::EnglishProperNoun => Box::new(EnglishProperNounFilter::default()),
            TermFilterKind::JapaneseNumeric => Box::new(JapaneseNumericFilter::default()),
            TermFilterKind::EnglishNumeric => Box::new(EnglishNumericFilter::default()),
        }
    }
}

impl fmt::Display for TermFilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TermFilterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TermFilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::UnknownVariant {
                stage: "term filter",
                name: s.to_string(),
            })
    }
}

/// Ordered set of filters; accepts a term only if every in-scope filter does.
pub struct FilterCombiner {
    filters: Vec<Box<dyn TermFilter>>,
}

impl FilterCombiner {
    pub fn new(filters: Vec<Box<dyn TermFilter>>) -> Self {
        Self { filters }
    }

    pub fn from_kinds(kinds: &[TermFilterKind]) -> Self {
        Self::new(kinds.iter().map(|kind| kind.build()).collect())
    }

    /// A combiner with no filters, accepting every term.
    pub fn accept_all() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn is_candidate(&self, term: &Term) -> bool {
        self.filters
            .iter()
            .all(|filter| !filter.inscope(term) || filter.is_candidate(term))
    }
}

impl Default for FilterCombiner {
    fn default() -> Self {
        Self::from_kinds(&TermFilterKind::ALL)
    }
}

impl fmt::Debug for FilterCombiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCombiner")
            .field("filters", &self.filters.len())
            .finish()
    }
}
