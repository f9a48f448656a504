//! Augmenters derive shorter variants of an accepted term for recall.
//!
//! Every variant is flagged `augmented`, so the analyzer and rankers can leave
//! it out of the canonical statistics.

mod particle;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use slides_term_types::Term;

use crate::config::ConfigError;
use crate::filters::FilterCombiner;

pub use particle::{EnglishAdpositionAugmenter, JapaneseModifyingParticleAugmenter};

pub trait Augmenter: Send + Sync {
    /// Returns the raw variants of `term`; the combiner validates them.
    fn augment(&self, term: &Term) -> Vec<Term>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AugmenterKind {
    JapaneseModifyingParticle,
    EnglishAdposition,
}

impl AugmenterKind {
    pub const ALL: [AugmenterKind; 2] = [
        AugmenterKind::JapaneseModifyingParticle,
        AugmenterKind::EnglishAdposition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AugmenterKind::JapaneseModifyingParticle => "japanese_modifying_particle",
            AugmenterKind::EnglishAdposition => "english_adposition",
        }
    }

    pub fn build(self) -> Box<dyn Augmenter> {
        match self {
            AugmenterKind::JapaneseModifyingParticle => {
                Box::new(JapaneseModifyingParticleAugmenter::default())
            }
            AugmenterKind::EnglishAdposition => Box::new(EnglishAdpositionAugmenter::default()),
        }
    }
}

impl fmt::Display for AugmenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AugmenterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AugmenterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::UnknownVariant {
                stage: "augmenter",
                name: s.to_string(),
            })
    }
}

/// Runs every augmenter on a term and keeps the distinct variants that pass
/// the filters. The term itself is never returned.
pub struct AugmenterCombiner {
    augmenters: Vec<Box<dyn Augmenter>>,
}

impl AugmenterCombiner {
    pub fn new(augmenters: Vec<Box<dyn Augmenter>>) -> Self {
        Self { augmenters }
    }

    pub fn from_kinds(kinds: &[AugmenterKind]) -> Self {
        Self::new(kinds.iter().map(|kind| kind.build()).collect())
    }

    pub fn augment(&self, term: &Term, filter: &FilterCombiner) -> Vec<Term> {
        let mut seen = HashSet::from([term.key()]);
        self.augmenters
            .iter()
            .flat_map(|augmenter| augmenter.augment(term))
            .map(|mut variant| {
                variant.augmented = true;
                variant
            })
            .filter(|variant| filter.is_candidate(variant))
            .filter(|variant| seen.insert(variant.key()))
            .collect()
    }
}

impl Default for AugmenterCombiner {
    fn default() -> Self {
        Self::from_kinds(&AugmenterKind::ALL)
    }
}

impl fmt::Debug for AugmenterCombiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AugmenterCombiner")
            .field("augmenters", &self.augmenters.len())
            .finish()
    }
}
