//! Candidate term generation.
//!
//! Raw noun phrases pulled from slides go through three stages, each built
//! from a configurable list of variants:
//!
//! 1. [`FilterCombiner`] rejects phrases that cannot be technical terms.
//! 2. [`SplitterCombiner`] breaks run-on phrases into valid pieces.
//! 3. [`AugmenterCombiner`] adds shorter variants flagged as augmented.
//!
//! [`CandidatePipeline`] wires the stages together from a [`CandidateConfig`].

pub mod augmenters;
pub mod chars;
pub mod classifier;
pub mod config;
pub mod filters;
pub mod pipeline;
pub mod splitters;

pub use augmenters::{Augmenter, AugmenterCombiner, AugmenterKind};
pub use classifier::{EnglishClassifier, JapaneseClassifier, MorphemeClassifier};
pub use config::{CandidateConfig, ConfigError};
pub use filters::{FilterCombiner, TermFilter, TermFilterKind};
pub use pipeline::CandidatePipeline;
pub use splitters::{Splitter, SplitterCombiner, SplitterKind};
