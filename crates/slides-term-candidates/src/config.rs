use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::augmenters::AugmenterKind;
use crate::filters::TermFilterKind;
use crate::splitters::SplitterKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown {stage} `{name}`")]
    UnknownVariant { stage: &'static str, name: String },
}

/// Which filters, splitters and augmenters make up the candidate pipeline,
/// in application order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateConfig {
    pub term_filters: Vec<TermFilterKind>,
    pub splitters: Vec<SplitterKind>,
    pub augmenters: Vec<AugmenterKind>,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            term_filters: TermFilterKind::ALL.to_vec(),
            splitters: SplitterKind::ALL.to_vec(),
            augmenters: AugmenterKind::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: CandidateConfig =
            serde_json::from_str(r#"{ "splitters": ["repeat"] }"#).unwrap();
        assert_eq!(config.splitters, vec![SplitterKind::Repeat]);
        assert_eq!(config.term_filters.len(), TermFilterKind::ALL.len());
        assert_eq!(config.augmenters, AugmenterKind::ALL.to_vec());
    }

    #[test]
    fn unknown_stage_names_are_rejected() {
        let err = serde_json::from_str::<CandidateConfig>(r#"{ "augmenters": ["magic"] }"#);
        assert!(err.is_err());
        let err = "magic".parse::<AugmenterKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown augmenter `magic`");
    }
}
