use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rankers::{IdfMode, ScoreCompiler, TfMode};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown ranking method `{0}` (expected one of tfidf, lfidf, flr, hits, flrh, mdp)")]
    UnknownMethod(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfConfig {
    pub tfmode: TfMode,
    pub idfmode: IdfMode,
    pub consider_charfont: bool,
    pub ignore_augmented: bool,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            tfmode: TfMode::default(),
            idfmode: IdfMode::default(),
            consider_charfont: true,
            ignore_augmented: true,
        }
    }
}

/// LF-IDF reuses the tf weighting schemes for linguistic-sequence counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LfIdfConfig {
    pub lfmode: TfMode,
    pub idfmode: IdfMode,
    pub consider_charfont: bool,
    pub ignore_augmented: bool,
}

impl Default for LfIdfConfig {
    fn default() -> Self {
        Self {
            lfmode: TfMode::default(),
            idfmode: IdfMode::default(),
            consider_charfont: true,
            ignore_augmented: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MdpConfig {
    pub compile_scores: ScoreCompiler,
    pub consider_charfont: bool,
    pub ignore_augmented: bool,
}

impl Default for MdpConfig {
    fn default() -> Self {
        Self {
            compile_scores: ScoreCompiler::default(),
            consider_charfont: true,
            ignore_augmented: true,
        }
    }
}

/// Options shared by the single-domain graph methods (FLR, HITS, FLRH).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphMethodConfig {
    pub consider_charfont: bool,
    pub ignore_augmented: bool,
}

impl Default for GraphMethodConfig {
    fn default() -> Self {
        Self {
            consider_charfont: true,
            ignore_augmented: true,
        }
    }
}

/// Selected ranking method and its options, tagged by `method`:
///
/// ```json
/// { "method": "tfidf", "tfmode": "log", "idfmode": "smooth" }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum MethodConfig {
    Tfidf(TfIdfConfig),
    Lfidf(LfIdfConfig),
    Flr(GraphMethodConfig),
    Hits(GraphMethodConfig),
    Flrh(GraphMethodConfig),
    Mdp(MdpConfig),
}

impl Default for MethodConfig {
    fn default() -> Self {
        MethodConfig::Mdp(MdpConfig::default())
    }
}

impl MethodConfig {
    pub const NAMES: [&'static str; 6] = ["tfidf", "lfidf", "flr", "hits", "flrh", "mdp"];

    pub fn name(&self) -> &'static str {
        match self {
            MethodConfig::Tfidf(_) => "tfidf",
            MethodConfig::Lfidf(_) => "lfidf",
            MethodConfig::Flr(_) => "flr",
            MethodConfig::Hits(_) => "hits",
            MethodConfig::Flrh(_) => "flrh",
            MethodConfig::Mdp(_) => "mdp",
        }
    }

    pub fn ignore_augmented(&self) -> bool {
        match self {
            MethodConfig::Tfidf(config) => config.ignore_augmented,
            MethodConfig::Lfidf(config) => config.ignore_augmented,
            MethodConfig::Flr(config) | MethodConfig::Hits(config) | MethodConfig::Flrh(config) => {
                config.ignore_augmented
            }
            MethodConfig::Mdp(config) => config.ignore_augmented,
        }
    }
}

/// Parses a method name into that method's default options.
impl FromStr for MethodConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tfidf" => Ok(MethodConfig::Tfidf(TfIdfConfig::default())),
            "lfidf" => Ok(MethodConfig::Lfidf(LfIdfConfig::default())),
            "flr" => Ok(MethodConfig::Flr(GraphMethodConfig::default())),
            "hits" => Ok(MethodConfig::Hits(GraphMethodConfig::default())),
            "flrh" => Ok(MethodConfig::Flrh(GraphMethodConfig::default())),
            "mdp" => Ok(MethodConfig::Mdp(MdpConfig::default())),
            other => Err(ConfigError::UnknownMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_json_with_defaults() {
        let config: MethodConfig =
            serde_json::from_str(r#"{ "method": "tfidf", "tfmode": "log" }"#).unwrap();
        assert_eq!(
            config,
            MethodConfig::Tfidf(TfIdfConfig {
                tfmode: TfMode::Log,
                ..TfIdfConfig::default()
            })
        );

        let config: MethodConfig =
            serde_json::from_str(r#"{ "method": "lfidf", "lfmode": "augmented", "consider_charfont": false }"#)
                .unwrap();
        assert_eq!(
            config,
            MethodConfig::Lfidf(LfIdfConfig {
                lfmode: TfMode::Augmented,
                consider_charfont: false,
                ..LfIdfConfig::default()
            })
        );

        let config: MethodConfig =
            serde_json::from_str(r#"{ "method": "hits", "ignore_augmented": false }"#).unwrap();
        assert_eq!(config.name(), "hits");
        assert!(!config.ignore_augmented());

        let config: MethodConfig = serde_json::from_str(r#"{ "method": "mdp" }"#).unwrap();
        assert_eq!(config, MethodConfig::default());
        assert!(config.ignore_augmented());
    }

    #[test]
    fn names_round_trip() {
        for name in MethodConfig::NAMES {
            assert_eq!(name.parse::<MethodConfig>().unwrap().name(), name);
        }
        assert_eq!(
            "textrank".parse::<MethodConfig>(),
            Err(ConfigError::UnknownMethod("textrank".into()))
        );
    }
}
