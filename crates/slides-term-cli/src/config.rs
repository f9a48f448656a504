use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use slides_term_candidates::CandidateConfig;
use slides_term_methods::{ConfigError, DEFAULT_ACCEPTANCE_RATE, MethodConfig};

use crate::io::read_json;

pub const CONFIG_ENV: &str = "SLIDES_TERM_CONFIG";

/// Everything the batch commands can be told, read from one JSON file.
/// Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub candidate: CandidateConfig,
    pub method: MethodConfig,
    pub acceptance_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            candidate: CandidateConfig::default(),
            method: MethodConfig::default(),
            acceptance_rate: DEFAULT_ACCEPTANCE_RATE,
        }
    }
}

impl AppConfig {
    /// Reads `path`, falling back to `$SLIDES_TERM_CONFIG`, then to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => read_json(&path),
            None => Ok(Self::default()),
        }
    }

    /// Switches to the named method. Options from the file are kept when it
    /// already selects that method.
    pub fn with_method_name(mut self, name: &str) -> Result<Self, ConfigError> {
        if self.method.name() != name {
            self.method = name.parse()?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use slides_term_methods::{MdpConfig, ScoreCompiler};

    use super::*;

    #[test]
    fn method_override_keeps_matching_options() {
        let config = AppConfig {
            method: MethodConfig::Mdp(MdpConfig {
                compile_scores: ScoreCompiler::Max,
                ..MdpConfig::default()
            }),
            ..AppConfig::default()
        };
        let same = config.clone().with_method_name("mdp").unwrap();
        assert_eq!(same.method, config.method);

        let switched = config.with_method_name("flr").unwrap();
        assert_eq!(switched.method.name(), "flr");
        let lfidf = AppConfig::default().with_method_name("lfidf").unwrap();
        assert_eq!(lfidf.method.name(), "lfidf");
        assert!(AppConfig::default().with_method_name("textrank").is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "acceptance_rate": 0.5 }"#).unwrap();
        assert_eq!(config.acceptance_rate, 0.5);
        assert_eq!(config.method, MethodConfig::default());
        assert_eq!(config.candidate, CandidateConfig::default());
    }
}
