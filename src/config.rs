use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;

/// Affix tables used by the morpheme decomposer.
///
/// The defaults are the canonical tables; table order is load-bearing
/// because affix matching is first-match-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphologyConfig {
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,

    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
}

impl Default for MorphologyConfig {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
            suffixes: default_suffixes(),
        }
    }
}

impl MorphologyConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn default_prefixes() -> Vec<String> {
    ["un", "pre", "post", "sub", "super", "inter"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_suffixes() -> Vec<String> {
    ["able", "ible", "er", "or", "tion", "sion", "ment"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
