//! Pipeline configuration shared by the extractor and reasoner.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_LEGAL_FRAMEWORK: &str =
    "UAE Federal Decree-Law No. 32 of 2021 on Commercial Companies";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunables for extraction and reasoning.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Maximum parties kept per role. Role keywords recur in boilerplate,
    /// so later candidates are increasingly noise: this trades recall for
    /// precision.
    pub party_cap: usize,
    pub board_power_cap: usize,
    pub shareholder_matter_cap: usize,
    pub prohibited_action_cap: usize,
    /// Statute cited in the compliance section of every draft.
    pub legal_framework: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            party_cap: 6,
            board_power_cap: 6,
            shareholder_matter_cap: 6,
            prohibited_action_cap: 4,
            legal_framework: DEFAULT_LEGAL_FRAMEWORK.to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
