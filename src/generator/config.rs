use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::{
    BOX_PERCENT, DECORATION_PERCENT, DEFAULT_TEMPLATES, GOAL_PERCENT, MAX_STAGE_ATTEMPTS,
    MAX_STAMP_ATTEMPTS, MIN_GOALS,
};
use crate::generator::Template;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Tunables of the cave generator. Missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub min_goals: usize,
    pub goal_percent: u32,
    pub box_percent: u32,
    pub decoration_percent: u32,
    pub max_stage_attempts: usize,
    pub max_stamp_attempts: usize,
    /// obstacle patterns as text rows, `o` for floor and `#` for wall
    pub templates: Vec<Vec<String>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            min_goals: MIN_GOALS,
            goal_percent: GOAL_PERCENT,
            box_percent: BOX_PERCENT,
            decoration_percent: DECORATION_PERCENT,
            max_stage_attempts: MAX_STAGE_ATTEMPTS,
            max_stamp_attempts: MAX_STAMP_ATTEMPTS,
            templates: DEFAULT_TEMPLATES
                .iter()
                .map(|rows| rows.iter().map(|row| row.to_string()).collect())
                .collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn templates(&self) -> Vec<Template> {
        self.templates.iter().map(|rows| Template::from_rows(rows)).collect()
    }
}
