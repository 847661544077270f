//! Cricket scorecard feature extraction
//!
//! Flattens ball-by-ball match records (one JSON document per match) into
//! per-innings summary statistics suitable for CSV training data export.

pub mod data;
pub mod features;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-wide errors
#[derive(Debug, Error)]
pub enum CricketError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed match record: {0}")]
    MalformedRecord(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CricketError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding one JSON scorecard per match
    pub matches_dir: String,
    /// Destination for the flattened feature table
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub shape: features::FeatureShape,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: DataConfig {
                matches_dir: "data/matches".to_string(),
                output_path: "match_features.csv".to_string(),
            },
            export: ExportConfig {
                shape: features::FeatureShape::Extended,
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CricketError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| CricketError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CricketError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
