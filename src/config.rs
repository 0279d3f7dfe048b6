use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::ModelConfig;
use crate::scores::RiskThresholds;

/// Optional JSON file; every section and field falls back to its default.
///
/// ```json
/// { "risk": { "moderate": 1, "high": 3 },
///   "model": { "path": "models/net.onnx", "url": "https://...", "variant": "xception5" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub risk: RiskThresholds,
    pub model: ModelConfig,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_slice(&raw)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => Config::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.risk.validate()
    }
}
