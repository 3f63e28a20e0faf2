//! エンジン設定ファイル（JSON）

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use rreversi_core::eval::EvalParams;
use rreversi_core::search::SearchLimits;

/// `--config` で読み込む設定。省略した項目はデフォルト値
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchLimits,
    pub eval: EvalParams,
}

impl EngineConfig {
    /// JSONファイルから読み込み、評価係数を検証する
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(text).context("failed to parse JSON")?;
        config.eval.validate()?;
        Ok(config)
    }
}
