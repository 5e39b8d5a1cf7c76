//! kondate の設定（config.toml）
//!
//! ```toml
//! # いつも家にある食材は買い物リストから除外する
//! pantry = ["塩", "砂糖", "しょうゆ"]
//! ```

use crate::env::EnvVar;
use crate::error::{KondateError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// kondate の設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 常に手持ちとして扱う食材
    pub pantry: Vec<String>,
}

impl Config {
    /// 既定の場所（`$KONDATE_HOME` または `~/.kondate`）から読み込む
    pub fn load() -> Result<Self> {
        let dir = EnvVar::config_dir().ok_or_else(|| {
            KondateError::Config("neither KONDATE_HOME nor HOME is set".to_string())
        })?;
        Self::load_from(dir.join(CONFIG_FILE_NAME))
    }

    /// 指定パスから読み込む（ファイルがなければ既定値）
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            pantry = config.pantry.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// 既定の設定ファイルパス
    pub fn default_path() -> Option<PathBuf> {
        EnvVar::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// 手持ち食材に常備品を加える（重複は追加しない）
    pub fn merge_pantry(&self, owned: &mut Vec<String>) {
        for item in &self.pantry {
            let item = item.trim();
            if !item.is_empty() && !owned.iter().any(|o| o == item) {
                owned.push(item.to_string());
            }
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
