//! 環境変数ユーティリティ

use std::path::PathBuf;

/// 設定ディレクトリを上書きする環境変数
pub const KONDATE_HOME: &str = "KONDATE_HOME";

/// 生成サービスのAPIキー
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// 設定ディレクトリを解決
    ///
    /// 優先順位: `$KONDATE_HOME` > `$HOME/.kondate`
    pub fn config_dir() -> Option<PathBuf> {
        if let Some(dir) = Self::get(KONDATE_HOME) {
            return Some(PathBuf::from(dir));
        }
        Self::get("HOME").map(|home| PathBuf::from(home).join(".kondate"))
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
