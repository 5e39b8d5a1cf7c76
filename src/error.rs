use thiserror::Error;

use crate::menu::DishRole;

/// kondate統一エラー型
#[derive(Debug, Error)]
pub enum KondateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Incomplete menu: {role} is missing {missing}")]
    IncompleteMenu {
        role: DishRole,
        missing: &'static str,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, KondateError>;

impl KondateError {
    /// 献立の構造不備によるエラーかどうか
    pub fn is_incomplete_menu(&self) -> bool {
        matches!(self, KondateError::IncompleteMenu { .. })
    }
}
