//! 献立生成の失敗理由
//!
//! メッセージはそのまま利用者に表示する。

use crate::env::{EnvVar, OPENAI_API_KEY};
use thiserror::Error;

/// APIキー未設定とみなすプレースホルダー
pub const API_KEY_PLACEHOLDER: &str = "your_openai_api_key_here";

/// 献立生成エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("OpenAI APIキーが設定されていません。.env.localファイルに正しいAPIキーを設定してください。")]
    MissingApiKey,

    #[error("食材を入力してください")]
    NoIngredients,

    #[error("OpenAI APIから空の応答が返されました")]
    EmptyResponse,

    #[error("AIの応答にJSONが含まれていません")]
    JsonNotFound,

    #[error("AIからの応答を解析できませんでした")]
    MalformedJson,

    #[error("献立の構成が不正です（主菜・副菜・汁物のいずれかが不足）")]
    IncompleteMenu,

    #[error("OpenAI APIキーが無効です。正しいAPIキーを設定してください。")]
    InvalidApiKey,

    #[error("OpenAI APIの利用制限に達しました。アカウントの残高を確認してください。")]
    QuotaExceeded,

    #[error("APIの利用制限に達しました。しばらく待ってから再試行してください。")]
    RateLimited,

    /// 上流のメッセージをそのまま伝える
    #[error("{0}")]
    Upstream(String),

    #[error("献立の生成中に予期しないエラーが発生しました")]
    Unexpected,
}

impl GenerateError {
    /// 生成サービスのエラーメッセージを分類する
    pub fn from_upstream_message(message: &str) -> Self {
        if message.contains("401") {
            GenerateError::InvalidApiKey
        } else if message.contains("insufficient_quota") {
            GenerateError::QuotaExceeded
        } else if message.contains("rate_limit") {
            GenerateError::RateLimited
        } else if message.trim().is_empty() {
            GenerateError::Unexpected
        } else {
            GenerateError::Upstream(message.to_string())
        }
    }
}

/// APIキーが使える状態か検証する
pub fn check_api_key(key: Option<&str>) -> Result<(), GenerateError> {
    match key.map(str::trim) {
        None | Some("") | Some(API_KEY_PLACEHOLDER) => Err(GenerateError::MissingApiKey),
        Some(_) => Ok(()),
    }
}

/// 環境変数 `OPENAI_API_KEY` のAPIキーを検証する
pub fn check_api_key_env() -> Result<(), GenerateError> {
    check_api_key(EnvVar::get(OPENAI_API_KEY).as_deref())
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
