//! 生成サービスの応答から献立を取り出す
//!
//! 応答はコードブロックや前後の説明文を含むことがあるため、
//! コードブロックの中身 → 最初の `{` から最後の `}` までの順に絞り込んでから解析する。

use super::error::GenerateError;
use crate::menu::{Menu, RawMenu};
use regex::Regex;
use std::sync::LazyLock;

static JSON_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```json\s*([\s\S]*?)\s*```").expect("json fence pattern must compile")
});

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\s*([\s\S]*?)\s*```").expect("fence pattern must compile"));

/// 応答テキストから献立を解析する
pub fn parse_menu_response(content: &str) -> Result<Menu, GenerateError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }

    let json = extract_json_object(strip_code_fence(content)).ok_or_else(|| {
        tracing::warn!(content, "no JSON object in generator response");
        GenerateError::JsonNotFound
    })?;

    let raw: RawMenu = serde_json::from_str(json).map_err(|e| {
        tracing::warn!(error = %e, json, "failed to parse generator response");
        GenerateError::MalformedJson
    })?;

    raw.into_menu().map_err(|e| {
        tracing::warn!(error = %e, "generator returned an incomplete menu");
        GenerateError::IncompleteMenu
    })
}

/// コードブロックがあればその中身を返す
fn strip_code_fence(content: &str) -> &str {
    let pattern = if content.contains("```json") {
        &*JSON_FENCE_RE
    } else if content.contains("```") {
        &*FENCE_RE
    } else {
        return content;
    };

    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or(content)
}

/// 最初の `{` から最後の `}` までを切り出す
fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (start < end).then(|| &content[start..=end])
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;
