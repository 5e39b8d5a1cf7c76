//! 献立生成リクエスト

use super::error::GenerateError;
use serde::{Deserialize, Serialize};

const DEFAULT_CUISINE: &str = "なし";
const DEFAULT_COOKING_TIME: &str = "30分";

/// 献立生成サービスへのリクエスト
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRequest {
    /// 使いたい食材
    pub ingredients: Vec<String>,
    /// ジャンル（和食、中華など）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// 調理時間（例: "30分"）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
}

impl MenuRequest {
    pub fn new(ingredients: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_cooking_time(mut self, cooking_time: impl Into<String>) -> Self {
        self.cooking_time = Some(cooking_time.into());
        self
    }

    /// 食材が1つも指定されていなければエラー
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.ingredients.iter().all(|s| s.trim().is_empty()) {
            return Err(GenerateError::NoIngredients);
        }
        Ok(())
    }

    pub fn cuisine_or_default(&self) -> &str {
        non_blank(self.cuisine.as_deref()).unwrap_or(DEFAULT_CUISINE)
    }

    pub fn cooking_time_or_default(&self) -> &str {
        non_blank(self.cooking_time.as_deref()).unwrap_or(DEFAULT_COOKING_TIME)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;
