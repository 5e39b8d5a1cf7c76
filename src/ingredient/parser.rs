//! 材料行のパーサー
//!
//! 例: `"鶏もも肉（300g）"` → 名前 `"鶏もも肉"` / 分量 `"300g"` / 単位 `"g"`

use super::categorizer::categorize;
use super::category::IngredientCategory;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// 分量が読み取れなかったときの分量表記
pub const UNSPECIFIED_AMOUNT: &str = "適量";

/// 分量表記: 最初の括弧（全角・半角）の中身、または末尾の数字で始まるトークン
///
/// 数字は半角のみ。全角数字は名前の一部として扱う。
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[（(]([^）)]+)[）)]|([0-9]+[^\s）)]*)\s*$").expect("amount pattern must compile")
});

static PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[（(][^）)]+[）)]").expect("paren pattern must compile"));

static TRAILING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+[^\s）)]*\s*$").expect("trailing pattern must compile"));

/// 分量先頭の数値部分に続く単位
static UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s./]+([^0-9\s./]+)").expect("unit pattern must compile"));

/// 解析済みの材料
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedIngredient {
    /// 分量を取り除いた食材名
    pub name: String,
    /// 元の分量表記（読み取れなければ `UNSPECIFIED_AMOUNT`）
    pub amount: String,
    /// 単位（なければ空文字列）
    pub unit: String,
    pub category: IngredientCategory,
}

/// 材料行を解析する
///
/// 失敗はしない。分量が見つからなければ行全体を名前として扱う。
/// 括弧が複数ある場合は最初のものだけを分量とみなし、残りは名前に残す。
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let (name, amount) = match AMOUNT_RE.captures(line) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(paren), _) => (
                PAREN_RE.replace(line, "").trim().to_string(),
                paren.as_str().to_string(),
            ),
            (None, Some(trailing)) => (
                TRAILING_RE.replace(line, "").trim().to_string(),
                trailing.as_str().to_string(),
            ),
            (None, None) => (line.trim().to_string(), UNSPECIFIED_AMOUNT.to_string()),
        },
        None => (line.trim().to_string(), UNSPECIFIED_AMOUNT.to_string()),
    };

    let unit = extract_unit(&amount);
    let category = categorize(&name);

    ParsedIngredient {
        name,
        amount,
        unit,
        category,
    }
}

/// 分量表記から単位を取り出す
///
/// 数値で始まらない分量（"適量"、"大さじ1" など）は単位なし。
pub fn extract_unit(amount: &str) -> String {
    UNIT_RE
        .captures(amount)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
