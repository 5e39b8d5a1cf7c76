//! 分量の統合
//!
//! 単位変換は行わない。数値部分を足し合わせ、最初の分量の単位を付け直すだけの簡易処理。

use crate::ingredient::UNSPECIFIED_AMOUNT;
use regex::Regex;
use std::sync::LazyLock;

/// 数量を決められない分量表記（適量・少々・お好み）
static VAGUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"適量|少々|お好み").expect("vague pattern must compile"));

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9./]+").expect("number pattern must compile"));

static NUMBER_WITH_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9./]+\s*").expect("number pattern must compile"));

/// 曖昧な分量表記かどうか
pub fn is_vague(amount: &str) -> bool {
    VAGUE_RE.is_match(amount)
}

/// 分量表記から最初の数値を読み取る
///
/// `"1/2個"` のような分数にも対応する。0以下や読めない値は `None`。
pub fn numeric_value(amount: &str) -> Option<f64> {
    let token = NUMBER_RE.find(amount)?.as_str();

    let value = match token.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.parse().ok()?;
            let denominator: f64 = denominator.parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            numerator / denominator
        }
        None => token.parse().ok()?,
    };

    (value.is_finite() && value > 0.0).then_some(value)
}

/// 複数の分量表記を1つにまとめる
///
/// - 1つでも曖昧な表記があれば `UNSPECIFIED_AMOUNT`
/// - すべて数値が読めれば合計し、最初の分量の単位を付ける
/// - それ以外は最初の分量をそのまま使う
pub fn consolidate_amounts(amounts: &[String]) -> String {
    let Some(first) = amounts.first() else {
        return UNSPECIFIED_AMOUNT.to_string();
    };

    if amounts.iter().any(|amount| is_vague(amount)) {
        return UNSPECIFIED_AMOUNT.to_string();
    }

    let values: Option<Vec<f64>> = amounts.iter().map(|amount| numeric_value(amount)).collect();

    match values {
        Some(values) => {
            let total: f64 = values.iter().sum();
            let unit = NUMBER_WITH_SPACE_RE.replace(first, "");
            format!("{}{}", total, unit)
        }
        None => first.clone(),
    }
}

#[cfg(test)]
#[path = "amount_test.rs"]
mod tests;
