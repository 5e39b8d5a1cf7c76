//! 食材名のカテゴリ分類
//!
//! 判定順:
//! 1. 辞書との完全一致
//! 2. 辞書との部分一致（辞書の記載順に走査し、最初に当たったもの）
//! 3. 正規表現による大まかなパターン判定
//! 4. どれにも当たらなければ野菜

use super::category::IngredientCategory;
use regex::Regex;
use std::sync::LazyLock;

use IngredientCategory::{Dairy, Grains, MeatFish, Seasonings, Vegetables};

/// よく使う食材の辞書
///
/// 部分一致は記載順で最初に当たったキーを採用するため、並び順を変えると結果が変わる。
const INGREDIENT_TABLE: &[(&str, IngredientCategory)] = &[
    // 野菜
    ("玉ねぎ", Vegetables),
    ("にんじん", Vegetables),
    ("人参", Vegetables),
    ("じゃがいも", Vegetables),
    ("キャベツ", Vegetables),
    ("もやし", Vegetables),
    ("ピーマン", Vegetables),
    ("ねぎ", Vegetables),
    ("ほうれん草", Vegetables),
    ("大根", Vegetables),
    ("きのこ", Vegetables),
    ("しいたけ", Vegetables),
    ("えのき", Vegetables),
    ("わかめ", Vegetables),
    // 肉・魚・卵
    ("鶏肉", MeatFish),
    ("鶏もも肉", MeatFish),
    ("豚肉", MeatFish),
    ("牛肉", MeatFish),
    ("卵", MeatFish),
    ("たまご", MeatFish),
    ("豆腐", MeatFish),
    ("絹ごし豆腐", MeatFish),
    // 調味料
    ("しょうゆ", Seasonings),
    ("醤油", Seasonings),
    ("みりん", Seasonings),
    ("砂糖", Seasonings),
    ("塩", Seasonings),
    ("こしょう", Seasonings),
    ("サラダ油", Seasonings),
    ("ごま油", Seasonings),
    ("にんにく", Seasonings),
    ("生姜", Seasonings),
    ("味噌", Seasonings),
    ("酢", Seasonings),
    ("酒", Seasonings),
    ("オイスターソース", Seasonings),
    ("かつお節", Seasonings),
    ("だし汁", Seasonings),
    ("鶏ガラスープの素", Seasonings),
    // 乳製品
    ("牛乳", Dairy),
    ("チーズ", Dairy),
    ("バター", Dairy),
    // 穀物
    ("米", Grains),
    ("パン", Grains),
    ("うどん", Grains),
    ("そば", Grains),
    ("パスタ", Grains),
];

/// 辞書にない食材向けのパターン（上から順に判定）
static FALLBACK_PATTERNS: LazyLock<Vec<(Regex, IngredientCategory)>> = LazyLock::new(|| {
    [
        (r"肉|鶏|豚|牛|魚|卵|豆腐", MeatFish),
        (r"しょうゆ|醤油|みりん|味噌|塩|油|酢|だし|ソース|スープ", Seasonings),
        (r"牛乳|チーズ|バター|ヨーグルト", Dairy),
        (r"米|パン|麺|うどん|そば", Grains),
    ]
    .into_iter()
    .map(|(pattern, category)| {
        (
            Regex::new(pattern).expect("fallback pattern must compile"),
            category,
        )
    })
    .collect()
});

/// 食材名をカテゴリに分類する
///
/// 常にいずれかのカテゴリを返す。空文字列は辞書先頭のキーに部分一致する。
pub fn categorize(name: &str) -> IngredientCategory {
    if let Some(category) = lookup_exact(name) {
        return category;
    }

    if let Some(category) = lookup_partial(name) {
        return category;
    }

    FALLBACK_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(name))
        .map(|(_, category)| *category)
        .unwrap_or(Vegetables)
}

fn lookup_exact(name: &str) -> Option<IngredientCategory> {
    INGREDIENT_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, category)| *category)
}

fn lookup_partial(name: &str) -> Option<IngredientCategory> {
    INGREDIENT_TABLE
        .iter()
        .find(|(key, _)| name.contains(key) || key.contains(name))
        .map(|(_, category)| *category)
}

#[cfg(test)]
#[path = "categorizer_test.rs"]
mod tests;
