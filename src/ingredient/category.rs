//! 食材カテゴリの定義

use serde::{Deserialize, Serialize};

/// 食材カテゴリ
///
/// 宣言順がテキスト出力のブロック順になる。並び替えには `priority` を使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngredientCategory {
    #[serde(rename = "野菜")]
    Vegetables,
    #[serde(rename = "肉・魚・卵")]
    MeatFish,
    #[serde(rename = "調味料")]
    Seasonings,
    #[serde(rename = "乳製品")]
    Dairy,
    #[serde(rename = "穀物")]
    Grains,
    #[serde(rename = "その他")]
    Others,
}

impl IngredientCategory {
    /// 表示ラベルを取得
    pub fn label(&self) -> &'static str {
        match self {
            IngredientCategory::Vegetables => "野菜",
            IngredientCategory::MeatFish => "肉・魚・卵",
            IngredientCategory::Seasonings => "調味料",
            IngredientCategory::Dairy => "乳製品",
            IngredientCategory::Grains => "穀物",
            IngredientCategory::Others => "その他",
        }
    }

    /// アイコンを取得
    pub fn icon(&self) -> &'static str {
        match self {
            IngredientCategory::Vegetables => "🥬",
            IngredientCategory::MeatFish => "🍖",
            IngredientCategory::Seasonings => "🧂",
            IngredientCategory::Dairy => "🥛",
            IngredientCategory::Grains => "🌾",
            IngredientCategory::Others => "📦",
        }
    }

    /// 買い物リスト内の表示優先度（小さいほど先）
    ///
    /// 調味料は穀物の後ろに並ぶ。宣言順とは一致しない。
    pub fn priority(&self) -> u8 {
        match self {
            IngredientCategory::Vegetables => 1,
            IngredientCategory::MeatFish => 2,
            IngredientCategory::Dairy => 3,
            IngredientCategory::Grains => 4,
            IngredientCategory::Seasonings => 5,
            IngredientCategory::Others => 6,
        }
    }

    /// 全カテゴリを宣言順で取得
    pub fn all() -> &'static [IngredientCategory] {
        &[
            IngredientCategory::Vegetables,
            IngredientCategory::MeatFish,
            IngredientCategory::Seasonings,
            IngredientCategory::Dairy,
            IngredientCategory::Grains,
            IngredientCategory::Others,
        ]
    }
}

impl std::fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
