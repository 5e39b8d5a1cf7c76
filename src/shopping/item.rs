//! 買い物リストの1行

use crate::ingredient::IngredientCategory;
use crate::menu::DishRole;
use serde::Serialize;

/// 買い物リストの項目
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    /// リスト内で一意なID
    pub id: String,
    /// 食材名（統合キー）
    pub ingredient: String,
    /// 統合後の分量（例: "1.5個"）
    pub amount: String,
    /// 統合前の分量（例: ["1個", "1/2個"]）
    pub original_amounts: Vec<String>,
    pub category: IngredientCategory,
    /// 購入済みフラグ
    pub checked: bool,
    /// この食材を使う料理（重複なし、出現順）
    pub from_dishes: Vec<DishRole>,
    pub unit: String,
    pub priority: u8,
}

impl ShoppingListItem {
    /// 料理の役割ラベルを連結して返す（例: "主菜, 副菜"）
    pub fn dishes_label(&self) -> String {
        self.from_dishes
            .iter()
            .map(|role| role.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
