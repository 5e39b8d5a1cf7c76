//! 料理をまたいだ同一食材の統合

use super::amount::consolidate_amounts;
use super::item::ShoppingListItem;
use crate::ingredient::ParsedIngredient;
use crate::menu::DishRole;
use std::collections::HashMap;

/// 統合の入力（解析済みの材料と、それを使う料理）
#[derive(Debug, Clone)]
pub struct IngredientEntry {
    pub parsed: ParsedIngredient,
    pub dish: DishRole,
}

impl IngredientEntry {
    pub fn new(parsed: ParsedIngredient, dish: DishRole) -> Self {
        Self { parsed, dish }
    }
}

/// 同じ食材名の材料を1項目にまとめる
///
/// `stamp` は項目IDの後半に使う（通常は生成時刻のミリ秒）。
/// 結果はカテゴリの優先度順で、同じ優先度の中では初出順を保つ。
pub fn consolidate(entries: &[IngredientEntry], stamp: i64) -> Vec<ShoppingListItem> {
    let mut items: Vec<ShoppingListItem> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let parsed = &entry.parsed;

        match index_by_name.get(parsed.name.as_str()) {
            Some(&position) => {
                let existing = &mut items[position];
                existing.original_amounts.push(parsed.amount.clone());
                if !existing.from_dishes.contains(&entry.dish) {
                    existing.from_dishes.push(entry.dish);
                }
                existing.amount = consolidate_amounts(&existing.original_amounts);
            }
            None => {
                index_by_name.insert(parsed.name.as_str(), items.len());
                items.push(ShoppingListItem {
                    id: format!("ingredient-{}-{}", index, stamp),
                    ingredient: parsed.name.clone(),
                    amount: parsed.amount.clone(),
                    original_amounts: vec![parsed.amount.clone()],
                    category: parsed.category,
                    checked: false,
                    from_dishes: vec![entry.dish],
                    unit: parsed.unit.clone(),
                    priority: parsed.category.priority(),
                });
            }
        }
    }

    // sort_by_key は安定ソート
    items.sort_by_key(|item| item.priority);
    items
}

#[cfg(test)]
#[path = "consolidate_test.rs"]
mod tests;
