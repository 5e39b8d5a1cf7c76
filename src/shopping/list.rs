//! 買い物リストの生成と更新

use super::consolidate::{consolidate, IngredientEntry};
use super::item::ShoppingListItem;
use super::owned::filter_owned;
use crate::ingredient::parse_ingredient;
use crate::menu::Menu;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 買い物リスト
///
/// `total_items` / `checked_items` は `items` を変更するたびに再計算する。
/// 項目を変更する手段は `toggle` のみ。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    id: String,
    items: Vec<ShoppingListItem>,
    total_items: usize,
    checked_items: usize,
    created_at: DateTime<Utc>,
    menu_snapshot: Menu,
    user_ingredients: Vec<String>,
}

impl ShoppingList {
    /// 献立と手持ち食材から買い物リストを生成する
    pub fn build(menu: &Menu, owned: &[String]) -> Self {
        Self::build_at(menu, owned, Utc::now())
    }

    /// 生成時刻を指定して買い物リストを生成する
    pub fn build_at(menu: &Menu, owned: &[String], created_at: DateTime<Utc>) -> Self {
        let stamp = created_at.timestamp_millis();

        let entries: Vec<IngredientEntry> = menu
            .ingredient_lines()
            .map(|(dish, line)| IngredientEntry::new(parse_ingredient(line), dish))
            .collect();
        tracing::debug!(lines = entries.len(), "parsed ingredient lines");

        let consolidated = consolidate(&entries, stamp);
        let consolidated_count = consolidated.len();
        tracing::debug!(items = consolidated_count, "consolidated ingredients");

        let items = filter_owned(consolidated, owned);
        tracing::debug!(
            excluded = consolidated_count - items.len(),
            remaining = items.len(),
            "excluded owned ingredients"
        );

        let mut list = Self {
            id: format!("shopping-list-{}", stamp),
            items,
            total_items: 0,
            checked_items: 0,
            created_at,
            menu_snapshot: menu.clone(),
            user_ingredients: owned.to_vec(),
        };
        list.recount();
        list
    }

    /// 指定IDの項目の購入済みフラグを反転する
    ///
    /// 該当する項目がなければ何もしない。反転したかどうかを返す。
    pub fn toggle(&mut self, item_id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) else {
            return false;
        };
        item.checked = !item.checked;
        self.recount();
        true
    }

    fn recount(&mut self) {
        self.total_items = self.items.len();
        self.checked_items = self.items.iter().filter(|item| item.checked).count();
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    /// 食材名で項目を探す
    pub fn find(&self, ingredient: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.ingredient == ingredient)
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn checked_items(&self) -> usize {
        self.checked_items
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 生成に使った献立
    pub fn menu_snapshot(&self) -> &Menu {
        &self.menu_snapshot
    }

    /// 生成に使った手持ち食材
    pub fn user_ingredients(&self) -> &[String] {
        &self.user_ingredients
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
