//! 買い物リストのテキスト出力
//!
//! クリップボードへのコピー用。同じリストからは常に同じ文字列を生成する。

use super::list::ShoppingList;
use crate::ingredient::IngredientCategory;

/// テキスト出力の見出し
pub const TITLE: &str = "買い物リスト";

const SEPARATOR_WIDTH: usize = 20;

/// 買い物リストをカテゴリごとのテキストに整形する
///
/// カテゴリは宣言順に並べ、項目のないカテゴリは出力しない。
/// 各項目は `□ 食材名（分量）` の形式。
pub fn format_shopping_list(list: &ShoppingList) -> String {
    let mut text = format!("{}\n{}\n\n", TITLE, "━".repeat(SEPARATOR_WIDTH));

    for category in IngredientCategory::all() {
        let mut items = list
            .items()
            .iter()
            .filter(|item| item.category == *category)
            .peekable();
        if items.peek().is_none() {
            continue;
        }

        text.push_str(&format!("{} {}\n", category.icon(), category.label()));
        for item in items {
            text.push_str(&format!("□ {}（{}）\n", item.ingredient, item.amount));
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
