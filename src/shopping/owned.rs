//! 手持ち食材の除外

use super::item::ShoppingListItem;

/// 手持ち食材に該当するかどうか
///
/// どちらかがもう一方を部分文字列として含めば該当とみなす。大文字小文字や空白の正規化はしない。
/// 空文字列はすべての食材名に含まれるため、すべてに該当する。
pub fn is_owned<S: AsRef<str>>(ingredient: &str, owned: &[S]) -> bool {
    owned
        .iter()
        .map(|entry| AsRef::<str>::as_ref(entry))
        .any(|entry| ingredient.contains(entry) || entry.contains(ingredient))
}

/// 手持ち食材に該当する項目を取り除く（残りの順序は保つ）
pub fn filter_owned<S: AsRef<str>>(
    items: Vec<ShoppingListItem>,
    owned: &[S],
) -> Vec<ShoppingListItem> {
    items
        .into_iter()
        .filter(|item| !is_owned(&item.ingredient, owned))
        .collect()
}

#[cfg(test)]
#[path = "owned_test.rs"]
mod tests;
