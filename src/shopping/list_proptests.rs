use super::{filter_owned, format_shopping_list, ShoppingList};
use crate::menu::{Dish, Menu};
use proptest::prelude::*;
use std::collections::HashSet;

/// 既知の食材と分量からなる材料行
fn line_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec![
            "玉ねぎ", "にんじん", "鶏もも肉", "豚肉", "卵", "しょうゆ", "牛乳", "パスタ", "トマト",
        ]),
        prop::sample::select(vec!["1個", "1/2個", "200g", "少々", "大さじ1", "2本"]),
    )
        .prop_map(|(name, amount)| format!("{}（{}）", name, amount))
}

fn menu_strategy() -> impl Strategy<Value = Menu> {
    (
        prop::collection::vec(line_strategy(), 0..5),
        prop::collection::vec(line_strategy(), 0..5),
        prop::collection::vec(line_strategy(), 0..5),
    )
        .prop_map(|(main, side, soup)| {
            Menu::new(
                Dish::new("主菜", main, ["焼く"]),
                Dish::new("副菜", side, ["和える"]),
                Dish::new("汁物", soup, ["煮る"]),
            )
        })
}

fn owned_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["玉ねぎ", "卵", "しょう", "肉"]).prop_map(String::from),
        0..3,
    )
}

proptest! {
    /// トグル後も件数が項目と一致する
    #[test]
    fn prop_toggle_keeps_counters_consistent(
        menu in menu_strategy(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..10)
    ) {
        let mut list = ShoppingList::build(&menu, &[]);

        for pick in picks {
            if list.is_empty() {
                break;
            }
            let id = list.items()[pick.index(list.items().len())].id.clone();
            prop_assert!(list.toggle(&id));

            let checked = list.items().iter().filter(|item| item.checked).count();
            prop_assert_eq!(list.checked_items(), checked);
            prop_assert_eq!(list.total_items(), list.items().len());
        }
    }

    /// 食材名はリスト内で一意で、料理の重複もない
    #[test]
    fn prop_items_are_unique(menu in menu_strategy(), owned in owned_strategy()) {
        let list = ShoppingList::build(&menu, &owned);

        let mut names: Vec<&str> = list.items().iter().map(|item| item.ingredient.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), list.items().len());

        for item in list.items() {
            let dishes: HashSet<_> = item.from_dishes.iter().collect();
            prop_assert_eq!(dishes.len(), item.from_dishes.len());
        }
    }

    /// 優先度の昇順に並ぶ
    #[test]
    fn prop_items_sorted_by_priority(menu in menu_strategy()) {
        let list = ShoppingList::build(&menu, &[]);
        let priorities: Vec<u8> = list.items().iter().map(|item| item.priority).collect();

        prop_assert!(priorities.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    /// 手持ち食材の除外は冪等
    #[test]
    fn prop_owned_filter_is_idempotent(menu in menu_strategy(), owned in owned_strategy()) {
        let list = ShoppingList::build(&menu, &owned);
        let refiltered = filter_owned(list.items().to_vec(), &owned);

        prop_assert_eq!(refiltered.as_slice(), list.items());
    }

    /// テキスト出力は安定している
    #[test]
    fn prop_format_is_stable(menu in menu_strategy(), owned in owned_strategy()) {
        let list = ShoppingList::build(&menu, &owned);
        prop_assert_eq!(format_shopping_list(&list), format_shopping_list(&list));
    }
}
