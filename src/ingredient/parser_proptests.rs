use super::{categorize, parse_ingredient, IngredientCategory};
use proptest::prelude::*;

/// 数字・括弧・空白を含まない食材名
fn name_strategy() -> impl Strategy<Value = String> {
    "[ぁ-んァ-ヶ一-龠]{1,8}".prop_map(|s| s)
}

/// 数字で始まる分量表記
fn amount_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,2}(g|ml|個|本|枚|丁)".prop_map(|s| s)
}

proptest! {
    /// 括弧内の分量はそのまま取り出され、名前には残らない
    #[test]
    fn prop_parenthesized_amount_is_extracted(
        name in name_strategy(),
        amount in amount_strategy(),
        fullwidth in any::<bool>()
    ) {
        let line = if fullwidth {
            format!("{}（{}）", name, amount)
        } else {
            format!("{}({})", name, amount)
        };
        let parsed = parse_ingredient(&line);

        prop_assert_eq!(&parsed.amount, &amount);
        prop_assert_eq!(&parsed.name, &name);
        prop_assert!(!parsed.name.contains(&amount));
    }

    /// 括弧がなければ末尾の数値トークンだけが分量になる
    #[test]
    fn prop_trailing_amount_is_stripped(
        name in name_strategy(),
        amount in amount_strategy(),
        spaced in any::<bool>()
    ) {
        let separator = if spaced { " " } else { "" };
        let line = format!("{}{}{}", name, separator, amount);
        let parsed = parse_ingredient(&line);

        prop_assert_eq!(&parsed.amount, &amount);
        prop_assert_eq!(&parsed.name, &name);
    }

    /// どんな文字列でも失敗せず、カテゴリ判定は決定的
    #[test]
    fn prop_parse_is_total_and_deterministic(line in ".{0,30}") {
        let first = parse_ingredient(&line);
        let second = parse_ingredient(&line);

        prop_assert_eq!(&first, &second);
        prop_assert!(IngredientCategory::all().contains(&first.category));
        prop_assert_eq!(first.category, categorize(&first.name));
    }
}
