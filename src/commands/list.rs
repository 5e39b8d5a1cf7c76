//! kondate list コマンド
//!
//! 献立JSONから買い物リストを作成して表示する。

use crate::output::ListSummary;
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use kondate::config::Config;
use kondate::menu::Menu;
use kondate::shopping::{format_shopping_list, ShoppingList};
use std::path::{Path, PathBuf};

/// 出力形式
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// クリップボード用テキスト
    Text,
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// 献立JSONファイル（`-` で標準入力）
    pub menu: PathBuf,

    /// 手持ちの食材（複数指定可）
    #[arg(long, short = 'o')]
    pub owned: Vec<String>,

    /// 設定ファイルの常備品を手持ちとして扱わない
    #[arg(long)]
    pub no_pantry: bool,

    /// 購入済みにする食材名（複数指定可）
    #[arg(long)]
    pub check: Vec<String>,

    /// 出力形式
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: Args) -> Result<(), String> {
    // 1. 献立を読み込む
    let content = read_source(&args.menu)?;
    let menu = Menu::from_json(&content).map_err(|e| e.to_string())?;

    // 2. 手持ち食材（指定分 + 常備品）
    let mut owned = non_blank(&args.owned);
    if !args.no_pantry {
        let config = Config::load().map_err(|e| e.to_string())?;
        config.merge_pantry(&mut owned);
    }

    // 3. 買い物リストを生成し、指定された食材を購入済みにする
    let mut list = ShoppingList::build(&menu, &owned);
    for name in apply_checks(&mut list, &args.check) {
        tracing::warn!(ingredient = %name, "not on the shopping list, skipped");
    }

    // 4. 出力
    match args.format {
        OutputFormat::Text => print!("{}", format_shopping_list(&list)),
        OutputFormat::Table => print_table(&list, count_excluded(&menu, &list)),
        OutputFormat::Json => print_json(&list)?,
        OutputFormat::Yaml => print_yaml(&list)?,
    }

    Ok(())
}

/// ファイルまたは標準入力から読み込む
pub(crate) fn read_source(path: &Path) -> Result<String, String> {
    if path == Path::new("-") {
        return std::io::read_to_string(std::io::stdin())
            .map_err(|e| format!("Failed to read stdin: {}", e));
    }
    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}

/// 空白だけの指定を取り除く
///
/// 空文字列はすべての食材に該当する。
fn non_blank(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| !entry.trim().is_empty())
        .cloned()
        .collect()
}

/// 食材名で項目を探して購入済みにする
///
/// リストにない食材名を返す。
fn apply_checks(list: &mut ShoppingList, names: &[String]) -> Vec<String> {
    let mut missing = Vec::new();

    for name in names {
        let id = list.find(name).map(|item| item.id.clone());
        match id {
            Some(id) => {
                list.toggle(&id);
            }
            None => missing.push(name.clone()),
        }
    }

    missing
}

/// 手持ちとして除外された食材の数
fn count_excluded(menu: &Menu, list: &ShoppingList) -> usize {
    menu.ingredient_names()
        .len()
        .saturating_sub(list.total_items())
}

fn print_table(list: &ShoppingList, excluded: usize) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["", "Category", "Ingredient", "Amount", "Dishes"]);

    for item in list.items() {
        let mark = if item.checked { "✓" } else { "□" };
        table.add_row(vec![
            mark.to_string(),
            format!("{} {}", item.category.icon(), item.category.label()),
            item.ingredient.clone(),
            item.amount.clone(),
            item.dishes_label(),
        ]);
    }

    println!("{table}");
    println!(
        "{}",
        ListSummary::format(list.total_items(), list.checked_items(), excluded)
    );
}

fn print_json(list: &ShoppingList) -> Result<(), String> {
    serde_json::to_string_pretty(list)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize to JSON: {}", e))
}

fn print_yaml(list: &ShoppingList) -> Result<(), String> {
    serde_yaml::to_string(list)
        .map(|yaml| print!("{yaml}"))
        .map_err(|e| format!("Failed to serialize to YAML: {}", e))
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
