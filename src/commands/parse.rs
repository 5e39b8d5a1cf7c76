//! kondate parse コマンド
//!
//! 材料行を食材名・分量・単位・カテゴリに分解して表示する。

use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use kondate::ingredient::{parse_ingredient, ParsedIngredient};

#[derive(Debug, Parser)]
pub struct Args {
    /// 材料行（例: "鶏もも肉（300g）"）
    #[arg(required = true)]
    pub lines: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args) -> Result<(), String> {
    let parsed: Vec<ParsedIngredient> = args.lines.iter().map(|l| parse_ingredient(l)).collect();

    if args.json {
        let json = serde_json::to_string_pretty(&parsed)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e))?;
        println!("{json}");
    } else {
        print_table(&parsed);
    }

    Ok(())
}

fn print_table(parsed: &[ParsedIngredient]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Amount", "Unit", "Category"]);

    for ingredient in parsed {
        table.add_row(vec![
            display_or_dash(&ingredient.name),
            ingredient.amount.clone(),
            display_or_dash(&ingredient.unit),
            ingredient.category.label().to_string(),
        ]);
    }

    println!("{table}");
}

fn display_or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
