//! kondate extract コマンド
//!
//! 生成サービスの応答テキストから献立JSONを取り出す。
//! 失敗時のメッセージは利用者向けの文言をそのまま表示する。

use super::list::read_source;
use clap::Parser;
use kondate::generate::parse_menu_response;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// 応答テキストのファイル（`-` で標準入力）
    pub response: PathBuf,
}

pub fn run(args: Args) -> Result<(), String> {
    let content = read_source(&args.response)?;
    let menu = parse_menu_response(&content).map_err(|e| e.to_string())?;

    serde_json::to_string_pretty(&menu)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize to JSON: {}", e))
}
