use clap::{Parser, Subcommand};

use crate::commands::{extract, list, parse};

#[derive(Debug, Parser)]
#[command(name = "kondate")]
#[command(about = "Shopping list builder for generated meal plans", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 献立JSONから買い物リストを作成
    List(list::Args),

    /// 材料行を解析して表示
    Parse(parse::Args),

    /// 生成サービスの応答から献立JSONを取り出す
    Extract(extract::Args),
}
