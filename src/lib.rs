//! kondate: 献立から買い物リストを作るライブラリ
//!
//! 主菜・副菜・汁物の材料行を解析し、同じ食材をまとめ、手持ちの食材を除いて
//! カテゴリ別の買い物リストにする。

pub mod config;
pub mod env;
pub mod error;
pub mod generate;
pub mod ingredient;
pub mod menu;
pub mod shopping;

pub use error::{KondateError, Result};
