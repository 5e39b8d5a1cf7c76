//! 食材行の解析とカテゴリ分類
//!
//! 生成された材料行（例: "鶏もも肉（300g）"）を食材名・分量・単位に分解し、
//! 売り場カテゴリに振り分ける。

mod categorizer;
mod category;
mod parser;

pub use categorizer::categorize;
pub use category::IngredientCategory;
pub use parser::{parse_ingredient, ParsedIngredient, UNSPECIFIED_AMOUNT};

#[cfg(test)]
mod parser_proptests;
