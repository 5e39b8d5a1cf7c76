//! 献立（主菜・副菜・汁物）の型定義
//!
//! 生成サービスが返す献立JSONを受け取り、3品すべてが揃っていることを検証する。

use crate::error::{KondateError, Result};
use crate::ingredient::parse_ingredient;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 献立内での料理の役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishRole {
    #[serde(rename = "主菜")]
    Main,
    #[serde(rename = "副菜")]
    Side,
    #[serde(rename = "汁物")]
    Soup,
}

impl DishRole {
    /// 表示ラベルを取得
    pub fn label(&self) -> &'static str {
        match self {
            DishRole::Main => "主菜",
            DishRole::Side => "副菜",
            DishRole::Soup => "汁物",
        }
    }

    /// 献立内の固定順（主菜 → 副菜 → 汁物）
    pub fn all() -> &'static [DishRole] {
        &[DishRole::Main, DishRole::Side, DishRole::Soup]
    }
}

impl std::fmt::Display for DishRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 1品分の料理
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    /// 材料行（例: "鶏もも肉（300g）"）
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Dish {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl IntoIterator<Item = impl Into<String>>,
        instructions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            instructions: instructions.into_iter().map(Into::into).collect(),
        }
    }
}

/// 1食分の献立
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub main_dish: Dish,
    pub side_dish: Dish,
    pub soup: Dish,
}

impl Menu {
    pub fn new(main_dish: Dish, side_dish: Dish, soup: Dish) -> Self {
        Self {
            main_dish,
            side_dish,
            soup,
        }
    }

    /// 役割に対応する料理を取得
    pub fn dish(&self, role: DishRole) -> &Dish {
        match role {
            DishRole::Main => &self.main_dish,
            DishRole::Side => &self.side_dish,
            DishRole::Soup => &self.soup,
        }
    }

    /// 全材料行を（役割, 行）の組で列挙する
    ///
    /// 主菜 → 副菜 → 汁物の順、各料理内は記載順。
    pub fn ingredient_lines(&self) -> impl Iterator<Item = (DishRole, &str)> + '_ {
        DishRole::all().iter().flat_map(move |&role| {
            self.dish(role)
                .ingredients
                .iter()
                .map(move |line| (role, line.as_str()))
        })
    }

    /// 献立に登場する食材名（解析後）を重複なしで列挙する
    ///
    /// 最初に現れた順。手持ち食材の候補として使う。
    pub fn ingredient_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.ingredient_lines()
            .map(|(_, line)| parse_ingredient(line).name)
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    /// JSON文字列から献立を読み込む
    ///
    /// 料理または材料リストが欠けている場合は `IncompleteMenu` を返す。
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawMenu = serde_json::from_str(content)?;
        raw.into_menu()
    }
}

/// 検証前の献立（生成サービスの出力をそのまま受ける）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawMenu {
    #[serde(default)]
    main_dish: Option<RawDish>,
    #[serde(default)]
    side_dish: Option<RawDish>,
    #[serde(default)]
    soup: Option<RawDish>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawDish {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    ingredients: Option<Vec<String>>,
    #[serde(default)]
    instructions: Option<Vec<String>>,
}

impl RawMenu {
    pub(crate) fn into_menu(self) -> Result<Menu> {
        Ok(Menu {
            main_dish: RawDish::into_dish(self.main_dish, DishRole::Main)?,
            side_dish: RawDish::into_dish(self.side_dish, DishRole::Side)?,
            soup: RawDish::into_dish(self.soup, DishRole::Soup)?,
        })
    }
}

impl RawDish {
    fn into_dish(raw: Option<RawDish>, role: DishRole) -> Result<Dish> {
        let raw = raw.ok_or(KondateError::IncompleteMenu {
            role,
            missing: "dish",
        })?;
        let ingredients = raw.ingredients.ok_or(KondateError::IncompleteMenu {
            role,
            missing: "ingredients",
        })?;

        Ok(Dish {
            name: raw.name.unwrap_or_default(),
            ingredients,
            instructions: raw.instructions.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
