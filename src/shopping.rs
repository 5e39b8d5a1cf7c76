//! 買い物リスト
//!
//! 献立の材料を解析・統合し、手持ち食材を除いた買い物リストを作る。
//!
//! ```ignore
//! use kondate::menu::Menu;
//! use kondate::shopping::{format_shopping_list, ShoppingList};
//!
//! let menu = Menu::from_json(&json)?;
//! let mut list = ShoppingList::build(&menu, &["にんじん".to_string()]);
//! let id = list.items()[0].id.clone();
//! list.toggle(&id);
//! println!("{}", format_shopping_list(&list));
//! ```

mod amount;
mod consolidate;
mod format;
mod item;
mod list;
mod owned;

pub use amount::{consolidate_amounts, is_vague, numeric_value};
pub use consolidate::{consolidate, IngredientEntry};
pub use format::{format_shopping_list, TITLE};
pub use item::ShoppingListItem;
pub use list::ShoppingList;
pub use owned::{filter_owned, is_owned};

#[cfg(test)]
mod list_proptests;
