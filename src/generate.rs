//! 献立生成サービスとの境界
//!
//! 通信そのものは扱わない。応答テキストから献立を取り出し、
//! 失敗を利用者向けのメッセージに分類する。

mod error;
mod request;
mod response;

pub use error::{check_api_key, check_api_key_env, GenerateError, API_KEY_PLACEHOLDER};
pub use request::MenuRequest;
pub use response::parse_menu_response;
