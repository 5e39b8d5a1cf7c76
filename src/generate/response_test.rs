use super::*;

const MENU_JSON: &str = r#"{
  "mainDish": {"name": "肉じゃが", "ingredients": ["牛肉（200g）", "じゃがいも（3個）"], "instructions": ["煮る"]},
  "sideDish": {"name": "冷奴", "ingredients": ["豆腐（1丁）"], "instructions": ["切る"]},
  "soup": {"name": "味噌汁", "ingredients": ["わかめ（少々）", "味噌（大さじ1）"], "instructions": ["溶く"]}
}"#;

#[test]
fn test_parse_plain_json() {
    let menu = parse_menu_response(MENU_JSON).unwrap();
    assert_eq!(menu.main_dish.name, "肉じゃが");
    assert_eq!(menu.soup.ingredients.len(), 2);
}

#[test]
fn test_parse_json_code_fence() {
    let content = format!("こちらが献立です。\n```json\n{}\n```\nどうぞ。", MENU_JSON);
    let menu = parse_menu_response(&content).unwrap();
    assert_eq!(menu.side_dish.name, "冷奴");
}

#[test]
fn test_parse_plain_code_fence() {
    let content = format!("```\n{}\n```", MENU_JSON);
    assert!(parse_menu_response(&content).is_ok());
}

#[test]
fn test_parse_json_with_surrounding_prose() {
    let content = format!("献立を提案します: {} 以上です。", MENU_JSON);
    assert!(parse_menu_response(&content).is_ok());
}

#[test]
fn test_parse_empty_response() {
    assert_eq!(
        parse_menu_response("   \n"),
        Err(GenerateError::EmptyResponse)
    );
}

#[test]
fn test_parse_without_json() {
    assert_eq!(
        parse_menu_response("申し訳ありませんが、提案できません。"),
        Err(GenerateError::JsonNotFound)
    );
    assert_eq!(
        parse_menu_response("} reversed {"),
        Err(GenerateError::JsonNotFound)
    );
}

#[test]
fn test_parse_malformed_json() {
    assert_eq!(
        parse_menu_response(r#"{"mainDish": {"name": "a",}"#),
        Err(GenerateError::MalformedJson)
    );
}

#[test]
fn test_parse_incomplete_menu() {
    let content = r#"{"mainDish": {"name": "a", "ingredients": [], "instructions": []}}"#;
    assert_eq!(
        parse_menu_response(content),
        Err(GenerateError::IncompleteMenu)
    );
}

#[test]
fn test_extract_json_object() {
    assert_eq!(extract_json_object("x {\"a\": 1} y"), Some("{\"a\": 1}"));
    assert_eq!(extract_json_object("no braces"), None);
}

#[test]
fn test_strip_code_fence_without_fence() {
    assert_eq!(strip_code_fence("{}"), "{}");
}
