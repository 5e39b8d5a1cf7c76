use super::*;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(temp.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_reads_pantry() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "pantry = [\"塩\", \"砂糖\"]\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.pantry, vec!["塩", "砂糖"]);
}

#[test]
fn test_load_from_empty_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "").unwrap();

    assert!(Config::load_from(&path).unwrap().pantry.is_empty());
}

#[test]
fn test_load_from_invalid_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "pantry = \"not a list\"").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, KondateError::Toml(_)));
}

#[test]
#[serial]
fn test_load_uses_kondate_home() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        "pantry = [\"しょうゆ\"]\n",
    )
    .unwrap();
    std::env::set_var(crate::env::KONDATE_HOME, temp.path());

    let config = Config::load().unwrap();
    assert_eq!(config.pantry, vec!["しょうゆ"]);
    assert_eq!(
        Config::default_path(),
        Some(temp.path().join(CONFIG_FILE_NAME))
    );

    std::env::remove_var(crate::env::KONDATE_HOME);
}

#[test]
fn test_merge_pantry_skips_duplicates_and_blanks() {
    let config = Config {
        pantry: vec!["塩".to_string(), " ".to_string(), "にんじん".to_string()],
    };
    let mut owned = vec!["にんじん".to_string()];

    config.merge_pantry(&mut owned);

    assert_eq!(owned, vec!["にんじん", "塩"]);
}
