//! Tests for loading game configuration from TOML files.

use std::io::Write;
use strictly_cube::Player;
use strictly_cube_cli::GameConfig;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config("size = 4\nfirst_player = \"O\"\nseed = 42\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.size(), 4);
    assert_eq!(*config.first_player(), Player::O);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = GameConfig::load(None).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_cli_overrides_file_values() {
    let file = write_config("size = 5\nseed = 1\n");
    let config = GameConfig::load(Some(file.path()))
        .unwrap()
        .with_overrides(Some(3), Some(Player::O), None)
        .unwrap();
    assert_eq!(*config.size(), 3);
    assert_eq!(*config.first_player(), Player::O);
    assert_eq!(*config.seed(), Some(1));
}

#[test]
fn test_rejects_unsupported_size() {
    let file = write_config("size = 2\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("must be between 3 and 16"));
}

#[test]
fn test_rejects_malformed_toml() {
    let file = write_config("size = \"big\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_reports_read_error() {
    let err = GameConfig::from_file("/nonexistent/strictly_cube.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error: Failed to read config file"));
}
