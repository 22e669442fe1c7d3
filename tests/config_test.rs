//! Tests for loading game configuration from disk.

use std::io::Write;
use tempfile::NamedTempFile;
use unbeatable::{GameConfig, StrategyKind};
use unbeatable_core::Mark;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
human_mark = "O"
human_first = false
strategy = "alpha-beta"
board_size = 4
log_filter = "debug"
"#,
    );
    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.human_mark(), Mark::O);
    assert!(!*config.human_first());
    assert_eq!(*config.strategy(), StrategyKind::AlphaBeta);
    assert_eq!(*config.board_size(), 4);
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.first_mark(), Mark::X);
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("human_mark = \"O\"\n");
    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.human_mark(), Mark::O);
    assert!(*config.human_first());
    assert_eq!(*config.board_size(), 3);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_load_without_path_gives_defaults() {
    assert_eq!(GameConfig::load(None).unwrap(), GameConfig::default());
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_minimax_on_large_board_is_rejected() {
    let file = write_config("board_size = 4\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("minimax"));
}

#[test]
fn test_board_size_out_of_range_is_rejected() {
    let file = write_config("strategy = \"alpha-beta\"\nboard_size = 9\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("board_size"));
}
