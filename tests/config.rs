//! Configuration system tests
//!
//! Tests for config paths and sheet config loading/saving.

use token_sheet::config::{SheetConfig, TextMetrics};
use token_sheet::config_paths;
use token_sheet::SheetError;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("token-sheet"));
        assert!(path_str.ends_with("sheet.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Sheet Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = SheetConfig::default();
    assert!(config.drag_indicator);
    assert!(config.indicator_switches_position);
    assert_eq!(config.max_width, None);
    assert_eq!(config.metrics, TextMetrics::default());
}

#[test]
fn test_config_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("sheet.yaml");

    let config = SheetConfig {
        drag_indicator: false,
        background: 0xC0102030,
        max_width: Some(420.0),
        metrics: TextMetrics {
            line_height: 18.0,
            char_width: 9.0,
            title_scale: 1.75,
        },
        ..SheetConfig::default()
    };
    config.save_to(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("#102030C0"), "colors saved as hex: {}", content);

    let loaded = SheetConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SheetConfig::load_from(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, SheetError::Io { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn test_load_invalid_yaml_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.yaml");
    std::fs::write(&path, "padding: [not, a, number]\n").unwrap();

    let err = SheetConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, SheetError::Config(_)));
}

#[test]
fn test_nested_metrics_partial_override() {
    let config = SheetConfig::from_yaml("metrics:\n  line_height: 24\n").unwrap();
    assert_eq!(config.metrics.line_height, 24.0);
    assert_eq!(config.metrics.char_width, TextMetrics::default().char_width);
}
