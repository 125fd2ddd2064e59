//! Configuration system tests
//!
//! Tests for config paths and layout config loading/saving.

use codexmonitor_layout::config::LayoutConfig;
use codexmonitor_layout::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("codexmonitor"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_storage_file_ends_with_json() {
    let path = config_paths::storage_file().unwrap();
    assert!(path.to_string_lossy().ends_with("storage.json"));
}

#[test]
fn test_storage_and_logs_live_under_config_dir() {
    let config = config_paths::config_dir().unwrap();
    assert!(config_paths::storage_file().unwrap().starts_with(&config));
    assert!(config_paths::logs_dir().unwrap().starts_with(&config));
}

#[test]
fn test_ensure_logs_dir_matches_logs_dir() {
    // Creating the directory may be refused in sandboxed environments
    if let Ok(created) = config_paths::ensure_logs_dir() {
        assert_eq!(Some(created.clone()), config_paths::logs_dir());
        assert!(created.is_dir());
    }
}

// ========================================================================
// Layout Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = LayoutConfig::default();
    assert!(config.end_drag_on_focus_loss);
    assert_eq!(config.handle_hit_zone, 4.0);
}

#[test]
fn test_config_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = LayoutConfig {
        end_drag_on_focus_loss: false,
        handle_hit_zone: 6.5,
    };
    config.save_to(&path).unwrap();

    assert_eq!(LayoutConfig::load_from(&path), config);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = LayoutConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, LayoutConfig::default());
}

#[test]
fn test_load_invalid_yaml_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "end_drag_on_focus_loss: [not, a, bool").unwrap();

    assert_eq!(LayoutConfig::load_from(&path), LayoutConfig::default());
}

#[test]
fn test_load_replaces_unusable_hit_zone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "handle_hit_zone: 0\nend_drag_on_focus_loss: false\n").unwrap();

    let config = LayoutConfig::load_from(&path);
    assert_eq!(config.handle_hit_zone, 4.0);
    assert!(!config.end_drag_on_focus_loss);
}
