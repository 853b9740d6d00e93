use std::fs;

use tempfile::tempdir;
use wallet_config::{Config, ConfigError, ConfigManager, Theme};
use wallet_domain::Language;

#[test]
fn default_config_targets_french_and_mru() {
    let cfg = Config::default();

    assert_eq!(cfg.language, Language::Fr);
    assert_eq!(cfg.currency, "MRU");
    assert!(cfg.ui_color_enabled);
    assert!(!cfg.show_balance_on_start);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert_eq!(manager.config_path(), dir.path().join("config").join("config.json"));
    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.language = Language::Ar;
    cfg.theme = Theme::Plain;
    cfg.ui_color_enabled = false;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("config").join("config.json.tmp").exists());
}

#[test]
fn corrupt_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    fs::write(manager.config_path(), "{ not json").expect("write");

    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}
