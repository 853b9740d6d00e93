use std::{env, path::PathBuf};

use wallet_config::ConfigManager;

/// Overrides the data directory; used by tests and portable installs.
pub const HOME_ENV: &str = "IDIKHAR_HOME";

/// `$IDIKHAR_HOME` when set and non-empty, otherwise `~/.idikhar`.
pub fn home_dir() -> PathBuf {
    env::var_os(HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(ConfigManager::default_base_dir)
}
