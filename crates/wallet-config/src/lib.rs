//! wallet-config
//!
//! Persistent user preferences for the Idikhar wallet shell.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AccessibilitySettings, Config, ConfigKey, Theme};
