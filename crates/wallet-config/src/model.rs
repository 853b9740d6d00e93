use serde::{de::Deserializer, Deserialize, Serialize};
use std::fmt;
use wallet_domain::{Language, CURRENCY_CODE};

use crate::ConfigError;

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// Reveal the wallet balance on start instead of the masked placeholder.
    #[serde(default)]
    pub show_balance_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            currency: Self::default_currency(),
            theme: Theme::default(),
            accessibility: AccessibilitySettings::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            show_balance_on_start: false,
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        CURRENCY_CODE.into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Applies a `config set` edit.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.name(),
            value: value.trim().to_string(),
        };
        match key {
            ConfigKey::Language => self.language = value.parse().map_err(|_| invalid())?,
            ConfigKey::Color => self.ui_color_enabled = parse_switch(value).ok_or_else(invalid)?,
            ConfigKey::Theme => self.theme = Theme::parse(value).ok_or_else(invalid)?,
            ConfigKey::Balance => {
                self.show_balance_on_start = parse_switch(value).ok_or_else(invalid)?
            }
        }
        Ok(())
    }

    /// Current value of `key` as shown by `config show`.
    pub fn value_of(&self, key: ConfigKey) -> String {
        let switch = |on: bool| String::from(if on { "on" } else { "off" });
        match key {
            ConfigKey::Language => self.language.to_string(),
            ConfigKey::Color => switch(self.ui_color_enabled),
            ConfigKey::Theme => self.theme.to_string(),
            ConfigKey::Balance => switch(self.show_balance_on_start),
        }
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Keys editable through `config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Language,
    Color,
    Theme,
    Balance,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::Language,
        ConfigKey::Color,
        ConfigKey::Theme,
        ConfigKey::Balance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::Language => "language",
            ConfigKey::Color => "color",
            ConfigKey::Theme => "theme",
            ConfigKey::Balance => "balance",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|key| key.name() == normalized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    #[default]
    Iconic,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(Theme::Plain),
            "iconic" => Some(Theme::Iconic),
            _ => None,
        }
    }

    pub fn uses_icons(self) -> bool {
        matches!(self, Theme::Iconic)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

// Unknown or missing theme names fall back to the default.
impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().and_then(Theme::parse).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_rejects_unknown_values() {
        let mut config = Config::default();
        let err = config.set(ConfigKey::Color, "maybe").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value `maybe` for `color`");
        assert!(config.ui_color_enabled);
    }

    #[test]
    fn set_updates_each_key() {
        let mut config = Config::default();
        config.set(ConfigKey::Language, "ar").unwrap();
        config.set(ConfigKey::Color, "off").unwrap();
        config.set(ConfigKey::Theme, "plain").unwrap();
        config.set(ConfigKey::Balance, "on").unwrap();
        assert_eq!(config.language, Language::Ar);
        assert_eq!(config.value_of(ConfigKey::Color), "off");
        assert_eq!(config.theme, Theme::Plain);
        assert!(config.show_balance_on_start);
    }

    #[test]
    fn unknown_theme_deserializes_to_default() {
        let config: Config = serde_json::from_str(r#"{"theme":"neon"}"#).unwrap();
        assert_eq!(config.theme, Theme::Iconic);
        assert_eq!(config.currency, "MRU");
    }
}
