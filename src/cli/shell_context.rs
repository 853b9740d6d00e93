//! Shared runtime state for CLI interactions and command execution.

use std::sync::Arc;

use dialoguer::theme::ColorfulTheme;
use wallet_config::{Config, ConfigManager};
use wallet_core::{Clock, LocaleText, ViewRouter};

use super::{formatters::CliFormatters, registry::CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub router: ViewRouter,
    pub clock: Arc<dyn Clock>,
    pub formatters: CliFormatters,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// String table for the language currently shown.
    pub fn text(&self) -> &'static LocaleText {
        LocaleText::for_language(self.router.language())
    }

    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, last_command: {:?}, screen: {:?}, language: {} }}",
            self.running,
            self.last_command,
            self.router.screen(),
            self.router.language()
        )
    }
}
