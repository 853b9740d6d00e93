//! Command dispatch, error reporting and shell context construction.

use std::{io, path::PathBuf, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use wallet_config::{Config, ConfigError, ConfigManager};
use wallet_core::{Clock, CoreError, Screen, ViewRouter};

pub use crate::errors::CliError;

use super::commands;
use super::formatters::CliFormatters;
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};
use super::system_clock::SystemClock;
use super::ui;
pub use crate::cli::shell_context::{CliMode, ShellContext};
use crate::utils::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_home(mode, paths::home_dir(), Arc::new(SystemClock))
    }

    /// Context whose config lives under `home`, reading time from `clock`.
    pub fn with_home(mode: CliMode, home: PathBuf, clock: Arc<dyn Clock>) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(home)?;
        let config = config_manager.load()?;

        let mut router = ViewRouter::new(config.language);
        if config.show_balance_on_start {
            router.toggle_balance()?;
        }

        let context = ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            router,
            clock,
            formatters: CliFormatters::new(config.currency.clone()),
            config_manager,
            config,
            last_command: None,
            running: true,
        };
        context.apply_config();
        tracing::debug!(mode = ?mode, "shell context ready");
        Ok(context)
    }

    /// Pushes display preferences from the config into the output layer.
    pub(crate) fn apply_config(&self) {
        output::set_preferences(OutputPreferences {
            color_enabled: self.config.ui_color_enabled,
            plain_mode: self.config.accessibility.plain_output,
            high_contrast_mode: self.config.accessibility.high_contrast,
            use_icons: self.config.theme.uses_icons(),
        });
        ui::refresh_style();
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn prompt(&self) -> String {
        let location = match self.router.screen() {
            Screen::WalletHome => "wallet".to_string(),
            Screen::Idikhar(tab) => format!("idikhar/{tab}"),
            Screen::CreatePlan => "idikhar/new-plan".to_string(),
        };
        format!("idikhar [{location}] ({})> ", self.router.language())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        tracing::debug!(command, args = args.len(), state = %self.status(), "dispatching command");
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(&err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };

        self.last_command = Some(line.trim().to_string());
        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.dispatch(&command, raw, &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        if let Some(best) = self.registry.closest(input, 3) {
            cli_io::print_info(format!("Suggestion: `{best}`?"));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if !self.can_prompt() {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", false).map_err(CliError::from)
    }

    /// Prints a failed command. Only errors that leave the shell unusable
    /// are propagated.
    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(CoreError::MissingFields(fields)) => {
                let text = self.text();
                let wizard = &text.wizard;
                cli_io::print_error(format!("{}: {}", wizard.error_title, wizard.fill_required));
                cli_io::print_hint(text.missing_fields_hint(&fields));
                Ok(())
            }
            CommandError::Readline(inner) => Err(CliError::Readline(inner)),
            other => {
                cli_io::print_error(other);
                Ok(())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub(crate) fn usage(entry_usage: &str) -> Self {
        CommandError::InvalidArguments(format!("usage: {entry_usage}"))
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Io(inner) => CliError::Io(inner),
            CommandError::Readline(inner) => CliError::Readline(inner),
            other => CliError::Command(other.to_string()),
        }
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    home: &std::path::Path,
    lines: &[&str],
) -> Result<ShellContext, CliError> {
    use chrono::{TimeZone, Utc};
    use wallet_core::FixedClock;

    let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap());
    let mut context = ShellContext::with_home(CliMode::Script, home.to_path_buf(), Arc::new(clock))?;
    for line in lines {
        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(context)
}
