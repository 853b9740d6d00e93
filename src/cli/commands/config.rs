use wallet_config::ConfigKey;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters::CliFormatters;
use crate::cli::io as cli_io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{self, Table, TableColumn, TableRenderer};

const USAGE: &str = "config [show|set <language|color|theme|balance> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change saved preferences",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|action| action.to_lowercase()).as_deref() {
        None | Some("show") => show_config(context),
        Some("set") => {
            let (Some(key), Some(_)) = (args.get(1), args.get(2)) else {
                return Err(CommandError::usage(USAGE));
            };
            let value = args[2..].join(" ");
            set_config_value(context, key, &value)
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`; usage: {USAGE}"
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let mut table = Table::new(
        Some("Configuration"),
        vec![TableColumn::new("Key", 10), TableColumn::new("Value", 24)],
    );
    for key in ConfigKey::ALL {
        table.add_row(vec![key.name().to_string(), context.config.value_of(key)]);
    }
    table.add_row(vec!["currency".to_string(), context.config.currency.clone()]);
    table.add_row(vec![
        "file".to_string(),
        context.config_manager.config_path().display().to_string(),
    ]);
    cli_io::print_lines(&TableRenderer::render(&table, &ui::style()))?;
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let key = ConfigKey::from_name(key).ok_or_else(|| {
        CommandError::InvalidArguments(format!("unknown config key `{key}`; usage: {USAGE}"))
    })?;
    context.config.set(key, value)?;
    context.persist_config()?;

    match key {
        ConfigKey::Language => context.router.set_language(context.config.language),
        ConfigKey::Color | ConfigKey::Theme => context.apply_config(),
        ConfigKey::Balance => {}
    }
    context.formatters = CliFormatters::new(context.config.currency.clone());
    cli_io::print_success(format!(
        "{} set to `{}`.",
        key.name(),
        context.config.value_of(key)
    ));
    Ok(())
}
