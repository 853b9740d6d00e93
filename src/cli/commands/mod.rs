pub mod config;
pub mod idikhar;
pub mod plan;
pub mod system;
pub mod wallet;

use wallet_core::{Clock, IdikharTab, Screen};

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::screens;
use crate::cli::ui;

const ROOT_COMMAND_ORDER: &[&str] = &[
    "home",
    "balance",
    "service",
    "idikhar",
    "tab",
    "categories",
    "plans",
    "plan",
    "back",
    "lang",
    "config",
    "help",
    "version",
    "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(wallet::definitions());
    commands.extend(idikhar::definitions());
    commands.extend(plan::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

/// Renders whichever screen the router has mounted.
pub(crate) fn show_screen(context: &ShellContext) -> CommandResult {
    let style = ui::style();
    let text = context.text();
    let formatters = &context.formatters;
    let lines = match context.router.screen() {
        Screen::WalletHome => {
            screens::wallet_home::render(&style, formatters, context.router.balance_visible())
        }
        Screen::Idikhar(tab) => {
            let mut lines = screens::idikhar::render_header(&style, text, formatters, tab);
            match tab {
                IdikharTab::Categories => {
                    lines.extend(screens::categories::render(&style, text, formatters))
                }
                IdikharTab::Savings => lines.extend(screens::savings::render(
                    &style,
                    text,
                    formatters,
                    &context.router.savings_plans(),
                    context.clock.now(),
                )),
            }
            lines
        }
        Screen::CreatePlan => match context.router.session().and_then(|s| s.wizard()) {
            Some(wizard) => screens::wizard::render(&style, text, formatters, wizard),
            None => Vec::new(),
        },
    };
    cli_io::print_lines(&lines)?;
    Ok(())
}
