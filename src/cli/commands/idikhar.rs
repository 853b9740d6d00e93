use wallet_core::IdikharTab;

use crate::cli::commands::show_screen;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "tab",
            "Switch between the Idikhar tabs",
            "tab <categories|savings>",
            cmd_tab,
        ),
        CommandEntry::new(
            "categories",
            "Show the monthly spend per category",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new(
            "plans",
            "List savings plans",
            "plans",
            cmd_plans,
        ),
    ]
}

fn cmd_tab(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let tab = args
        .first()
        .and_then(|value| IdikharTab::from_key(value))
        .ok_or_else(|| CommandError::usage("tab <categories|savings>"))?;
    select(context, tab)
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    select(context, IdikharTab::Categories)
}

fn cmd_plans(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    select(context, IdikharTab::Savings)
}

fn select(context: &mut ShellContext, tab: IdikharTab) -> CommandResult {
    context.router.select_tab(tab)?;
    show_screen(context)
}
