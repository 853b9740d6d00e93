use wallet_core::CurrencyFormatter;
use wallet_domain::{DraftField, WizardStep};

use crate::cli::commands::show_screen;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "plan <new|set <field> <value...>|show|next|back|create>";
const SET_USAGE: &str =
    "plan set <title|description|target|duration|unit|category|priority> <value...>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "plan",
        "Create a savings plan step by step",
        USAGE,
        cmd_plan,
    )]
}

fn cmd_plan(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return Err(CommandError::usage(USAGE));
    };
    match action.to_lowercase().as_str() {
        "new" => {
            context.router.start_plan_creation()?;
            show_screen(context)
        }
        "set" => set_field(context, rest),
        "show" => {
            context.router.wizard_mut()?;
            show_screen(context)
        }
        "next" => {
            context.router.wizard_mut()?.advance()?;
            show_screen(context)
        }
        "back" => {
            context.router.wizard_mut()?;
            context.router.back()?;
            show_screen(context)
        }
        "create" => create(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown plan action `{other}`; usage: {USAGE}"
        ))),
    }
}

fn set_field(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((key, value)) = args.split_first() else {
        return Err(CommandError::usage(SET_USAGE));
    };
    let field = DraftField::from_key(key).ok_or_else(|| {
        CommandError::InvalidArguments(format!("unknown field `{key}`; usage: {SET_USAGE}"))
    })?;
    let value = value.join(" ");

    let wizard = context.router.wizard_mut()?;
    wizard.set_field(field, &value)?;
    let preview = wizard.preview_installment();
    let on_summary = wizard.step() == WizardStep::Summary;

    cli_io::print_success(format!("{field} = {}", value.trim()));
    if matches!(
        field,
        DraftField::TargetAmount | DraftField::Duration | DraftField::DurationUnit
    ) {
        cli_io::print_info(format!(
            "{}: {}",
            context.text().wizard.monthly_amount,
            context.formatters.format_amount(preview as f64)
        ));
    }
    if on_summary {
        show_screen(context)?;
    }
    Ok(())
}

fn create(context: &mut ShellContext) -> CommandResult {
    let plan = context.router.confirm_plan(context.clock.as_ref())?;
    let wizard = &context.text().wizard;
    cli_io::print_success(format!("{}: {}", wizard.success_title, wizard.plan_created));
    tracing::debug!(plan_id = plan.id, "plan added to session");
    show_screen(context)
}
