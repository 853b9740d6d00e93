use wallet_core::{catalog::WalletService, Screen};
use wallet_domain::Language;

use crate::cli::commands::show_screen;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "home",
            "Return to the wallet home screen",
            "home",
            cmd_home,
        ),
        CommandEntry::new(
            "balance",
            "Show or hide the wallet balance",
            "balance",
            cmd_balance,
        ),
        CommandEntry::new(
            "service",
            "Open a wallet service",
            "service <transfer|bills|topup|withdrawal|gimtel|merchant|idikhar>",
            cmd_service,
        ),
        CommandEntry::new(
            "idikhar",
            "Open the Idikhar savings assistant",
            "idikhar",
            cmd_idikhar,
        ),
        CommandEntry::new(
            "back",
            "Go back to the previous screen",
            "back",
            cmd_back,
        ),
        CommandEntry::new(
            "lang",
            "Switch the display language",
            "lang [fr|ar]",
            cmd_lang,
        ),
    ]
}

fn cmd_home(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    while context.router.screen() != Screen::WalletHome {
        context.router.back()?;
    }
    show_screen(context)
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let visible = context.router.toggle_balance()?;
    tracing::debug!(visible, "balance visibility toggled");
    show_screen(context)
}

fn cmd_service(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = args.join(" ");
    if name.trim().is_empty() {
        return Err(CommandError::usage(
            "service <transfer|bills|topup|withdrawal|gimtel|merchant|idikhar>",
        ));
    }
    let service = WalletService::from_key(&name)
        .ok_or_else(|| CommandError::InvalidArguments(format!("unknown service `{name}`")))?;
    open_service(context, service)
}

fn cmd_idikhar(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.router.screen() {
        Screen::WalletHome => open_service(context, WalletService::Idikhar),
        _ => show_screen(context),
    }
}

fn open_service(context: &mut ShellContext, service: WalletService) -> CommandResult {
    if context.router.open_service(service)? {
        show_screen(context)
    } else {
        cli_io::print_warning(format!("`{}` is not available yet.", service.title()));
        Ok(())
    }
}

fn cmd_back(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.router.back()?;
    show_screen(context)
}

fn cmd_lang(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let language = match args.first() {
        Some(value) => value.parse::<Language>().map_err(wallet_core::CoreError::from)?,
        None => context.router.language().toggled(),
    };
    context.router.set_language(language);
    cli_io::print_success(format!("Language: {language}"));
    if context.router.screen() != Screen::WalletHome {
        show_screen(context)?;
    }
    Ok(())
}
