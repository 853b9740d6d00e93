use wallet_core::{
    catalog::{MONTHLY_CHANGE, WALLET_BALANCE},
    CurrencyFormatter, IdikharTab, LocaleText,
};

use crate::cli::{formatters::CliFormatters, ui::UiStyle};

/// Title, language switch, balance card and tab bar.
pub fn render_header(
    style: &UiStyle,
    text: &LocaleText,
    formatters: &CliFormatters,
    tab: IdikharTab,
) -> Vec<String> {
    let t = &text.idikhar;
    let mut lines = vec![
        style.header(t.title),
        style.muted(t.subtitle),
        format!("lang → {}", t.switch_language),
        format!("{}: {}", t.balance, formatters.format_amount(WALLET_BALANCE)),
        format!("{}: {}", t.this_month, formatters.format_signed(MONTHLY_CHANGE)),
    ];

    let tabs = [
        (IdikharTab::Categories, t.categories_tab),
        (IdikharTab::Savings, t.savings_tab),
    ]
    .iter()
    .map(|(candidate, label)| {
        if *candidate == tab {
            format!("[{label}]")
        } else {
            format!(" {label} ")
        }
    })
    .collect::<Vec<_>>()
    .join(" ");
    lines.push(tabs);
    lines.push(style.horizontal_line());
    lines
}
