use wallet_core::{
    catalog::{WalletService, ACCOUNT_HOLDER, BOTTOM_NAVIGATION, WALLET_BALANCE},
    CurrencyFormatter,
};

use crate::cli::{formatters::CliFormatters, ui::UiStyle};

const MASKED_BALANCE: &str = "** **";

fn service_icon(service: WalletService) -> &'static str {
    match service {
        WalletService::MoneyTransfer => "⇄",
        WalletService::BillPayment => "🧾",
        WalletService::PhoneTopUp => "📱",
        WalletService::Withdrawal => "🏧",
        WalletService::Gimtel => "💳",
        WalletService::MerchantPayment => "🛍",
        WalletService::Idikhar => "🐷",
    }
}

fn service_line(style: &UiStyle, service: WalletService) -> String {
    format!(
        "  {}{:<24} {}",
        style.icon(service_icon(service)),
        service.title(),
        style.muted(&format!("(service {})", service.key()))
    )
}

pub fn render(style: &UiStyle, formatters: &CliFormatters, balance_visible: bool) -> Vec<String> {
    let balance = if balance_visible {
        formatters.format_amount(WALLET_BALANCE)
    } else {
        MASKED_BALANCE.to_string()
    };

    let mut lines = vec![
        style.header(ACCOUNT_HOLDER),
        format!("Solde actuel: {balance}"),
        String::new(),
    ];
    lines.extend(WalletService::MAIN.iter().map(|s| service_line(style, *s)));
    lines.push(String::new());
    lines.push("Services rapides".to_string());
    lines.extend(WalletService::QUICK.iter().map(|s| service_line(style, *s)));
    lines.push(style.horizontal_line());

    let navigation = BOTTOM_NAVIGATION
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            if idx == 0 {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" · ");
    lines.push(navigation);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_is_masked_until_revealed() {
        let style = UiStyle::plain();
        let formatters = CliFormatters::new("MRU");

        let hidden = render(&style, &formatters, false);
        assert_eq!(hidden[0], "> Mama Mohamed Amar Jewda");
        assert_eq!(hidden[1], "Solde actuel: ** **");

        let shown = render(&style, &formatters, true);
        assert_eq!(shown[1], "Solde actuel: 15,847 MRU");
        assert!(shown.iter().any(|line| line.contains("Idikhar")));
        assert_eq!(
            shown.last().map(String::as_str),
            Some("[Tableau de bord] · Transactions · Localisateur · Menu")
        );
    }
}
