use chrono::NaiveDate;
use wallet_core::{CurrencyFormatter, DateFormatter};

/// Amount and date formatting for the shell, e.g. `15,847 MRU`.
#[derive(Debug, Clone)]
pub struct CliFormatters {
    currency: String,
}

impl CliFormatters {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// Amount with an explicit `+` for gains, as on the monthly change badge.
    pub fn format_signed(&self, amount: f64) -> String {
        if amount > 0.0 {
            format!("+{}", self.format_amount(amount))
        } else {
            self.format_amount(amount)
        }
    }
}

impl CurrencyFormatter for CliFormatters {
    fn format_amount(&self, amount: f64) -> String {
        format!("{} {}", group_thousands(amount), self.currency)
    }
}

impl DateFormatter for CliFormatters {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

/// `15847.5` -> `15,847.5`. At most two decimals, trailing zeros dropped.
pub fn group_thousands(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".into();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction > 0 {
        let decimals = format!("{fraction:02}");
        grouped.push('.');
        grouped.push_str(decimals.trim_end_matches('0'));
    }
    if amount < 0.0 && cents > 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_like_the_wallet() {
        assert_eq!(group_thousands(15_847.0), "15,847");
        assert_eq!(group_thousands(100_000.0), "100,000");
        assert_eq!(group_thousands(1_250.0), "1,250");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(1_234_567.5), "1,234,567.5");
        assert_eq!(group_thousands(-6_500.0), "-6,500");
    }

    #[test]
    fn formats_with_currency_code() {
        let formatters = CliFormatters::new("MRU");
        assert_eq!(formatters.format_amount(15_847.0), "15,847 MRU");
        assert_eq!(formatters.format_signed(2_340.0), "+2,340 MRU");
        assert_eq!(
            formatters.format_date(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()),
            "2026-03-15"
        );
    }
}
