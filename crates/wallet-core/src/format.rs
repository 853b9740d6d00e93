use chrono::NaiveDate;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter {
    fn format_amount(&self, amount: f64) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter {
    fn format_date(&self, date: NaiveDate) -> String;
}
