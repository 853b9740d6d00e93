use wallet_core::{catalog::CATEGORY_SPEND, CurrencyFormatter, LocaleText};

use crate::cli::{
    formatters::{group_thousands, CliFormatters},
    screens::spend_visual,
    ui::{Table, TableColumn, TableRenderer, UiStyle},
};

const BAR_CELLS: usize = 10;

/// Monthly spend per transaction category.
pub fn render(style: &UiStyle, text: &LocaleText, formatters: &CliFormatters) -> Vec<String> {
    let c = &text.categories;
    let title = format!("{} ({})", text.idikhar.categories_title, text.idikhar.automatic_badge);
    let mut table = Table::new(
        Some(title),
        vec![
            TableColumn::new("", 16),
            TableColumn::new(c.spent, 22),
            TableColumn::new(c.this_month, 18),
            TableColumn::new(c.remaining, 12),
        ],
    );

    for spend in &CATEGORY_SPEND {
        let (glyph, color) = spend_visual(spend.category);
        let name = format!("{}{}", style.icon(glyph), text.spend_category(spend.category));
        let percent = spend.percent_used();
        table.add_row(vec![
            style.paint(&name, color),
            format!(
                "{} {} {}",
                group_thousands(spend.spent),
                c.of,
                formatters.format_amount(spend.budget)
            ),
            format!(
                "{} {percent}%",
                style.progress_bar(f64::from(percent) / 100.0, BAR_CELLS)
            ),
            formatters.format_amount(spend.remaining()),
        ]);
    }

    TableRenderer::render(&table, style)
}

#[cfg(test)]
mod tests {
    use wallet_domain::Language;

    use super::*;

    #[test]
    fn lists_every_category_with_percent_and_remaining() {
        let lines = render(
            &UiStyle::plain(),
            LocaleText::for_language(Language::Fr),
            &CliFormatters::new("MRU"),
        );
        assert_eq!(lines[0], "> Catégorisation automatique (Automatique)");
        assert_eq!(lines.len(), 3 + 6);

        let food = &lines[3];
        assert!(food.starts_with("Alimentation"));
        assert!(food.contains("2,850 sur 4,000 MRU"));
        assert!(food.contains("71%"));
        assert!(food.ends_with("1,150 MRU"));

        let health = &lines[8];
        assert!(health.starts_with("Santé"));
        assert!(health.contains("32%"));
        assert!(health.ends_with("680 MRU"));
    }
}
