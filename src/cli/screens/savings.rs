use chrono::{DateTime, Utc};
use wallet_core::{
    count_with_status, format_percent, CurrencyFormatter, DateFormatter, LocaleText,
    ProgressService,
};
use wallet_domain::{PlanStatus, SavingsPlan};

use crate::cli::{formatters::CliFormatters, screens::plan_visual, ui::UiStyle};

const BAR_CELLS: usize = 20;

/// Savings plan cards, examples first, then plans created this session.
pub fn render(
    style: &UiStyle,
    text: &LocaleText,
    formatters: &CliFormatters,
    plans: &[SavingsPlan],
    now: DateTime<Utc>,
) -> Vec<String> {
    let s = &text.savings;
    let refs: Vec<&SavingsPlan> = plans.iter().collect();
    let mut lines = vec![
        style.header(text.idikhar.savings_title),
        format!(
            "{}: {}",
            s.active_plans,
            count_with_status(&refs, PlanStatus::Active)
        ),
        style.muted(&format!("plan new → {}", text.idikhar.create_plan)),
        String::new(),
    ];

    for plan in plans {
        lines.extend(render_card(style, text, formatters, plan, now));
        lines.push(String::new());
    }
    lines
}

fn render_card(
    style: &UiStyle,
    text: &LocaleText,
    formatters: &CliFormatters,
    plan: &SavingsPlan,
    now: DateTime<Utc>,
) -> Vec<String> {
    let s = &text.savings;
    let progress = ProgressService::evaluate(plan, now);
    let (glyph, color) = plan_visual(plan);

    let mut lines = vec![
        format!(
            "{} [{}]",
            style.paint(&format!("{}{}", style.icon(glyph), plan.title), color),
            text.status_badge(plan.status)
        ),
        format!("  {}: {}", s.target, formatters.format_amount(plan.target)),
        format!("  {}: {}", s.saved, formatters.format_amount(plan.saved)),
        format!(
            "  {} {}  {} {}",
            style.progress_bar(progress.percent / 100.0, BAR_CELLS),
            format_percent(progress.percent),
            formatters.format_amount(progress.remaining_amount),
            s.remaining
        ),
    ];
    if plan.is_active() {
        lines.push(format!(
            "  {}  {}: {}",
            text.remaining_time(progress.remaining_time),
            s.next_payment,
            formatters.format_amount(plan.monthly_amount as f64)
        ));
    }
    lines.push(format!("  {}: {}", s.end_date, formatters.format_date(plan.end_date)));
    lines
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use wallet_core::catalog::example_plans;
    use wallet_domain::Language;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn renders_example_cards_in_french() {
        let plans = example_plans(Language::Fr);
        let lines = render(
            &UiStyle::plain(),
            LocaleText::for_language(Language::Fr),
            &CliFormatters::new("MRU"),
            &plans,
            now(),
        );

        assert_eq!(lines[0], "> Plans d'épargne");
        assert_eq!(lines[1], "Plans actifs: 3");
        assert_eq!(lines[4], "Vacances d'été [En cours]");
        assert_eq!(lines[5], "  Objectif: 15,000 MRU");
        assert_eq!(lines[6], "  Épargné: 8,500 MRU");
        assert!(lines[7].ends_with("56.7%  6,500 MRU Restant"));
        assert_eq!(lines[8], "  6 mois restants  Prochain versement: 1,500 MRU");
        assert_eq!(lines[9], "  Date de fin: 2024-06-15");
    }

    #[test]
    fn completed_plan_has_no_payment_line() {
        let plans = example_plans(Language::Fr);
        let lines = render_card(
            &UiStyle::plain(),
            LocaleText::for_language(Language::Fr),
            &CliFormatters::new("MRU"),
            &plans[3],
            now(),
        );
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Nouvelle voiture [Terminés]");
        assert!(lines[3].contains("100.0%"));
        assert_eq!(lines[4], "  Date de fin: 2024-01-15");
    }
}
