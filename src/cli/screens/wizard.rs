use wallet_core::{CurrencyFormatter, InstallmentService, LocaleText, PlanWizard};
use wallet_domain::{DraftField, PlanDraft, WizardStep};

use crate::cli::{formatters::CliFormatters, ui::UiStyle};

const BAR_CELLS: usize = 20;

pub fn render(
    style: &UiStyle,
    text: &LocaleText,
    formatters: &CliFormatters,
    wizard: &PlanWizard,
) -> Vec<String> {
    let w = &text.wizard;
    let step = wizard.step();
    let mut lines = vec![
        style.header(w.title),
        format!(
            "{} {}",
            text.step_label(step.number(), WizardStep::COUNT),
            style.progress_bar(step.progress(), BAR_CELLS)
        ),
        String::new(),
    ];
    match step {
        WizardStep::Details => lines.extend(details(style, text, formatters, wizard)),
        WizardStep::Summary => lines.extend(summary(text, formatters, wizard)),
    }
    lines
}

fn details(
    style: &UiStyle,
    text: &LocaleText,
    formatters: &CliFormatters,
    wizard: &PlanWizard,
) -> Vec<String> {
    let w = &text.wizard;
    let draft = wizard.draft();
    let mut lines = vec![w.goal_details.to_string()];
    for field in DraftField::ALL {
        let marker = if field.is_required() { " *" } else { "" };
        let value = field_value(text, draft, field)
            .unwrap_or_else(|| style.muted(field_placeholder(text, field)));
        lines.push(format!(
            "  {:<12} {}{marker}: {value}",
            format!("[{}]", field.key()),
            text.field_label(field)
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "{}: {}",
        w.monthly_amount,
        formatters.format_amount(wizard.preview_installment() as f64)
    ));
    lines.push(style.muted(&format!(
        "plan set <field> <value> · plan next → {} · back → {}",
        w.next, w.back
    )));
    lines
}

fn summary(text: &LocaleText, formatters: &CliFormatters, wizard: &PlanWizard) -> Vec<String> {
    let w = &text.wizard;
    let draft = wizard.draft();
    let target = InstallmentService::parse_target(&draft.target_amount)
        .map(|amount| formatters.format_amount(amount))
        .unwrap_or_else(|| draft.target_amount.trim().to_string());

    let mut lines = vec![w.plan_summary.to_string(), format!("  {}", draft.title.trim())];
    if let Some(description) = draft.description_text() {
        lines.push(format!("  {description}"));
    }
    lines.push(format!("  {}: {target}", w.target_amount));
    lines.push(format!(
        "  {}: {} {}",
        w.total_duration,
        draft.duration.trim(),
        text.duration_unit(draft.duration_unit)
    ));
    if let Some(category) = draft.category {
        lines.push(format!("  {}: {}", w.category, text.plan_category(category)));
    }
    lines.push(format!("  {}: {}", w.priority, text.priority(draft.priority)));
    lines.push(format!(
        "  {}: {}",
        w.monthly_amount,
        formatters.format_amount(wizard.preview_installment() as f64)
    ));
    lines.push(String::new());
    lines.push(format!("plan create → {} · back → {}", w.create_plan, w.back));
    lines
}

fn field_placeholder(text: &LocaleText, field: DraftField) -> &'static str {
    let w = &text.wizard;
    match field {
        DraftField::Title => w.title_placeholder,
        DraftField::Description => w.description_placeholder,
        DraftField::TargetAmount => w.amount_placeholder,
        DraftField::Duration => w.duration_placeholder,
        DraftField::Category => w.select_category,
        DraftField::DurationUnit | DraftField::Priority => "",
    }
}

/// Current value of `field`, `None` while a text field is blank or no
/// category is picked.
fn field_value(text: &LocaleText, draft: &PlanDraft, field: DraftField) -> Option<String> {
    let non_blank = |value: &str| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };
    match field {
        DraftField::Title => non_blank(&draft.title),
        DraftField::Description => non_blank(&draft.description),
        DraftField::TargetAmount => non_blank(&draft.target_amount),
        DraftField::Duration => non_blank(&draft.duration),
        DraftField::DurationUnit => Some(text.duration_unit(draft.duration_unit).to_string()),
        DraftField::Category => draft
            .category
            .map(|category| text.plan_category(category).to_string()),
        DraftField::Priority => Some(text.priority(draft.priority).to_string()),
    }
}
