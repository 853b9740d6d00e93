//! Turns a confirmed wizard draft into a savings plan record.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Months, NaiveDate};
use wallet_domain::{PlanDraft, PlanStatus, SavingsPlan};

use crate::{installment_service::InstallmentService, time::Clock, CoreError};

static LAST_PLAN_ID: AtomicU64 = AtomicU64::new(0);

/// Issues plan identifiers that never repeat within the process.
///
/// Identifiers start from the clock's millisecond timestamp and are bumped
/// past the last issued value, so two plans created within the same
/// millisecond still receive distinct ids.
pub fn next_plan_id(clock: &dyn Clock) -> u64 {
    let candidate = clock.now().timestamp_millis().max(0) as u64;
    let mut last = LAST_PLAN_ID.load(Ordering::Relaxed);
    loop {
        let next = candidate.max(last + 1);
        match LAST_PLAN_ID.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return next,
            Err(observed) => last = observed,
        }
    }
}

pub struct PlanFactory;

impl PlanFactory {
    /// Builds an active plan from `draft`.
    ///
    /// Presence of the required fields is checked by the wizard before this
    /// point; a blank title and numeric fields that fail to parse are
    /// rejected here as well.
    pub fn create(draft: &PlanDraft, clock: &dyn Clock) -> Result<SavingsPlan, CoreError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation("title is required".into()));
        }
        let target = InstallmentService::parse_target(&draft.target_amount).ok_or_else(|| {
            CoreError::Validation(format!(
                "target amount `{}` is not a positive number",
                draft.target_amount.trim()
            ))
        })?;
        let months = InstallmentService::total_months(&draft.duration, draft.duration_unit)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "duration `{}` is not a positive whole number",
                    draft.duration.trim()
                ))
            })?;
        let category = draft
            .category
            .ok_or_else(|| CoreError::Validation("category is required".into()))?;

        let end_date = end_date_after(clock.today(), months)?;
        let plan = SavingsPlan {
            id: next_plan_id(clock),
            title: title.to_string(),
            target,
            saved: 0.0,
            status: PlanStatus::Active,
            end_date,
            monthly_amount: InstallmentService::installment_for(target, months),
            category,
            description: draft.description_text().map(str::to_string),
        };

        tracing::info!(
            plan_id = plan.id,
            months,
            monthly_amount = plan.monthly_amount,
            category = %plan.category,
            "savings plan created"
        );
        Ok(plan)
    }
}

/// `start` advanced by `months` calendar months, clamping to the last day of
/// shorter months (Jan 31 + 1 month = Feb 28/29).
pub fn end_date_after(start: NaiveDate, months: u32) -> Result<NaiveDate, CoreError> {
    start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| CoreError::Validation(format!("duration of {months} months is out of range")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use wallet_domain::{DraftUpdate, DurationUnit, PlanCategory};

    use super::*;
    use crate::time::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap())
    }

    fn draft(target: &str, duration: &str, unit: DurationUnit) -> PlanDraft {
        let mut draft = PlanDraft::new();
        draft.apply(DraftUpdate::Title("Vacances".into()));
        draft.apply(DraftUpdate::TargetAmount(target.into()));
        draft.apply(DraftUpdate::Duration(duration.into()));
        draft.apply(DraftUpdate::DurationUnit(unit));
        draft.apply(DraftUpdate::Category(PlanCategory::Vacation));
        draft
    }

    #[test]
    fn end_date_clamps_to_month_end() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(
            end_date_after(start, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
        assert_eq!(
            end_date_after(start, 12).unwrap(),
            NaiveDate::from_ymd_opt(2027, 1, 31).unwrap()
        );
    }

    #[test]
    fn years_are_expanded_before_date_arithmetic() {
        let plan = PlanFactory::create(&draft("24000", "2", DurationUnit::Years), &clock())
            .expect("create plan");
        assert_eq!(plan.end_date, NaiveDate::from_ymd_opt(2028, 1, 31).unwrap());
        assert_eq!(plan.monthly_amount, 1000);
    }

    #[test]
    fn unparsable_target_is_rejected() {
        let err = PlanFactory::create(&draft("beaucoup", "12", DurationUnit::Months), &clock())
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut input = draft("1200", "12", DurationUnit::Months);
        input.apply(DraftUpdate::Title("  ".into()));
        let err = PlanFactory::create(&input, &clock()).unwrap_err();
        assert_eq!(err, CoreError::Validation("title is required".into()));
    }

    #[test]
    fn blank_description_is_not_stored() {
        let mut input = draft("1200", "12", DurationUnit::Months);
        input.apply(DraftUpdate::Description("  ".into()));
        let plan = PlanFactory::create(&input, &clock()).expect("create plan");
        assert_eq!(plan.description, None);

        input.apply(DraftUpdate::Description(" Plage ".into()));
        let plan = PlanFactory::create(&input, &clock()).expect("create plan");
        assert_eq!(plan.description.as_deref(), Some("Plage"));
    }

    #[test]
    fn ids_stay_unique_under_a_frozen_clock() {
        let clock = clock();
        let ids: HashSet<u64> = (0..500).map(|_| next_plan_id(&clock)).collect();
        assert_eq!(ids.len(), 500);
    }
}
