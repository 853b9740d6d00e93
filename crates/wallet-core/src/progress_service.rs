//! Completion percentage and remaining-time labels for savings plans.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use wallet_domain::SavingsPlan;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
/// Remaining months are approximated with fixed 30-day months.
const MILLIS_PER_MONTH: i64 = 30 * MILLIS_PER_DAY;

/// Time left before a plan's end date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemainingTime {
    Months(i64),
    Days(i64),
    Completed,
}

/// Per-plan values shown in the savings list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanProgress {
    pub percent: f64,
    pub remaining_amount: f64,
    pub remaining_time: RemainingTime,
}

pub struct ProgressService;

impl ProgressService {
    /// `saved / target * 100`, not clamped; overshooting plans exceed 100.
    pub fn percent(saved: f64, target: f64) -> f64 {
        if target == 0.0 {
            return 0.0;
        }
        saved / target * 100.0
    }

    /// Remaining time from `now` until midnight UTC of `end_date`.
    pub fn remaining_time(end_date: NaiveDate, now: DateTime<Utc>) -> RemainingTime {
        let end = end_date.and_time(NaiveTime::MIN).and_utc();
        let diff = (end - now).num_milliseconds();
        let months = ceil_div(diff, MILLIS_PER_MONTH);
        let days = ceil_div(diff, MILLIS_PER_DAY);
        if months > 0 {
            RemainingTime::Months(months)
        } else if days > 0 {
            RemainingTime::Days(days)
        } else {
            RemainingTime::Completed
        }
    }

    pub fn evaluate(plan: &SavingsPlan, now: DateTime<Utc>) -> PlanProgress {
        PlanProgress {
            percent: Self::percent(plan.saved, plan.target),
            remaining_amount: plan.remaining_amount(),
            remaining_time: Self::remaining_time(plan.end_date, now),
        }
    }
}

/// Ceiling division for a positive divisor.
fn ceil_div(value: i64, divisor: i64) -> i64 {
    let quotient = value.div_euclid(divisor);
    if value.rem_euclid(divisor) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

/// Percentage rendered with one decimal place, e.g. `56.7%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
    }

    #[test]
    fn percent_is_exact_and_unclamped() {
        assert_eq!(ProgressService::percent(12_000.0, 12_000.0), 100.0);
        assert_eq!(ProgressService::percent(18_750.0, 25_000.0), 75.0);
        assert_eq!(ProgressService::percent(15_000.0, 10_000.0), 150.0);
        assert_eq!(format_percent(ProgressService::percent(8_500.0, 15_000.0)), "56.7%");
    }

    #[test]
    fn distant_end_date_reports_rounded_up_months() {
        let end = NaiveDate::from_ymd_opt(2027, 10, 17).unwrap();
        // 364 days and 14.5 hours / 30 days rounds up to 13.
        assert_eq!(
            ProgressService::remaining_time(end, now()),
            RemainingTime::Months(13)
        );
    }

    #[test]
    fn anything_left_within_a_month_still_counts_as_one_month() {
        let end = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        assert_eq!(
            ProgressService::remaining_time(end, now()),
            RemainingTime::Months(1)
        );
    }

    #[test]
    fn past_or_current_end_date_is_completed() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(
            ProgressService::remaining_time(today, now()),
            RemainingTime::Completed
        );
        let midnight = today.and_time(NaiveTime::MIN).and_utc();
        assert_eq!(
            ProgressService::remaining_time(today, midnight),
            RemainingTime::Completed
        );
        let past = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(
            ProgressService::remaining_time(past, now() + Duration::days(3)),
            RemainingTime::Completed
        );
    }

    #[test]
    fn ceil_div_handles_negative_values() {
        assert_eq!(ceil_div(-1, 30), 0);
        assert_eq!(ceil_div(-31, 30), -1);
        assert_eq!(ceil_div(30, 30), 1);
        assert_eq!(ceil_div(31, 30), 2);
    }
}
