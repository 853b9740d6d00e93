//! Suggested monthly contribution for a savings goal.

use wallet_domain::DurationUnit;

pub struct InstallmentService;

impl InstallmentService {
    /// Suggested monthly installment for the raw form inputs.
    ///
    /// Incomplete input yields `0` instead of an error so the value can be
    /// recomputed on every keystroke for the live preview.
    pub fn monthly_installment(target_amount: &str, duration: &str, unit: DurationUnit) -> u64 {
        let (Some(target), Some(months)) = (
            Self::parse_target(target_amount),
            Self::total_months(duration, unit),
        ) else {
            return 0;
        };
        Self::installment_for(target, months)
    }

    /// `ceil(target / months)` for already parsed values.
    pub fn installment_for(target: f64, months: u32) -> u64 {
        if months == 0 || !target.is_finite() || target <= 0.0 {
            return 0;
        }
        (target / f64::from(months)).ceil() as u64
    }

    /// Duration normalised to calendar months, `None` when absent or not positive.
    pub fn total_months(duration: &str, unit: DurationUnit) -> Option<u32> {
        let value = duration.trim().parse::<u32>().ok().filter(|value| *value > 0)?;
        value.checked_mul(unit.months_multiplier())
    }

    /// Target amount as a positive finite decimal.
    pub fn parse_target(target_amount: &str) -> Option<f64> {
        target_amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
    }
}
