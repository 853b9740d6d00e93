//! In-memory collection of plans created during the current session.

use wallet_domain::{PlanStatus, SavingsPlan};

/// Append-only mutator handed to the creation wizard.
pub trait PlanSink {
    fn append(&mut self, plan: SavingsPlan);
}

/// Plans created since the Idikhar screen was mounted.
#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    plans: Vec<SavingsPlan>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plans(&self) -> &[SavingsPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Built-in `examples` first, then the session plans, in insertion order.
    pub fn merged<'a>(&'a self, examples: &'a [SavingsPlan]) -> Vec<&'a SavingsPlan> {
        examples.iter().chain(self.plans.iter()).collect()
    }
}

impl PlanSink for PlanStore {
    fn append(&mut self, plan: SavingsPlan) {
        tracing::debug!(plan_id = plan.id, total = self.plans.len() + 1, "plan appended to store");
        self.plans.push(plan);
    }
}

/// Number of plans in `plans` with the given status.
pub fn count_with_status(plans: &[&SavingsPlan], status: PlanStatus) -> usize {
    plans.iter().filter(|plan| plan.status == status).count()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use wallet_domain::PlanCategory;

    use super::*;

    fn plan(id: u64, status: PlanStatus) -> SavingsPlan {
        SavingsPlan {
            id,
            title: format!("Plan {id}"),
            target: 1_000.0,
            saved: 0.0,
            status,
            end_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            monthly_amount: 100,
            category: PlanCategory::Other,
            description: None,
        }
    }

    #[test]
    fn merged_lists_examples_first() {
        let examples = vec![plan(1, PlanStatus::Active), plan(2, PlanStatus::Completed)];
        let mut store = PlanStore::new();
        store.append(plan(100, PlanStatus::Active));
        store.append(plan(101, PlanStatus::Active));

        let merged = store.merged(&examples);
        let ids: Vec<u64> = merged.iter().map(|plan| plan.id).collect();
        assert_eq!(ids, vec![1, 2, 100, 101]);
        assert_eq!(count_with_status(&merged, PlanStatus::Active), 3);
    }

    #[test]
    fn merge_does_not_deduplicate() {
        let examples = vec![plan(1, PlanStatus::Active)];
        let mut store = PlanStore::new();
        store.append(plan(1, PlanStatus::Active));
        assert_eq!(store.merged(&examples).len(), 2);
    }
}
