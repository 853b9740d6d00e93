//! Two-step savings plan creation wizard.
//!
//! The wizard owns the [`PlanDraft`] for the lifetime of one creation flow.
//! Step one collects the goal details; step two shows the summary and, on
//! confirmation, hands the finished plan to the owning store.

use wallet_domain::{DraftField, DraftUpdate, PlanDraft, SavingsPlan, WizardStep};

use crate::{
    installment_service::InstallmentService, plan_factory::PlanFactory, plan_store::PlanSink,
    time::Clock, CoreError,
};

/// Result of pressing "back".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackOutcome {
    /// Returned to the details step with the draft intact.
    ReturnedToDetails,
    /// Left the wizard from the first step; the draft is discarded.
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct PlanWizard {
    draft: PlanDraft,
    step: WizardStep,
}

impl PlanWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &PlanDraft {
        &self.draft
    }

    /// Applies a field edit. Edits are accepted on either step.
    pub fn update(&mut self, update: DraftUpdate) {
        tracing::trace!(field = %update.field(), "draft field updated");
        self.draft.apply(update);
    }

    /// Parses shell text for `field` and applies it. Enumerated fields reject
    /// unknown values; free-text fields accept anything.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<(), CoreError> {
        let update = match field {
            DraftField::Title => DraftUpdate::Title(value.to_string()),
            DraftField::Description => DraftUpdate::Description(value.to_string()),
            DraftField::TargetAmount => DraftUpdate::TargetAmount(value.to_string()),
            DraftField::Duration => DraftUpdate::Duration(value.to_string()),
            DraftField::DurationUnit => DraftUpdate::DurationUnit(value.parse()?),
            DraftField::Category => DraftUpdate::Category(value.parse()?),
            DraftField::Priority => DraftUpdate::Priority(value.parse()?),
        };
        self.update(update);
        Ok(())
    }

    /// Live preview of the suggested monthly installment.
    pub fn preview_installment(&self) -> u64 {
        InstallmentService::monthly_installment(
            &self.draft.target_amount,
            &self.draft.duration,
            self.draft.duration_unit,
        )
    }

    /// Moves from the details step to the summary once every required field is filled.
    pub fn advance(&mut self) -> Result<WizardStep, CoreError> {
        match self.step {
            WizardStep::Details => {
                let missing = self.draft.missing_required();
                if !missing.is_empty() {
                    tracing::debug!(?missing, "wizard advance rejected");
                    return Err(CoreError::MissingFields(missing));
                }
                self.step = WizardStep::Summary;
                tracing::debug!("wizard advanced to summary");
                Ok(self.step)
            }
            WizardStep::Summary => Err(CoreError::InvalidOperation(
                "already on the summary step".into(),
            )),
        }
    }

    pub fn back(&mut self) -> BackOutcome {
        match self.step {
            WizardStep::Summary => {
                self.step = WizardStep::Details;
                BackOutcome::ReturnedToDetails
            }
            WizardStep::Details => {
                tracing::debug!("wizard cancelled");
                BackOutcome::Cancelled
            }
        }
    }

    /// Creates the plan from the summary step and appends it to `sink`.
    /// Required fields are checked again since edits stay open on the summary.
    ///
    /// The wizard is consumed on success; on failure it is handed back
    /// unchanged together with the error so the user can correct the draft.
    pub fn confirm(
        self,
        clock: &dyn Clock,
        sink: &mut dyn PlanSink,
    ) -> Result<SavingsPlan, (Self, CoreError)> {
        if self.step != WizardStep::Summary {
            return Err((
                self,
                CoreError::InvalidOperation("plans can only be created from the summary".into()),
            ));
        }
        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            tracing::debug!(?missing, "wizard confirmation rejected");
            return Err((self, CoreError::MissingFields(missing)));
        }
        match PlanFactory::create(&self.draft, clock) {
            Ok(plan) => {
                sink.append(plan.clone());
                Ok(plan)
            }
            Err(err) => Err((self, err)),
        }
    }
}
