//! Transient form state collected by the plan creation wizard.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{common::*, plan::PlanCategory};

/// Field values typed so far. Numeric inputs stay as raw text until the
/// calculator or the factory parses them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanDraft {
    pub title: String,
    pub description: String,
    pub target_amount: String,
    pub duration: String,
    pub duration_unit: DurationUnit,
    pub category: Option<PlanCategory>,
    pub priority: Priority,
}

impl PlanDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a single field edit.
    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Title(value) => self.title = value,
            DraftUpdate::Description(value) => self.description = value,
            DraftUpdate::TargetAmount(value) => self.target_amount = value,
            DraftUpdate::Duration(value) => self.duration = value,
            DraftUpdate::DurationUnit(unit) => self.duration_unit = unit,
            DraftUpdate::Category(category) => self.category = Some(category),
            DraftUpdate::Priority(priority) => self.priority = priority,
        }
    }

    /// Required fields that are still blank, in form order.
    pub fn missing_required(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(DraftField::Title);
        }
        if self.target_amount.trim().is_empty() {
            missing.push(DraftField::TargetAmount);
        }
        if self.duration.trim().is_empty() {
            missing.push(DraftField::Duration);
        }
        if self.category.is_none() {
            missing.push(DraftField::Category);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Trimmed description, `None` when left blank.
    pub fn description_text(&self) -> Option<&str> {
        let trimmed = self.description.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// Discriminated setter for [`PlanDraft`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftUpdate {
    Title(String),
    Description(String),
    TargetAmount(String),
    Duration(String),
    DurationUnit(DurationUnit),
    Category(PlanCategory),
    Priority(Priority),
}

impl DraftUpdate {
    pub fn field(&self) -> DraftField {
        match self {
            DraftUpdate::Title(_) => DraftField::Title,
            DraftUpdate::Description(_) => DraftField::Description,
            DraftUpdate::TargetAmount(_) => DraftField::TargetAmount,
            DraftUpdate::Duration(_) => DraftField::Duration,
            DraftUpdate::DurationUnit(_) => DraftField::DurationUnit,
            DraftUpdate::Category(_) => DraftField::Category,
            DraftUpdate::Priority(_) => DraftField::Priority,
        }
    }
}

/// Names of the draft fields, used for validation reports and shell input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Description,
    TargetAmount,
    Duration,
    DurationUnit,
    Category,
    Priority,
}

impl DraftField {
    pub const ALL: [DraftField; 7] = [
        DraftField::Title,
        DraftField::Description,
        DraftField::TargetAmount,
        DraftField::Duration,
        DraftField::DurationUnit,
        DraftField::Category,
        DraftField::Priority,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::TargetAmount => "target",
            DraftField::Duration => "duration",
            DraftField::DurationUnit => "unit",
            DraftField::Category => "category",
            DraftField::Priority => "priority",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            DraftField::Title | DraftField::TargetAmount | DraftField::Duration | DraftField::Category
        )
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "amount" | "target-amount" => return Some(DraftField::TargetAmount),
            "duration-unit" => return Some(DraftField::DurationUnit),
            _ => {}
        }
        DraftField::ALL
            .into_iter()
            .find(|field| field.key() == normalized)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Steps of the two-page creation wizard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Details,
    Summary,
}

impl WizardStep {
    pub const COUNT: u8 = 2;

    /// One-based position shown as "step N of 2".
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Summary => 2,
        }
    }

    /// Fraction of the progress bar filled for this step.
    pub fn progress(self) -> f64 {
        f64::from(self.number()) / f64::from(Self::COUNT)
    }
}
