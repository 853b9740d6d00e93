//! Savings plan records shown by the Idikhar savings list.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// A savings goal with its accumulated amount and planned completion date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsPlan {
    pub id: u64,
    pub title: String,
    pub target: f64,
    pub saved: f64,
    pub status: PlanStatus,
    pub end_date: NaiveDate,
    pub monthly_amount: u64,
    pub category: PlanCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SavingsPlan {
    /// Amount still missing to reach the target. Negative once `saved` overshoots.
    pub fn remaining_amount(&self) -> f64 {
        self.target - self.saved
    }

    pub fn is_active(&self) -> bool {
        self.status == PlanStatus::Active
    }
}

/// Lifecycle state of a plan. Only example data uses anything but `Active`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    #[default]
    Active,
    Completed,
    Paused,
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlanStatus::Active => "active",
            PlanStatus::Completed => "completed",
            PlanStatus::Paused => "paused",
        };
        f.write_str(label)
    }
}

/// Goal categories offered by the creation wizard.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanCategory {
    Vacation,
    Emergency,
    House,
    Car,
    Education,
    Other,
}

impl PlanCategory {
    pub const ALL: [PlanCategory; 6] = [
        PlanCategory::Vacation,
        PlanCategory::Emergency,
        PlanCategory::House,
        PlanCategory::Car,
        PlanCategory::Education,
        PlanCategory::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PlanCategory::Vacation => "vacation",
            PlanCategory::Emergency => "emergency",
            PlanCategory::House => "house",
            PlanCategory::Car => "car",
            PlanCategory::Education => "education",
            PlanCategory::Other => "other",
        }
    }
}

impl fmt::Display for PlanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PlanCategory {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        PlanCategory::ALL
            .into_iter()
            .find(|category| category.key() == normalized)
            .ok_or_else(|| ParseValueError::new("category", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SavingsPlan {
        SavingsPlan {
            id: 7,
            title: "Fonds d'urgence".into(),
            target: 25_000.0,
            saved: 18_750.0,
            status: PlanStatus::Active,
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            monthly_amount: 2_000,
            category: PlanCategory::Emergency,
            description: None,
        }
    }

    #[test]
    fn remaining_amount_can_go_negative() {
        let mut plan = sample();
        assert_eq!(plan.remaining_amount(), 6_250.0);
        plan.saved = 30_000.0;
        assert_eq!(plan.remaining_amount(), -5_000.0);
    }

    #[test]
    fn category_round_trips_through_key() {
        for category in PlanCategory::ALL {
            assert_eq!(category.key().parse::<PlanCategory>().unwrap(), category);
        }
        assert!("boat".parse::<PlanCategory>().is_err());
    }

    #[test]
    fn plan_serializes_lowercase_enums() {
        let json = serde_json::to_string(&sample()).expect("serialize plan");
        assert!(json.contains("\"status\":\"active\""));
        assert!(json.contains("\"category\":\"emergency\""));
        assert!(!json.contains("description"));
    }
}
