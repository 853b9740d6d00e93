//! Monthly spend per transaction category, shown on the Idikhar dashboard.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Spending buckets displayed by the automatic categorisation tab.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SpendCategory {
    Food,
    Transport,
    Housing,
    Entertainment,
    Shopping,
    Health,
}

impl fmt::Display for SpendCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpendCategory::Food => "food",
            SpendCategory::Transport => "transport",
            SpendCategory::Housing => "housing",
            SpendCategory::Entertainment => "entertainment",
            SpendCategory::Shopping => "shopping",
            SpendCategory::Health => "health",
        };
        f.write_str(label)
    }
}

/// Amount spent against a category budget for the current month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategorySpend {
    pub category: SpendCategory,
    pub spent: f64,
    pub budget: f64,
}

impl CategorySpend {
    pub const fn new(category: SpendCategory, spent: f64, budget: f64) -> Self {
        Self {
            category,
            spent,
            budget,
        }
    }

    /// Whole percentage of the budget consumed, rounded down.
    pub fn percent_used(&self) -> u32 {
        if self.budget <= 0.0 {
            return 0;
        }
        ((self.spent / self.budget) * 100.0).floor().max(0.0) as u32
    }

    pub fn remaining(&self) -> f64 {
        self.budget - self.spent
    }
}
