//! Shared traits and enums used across wallet entities.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Currency unit appended to every displayed amount.
pub const CURRENCY_CODE: &str = "MRU";

/// Display languages supported by the fixed locale tables.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    /// Returns the other language; the header switch flips between the two.
    pub fn toggled(self) -> Self {
        match self {
            Language::Fr => Language::Ar,
            Language::Ar => Language::Fr,
        }
    }

    pub fn is_right_to_left(self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fr" | "french" | "francais" | "français" => Ok(Language::Fr),
            "ar" | "arabic" | "العربية" => Ok(Language::Ar),
            _ => Err(ParseValueError::new("language", value)),
        }
    }
}

/// Unit used to express a plan duration.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Months,
    Years,
}

impl DurationUnit {
    /// Number of calendar months represented by one unit.
    pub fn months_multiplier(self) -> u32 {
        match self {
            DurationUnit::Months => 1,
            DurationUnit::Years => 12,
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DurationUnit::Months => "months",
            DurationUnit::Years => "years",
        };
        f.write_str(label)
    }
}

impl FromStr for DurationUnit {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "months" | "month" | "mois" | "m" => Ok(DurationUnit::Months),
            "years" | "year" | "années" | "annees" | "y" => Ok(DurationUnit::Years),
            _ => Err(ParseValueError::new("duration unit", value)),
        }
    }
}

/// Priority collected by the creation wizard.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(label)
    }
}

impl FromStr for Priority {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ParseValueError::new("priority", value)),
        }
    }
}

/// Returned when an enumerated selector receives an unknown value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseValueError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.trim().to_string(),
        }
    }
}

impl fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl std::error::Error for ParseValueError {}
