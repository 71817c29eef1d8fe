//! Common types used across the platform

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Mekong Delta growing season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// December to April
    #[serde(alias = "DRY")]
    Dry,
    /// May to November
    #[serde(alias = "RAINY")]
    Rainy,
}

impl Season {
    pub fn label(&self) -> &'static str {
        match self {
            Season::Dry => "Dry Season (Dec-Apr)",
            Season::Rainy => "Rainy Season (May-Nov)",
        }
    }

    /// Season for a calendar month (1 = January).
    ///
    /// Months outside 1..=12 are treated as rainy season.
    pub fn for_month(month: u32) -> Self {
        match month {
            12 | 1..=4 => Season::Dry,
            _ => Season::Rainy,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_month(date.month())
    }

    pub fn is_dry(&self) -> bool {
        matches!(self, Season::Dry)
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Dry => write!(f, "Dry Season"),
            Season::Rainy => write!(f, "Rainy Season"),
        }
    }
}

/// Agricultural region an assessment is reported for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub country: String,
}

impl Region {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new("Mekong Delta", "Vietnam")
    }
}
