//! Data models for the storage layer

use serde::{Deserialize, Serialize};

/// A season-long award and, once decided, its winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalAward {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub definition: String,
    pub amount: f64,
    #[serde(default)]
    pub winner_owner_id: Option<String>,
    /// Shown instead of the owner's name when set.
    #[serde(default)]
    pub winner_name_override: Option<String>,
}

/// A payout attached to one week of the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBonus {
    pub week: u16,
    pub label: String,
    #[serde(default)]
    pub note: String,
    pub amount: f64,
    #[serde(default)]
    pub winner_owner_id: Option<String>,
    #[serde(default)]
    pub winner_name_override: Option<String>,
}

impl SeasonalAward {
    pub fn new(id: &str, title: &str, definition: &str, amount: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            definition: definition.to_string(),
            amount,
            winner_owner_id: None,
            winner_name_override: None,
        }
    }
}

impl WeeklyBonus {
    pub fn new(week: u16, label: &str, note: &str, amount: f64) -> Self {
        Self {
            week,
            label: label.to_string(),
            note: note.to_string(),
            amount,
            winner_owner_id: None,
            winner_name_override: None,
        }
    }
}
