use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    /// Consecutive days of positive foreign net flow.
    Accumulation,
    /// Consecutive days of negative foreign net flow.
    Distribution,
}

impl StreakKind {
    pub fn matches(&self, foreign_net: f64) -> bool {
        match self {
            StreakKind::Accumulation => foreign_net > 0.0,
            StreakKind::Distribution => foreign_net < 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StreakKind::Accumulation => "accumulation",
            StreakKind::Distribution => "distribution",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakResult {
    pub kind: StreakKind,
    pub ticker_code: String,
    pub company_name: String,
    pub duration_days: usize,
    pub streak_start_date: NaiveDate,
    pub cumulative_net: f64,
    pub latest_close: f64,
    pub latest_date: NaiveDate,
}
