use serde::{Deserialize, Serialize};
use std::fmt;

pub const NEUTRAL_REASON: &str = "Netral";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Buy,
    Sell,
    Watch,
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SignalDirection::Buy => "BUY",
            SignalDirection::Sell => "SELL",
            SignalDirection::Watch => "WATCH",
        };
        f.pad(label)
    }
}

/// Screener output for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub ticker_code: String,
    pub company_name: String,
    pub latest_close: f64,
    pub latest_volume: u64,
    pub history_length: usize,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub ema20: f64,
    pub signal: SignalDirection,
    pub score: i32,
    pub reasons: Vec<String>,
}

impl SignalResult {
    /// Reasons joined for display; "Netral" when nothing fired.
    pub fn reason_text(&self) -> String {
        if self.reasons.is_empty() {
            NEUTRAL_REASON.to_string()
        } else {
            self.reasons.join(", ")
        }
    }
}
