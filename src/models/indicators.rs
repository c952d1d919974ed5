use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub period: u32,
}

/// MACD line, its (approximated) signal line and the histogram between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdIndicator {
    pub fn zero() -> Self {
        Self {
            macd: 0.0,
            signal: 0.0,
            histogram: 0.0,
        }
    }
}

/// Everything the classifier needs for one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: RsiIndicator,
    pub ema: EmaIndicator,
    pub macd: MacdIndicator,
}
