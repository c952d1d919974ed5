//! Technical indicators computed over an ascending close series.

pub mod math;
pub mod momentum;
pub mod trend;

pub use momentum::*;
pub use trend::*;

use crate::config::ScreenerConfig;
use crate::models::indicators::IndicatorSet;

/// RSI, trend EMA and MACD for one close series, using the screener periods.
pub fn compute_indicator_set(closes: &[f64], config: &ScreenerConfig) -> IndicatorSet {
    IndicatorSet {
        rsi: calculate_rsi(closes, config.rsi_period),
        ema: calculate_ema(closes, config.ema_period),
        macd: calculate_macd(
            closes,
            config.macd_fast,
            config.macd_slow,
            config.macd_signal_damping,
        ),
    }
}
