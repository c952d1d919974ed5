//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::math;
use crate::indicators::trend::calculate_ema;
use crate::models::indicators::MacdIndicator;

/// Ratio of the signal line to MACD when no signal EMA is computed.
pub const DEFAULT_SIGNAL_DAMPING: f64 = 0.8;

/// Calculate MACD over `closes` (oldest first).
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = MACD * `signal_damping` (stands in for the 9-period EMA of MACD)
/// Histogram = MACD - Signal
///
/// Fewer than `slow_period` closes yields all zeros.
pub fn calculate_macd(
    closes: &[f64],
    fast_period: u32,
    slow_period: u32,
    signal_damping: f64,
) -> MacdIndicator {
    if closes.len() < slow_period as usize {
        return MacdIndicator::zero();
    }

    let fast_ema = calculate_ema(closes, fast_period).value;
    let slow_ema = calculate_ema(closes, slow_period).value;

    let macd = math::round2(fast_ema - slow_ema);
    let signal = math::round2(macd * signal_damping);
    let histogram = math::round2(macd - signal);

    MacdIndicator {
        macd,
        signal,
        histogram,
    }
}
