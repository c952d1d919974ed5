//! RSI (Relative Strength Index) indicator

use crate::models::indicators::RsiIndicator;

/// Value reported when there are not enough closes to measure momentum.
pub const NEUTRAL_RSI: f64 = 50.0;

/// Calculate RSI over `closes` (oldest first).
///
/// RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss over the last
/// `period` transitions. Fewer than `period + 1` closes yields the neutral 50,
/// a window with no losses yields 100. The value is rounded to an integer.
pub fn calculate_rsi(closes: &[f64], period: u32) -> RsiIndicator {
    let period_len = period as usize;
    if period_len == 0 || closes.len() < period_len + 1 {
        return RsiIndicator {
            value: NEUTRAL_RSI,
            period,
        };
    }

    let window = &closes[closes.len() - period_len - 1..];
    let (gains, losses) = window
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .fold((0.0, 0.0), |(gains, losses), change| {
            if change > 0.0 {
                (gains + change, losses)
            } else {
                (gains, losses + change.abs())
            }
        });

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return RsiIndicator {
            value: 100.0,
            period,
        };
    }

    let rs = avg_gain / avg_loss;
    let rsi = 100.0 - (100.0 / (1.0 + rs));

    RsiIndicator {
        value: rsi.round(),
        period,
    }
}
