//! EMA (Exponential Moving Average) indicator

use crate::indicators::math;
use crate::models::indicators::EmaIndicator;

/// Calculate EMA for a specific period over `closes` (oldest first).
///
/// Short series fall back to the latest close (0 for an empty series). The
/// result is rounded to 2 decimals.
pub fn calculate_ema(closes: &[f64], period: u32) -> EmaIndicator {
    let value = match math::ema(closes, period as usize) {
        Some(ema) => math::round2(ema),
        None => closes.last().copied().unwrap_or(0.0),
    };

    EmaIndicator { value, period }
}
