//! Numeric helpers shared by the indicators.

/// Simple average of the first `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(values[..period].iter().sum::<f64>() / period as f64)
}

/// Smoothing factor `2 / (period + 1)`.
pub fn smoothing_factor(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let k = smoothing_factor(period);
    value * k + previous * (1.0 - k)
}

/// EMA seeded with the SMA of the first `period` values, then rolled forward
/// over the remainder. Unrounded.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    let seed = sma(values, period)?;
    Some(
        values[period..]
            .iter()
            .fold(seed, |prev, &v| ema_from_previous(v, prev, period)),
    )
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
