//! Unit tests for the per-ticker indicator bundle

use flowscreen::config::ScreenerConfig;
use flowscreen::indicators::compute_indicator_set;
use flowscreen::indicators::math::round2;
use flowscreen::indicators::momentum::DEFAULT_SIGNAL_DAMPING;
use flowscreen::models::MacdIndicator;

#[test]
fn test_default_config_uses_standard_periods() {
    let config = ScreenerConfig::default();
    assert_eq!(config.rsi_period, 14);
    assert_eq!(config.ema_period, 20);
    assert_eq!((config.macd_fast, config.macd_slow), (12, 26));
    assert_eq!(config.macd_signal_damping, DEFAULT_SIGNAL_DAMPING);
}

#[test]
fn test_indicator_set_follows_config_periods() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();

    let set = compute_indicator_set(&closes, &ScreenerConfig::default());
    assert_eq!(set.rsi.period, 14);
    assert_eq!(set.rsi.value, 100.0);
    assert_eq!(set.ema.period, 20);
    assert!(set.macd.macd > 0.0);
    assert_eq!(set.macd.signal, round2(set.macd.macd * DEFAULT_SIGNAL_DAMPING));

    let config = ScreenerConfig {
        ema_period: 50,
        macd_slow: 40,
        ..ScreenerConfig::default()
    };
    let set = compute_indicator_set(&closes, &config);
    assert_eq!(set.ema.period, 50);
    assert_eq!(set.ema.value, 129.0);
    assert_eq!(set.macd, MacdIndicator::zero());
}
