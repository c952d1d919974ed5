//! Runtime configuration loaded from the environment.
//!
//! Every threshold the analysis pipelines use lives here with the default the
//! screener has always shipped with. Environment variables only override them.

use std::env;
use std::str::FromStr;

use crate::indicators::momentum::DEFAULT_SIGNAL_DAMPING;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FETCH_LIMIT: usize = 1000;

/// Deployment environment name (`APP_ENV`), defaults to "sandbox".
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Look-back cap and qualifying length for one streak scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakRule {
    pub lookback: usize,
    pub min_days: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakConfig {
    pub accumulation: StreakRule,
    pub distribution: StreakRule,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            accumulation: StreakRule {
                lookback: 10,
                min_days: 5,
            },
            distribution: StreakRule {
                lookback: 5,
                min_days: 2,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenerConfig {
    pub rsi_period: u32,
    pub ema_period: u32,
    pub macd_fast: u32,
    pub macd_slow: u32,
    /// Signal line is approximated as `macd * macd_signal_damping`.
    pub macd_signal_damping: f64,
    pub rsi_oversold_low: f64,
    pub rsi_oversold_high: f64,
    pub rsi_overbought: f64,
    pub volume_breakout: u64,
    pub buy_min_score: i32,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            ema_period: 20,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal_damping: DEFAULT_SIGNAL_DAMPING,
            rsi_oversold_low: 25.0,
            rsi_oversold_high: 45.0,
            rsi_overbought: 70.0,
            volume_breakout: 1_000_000,
            buy_min_score: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: String,
    pub port: u16,
    pub fetch_limit: usize,
    pub streaks: StreakConfig,
    pub screener: ScreenerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: DEFAULT_PORT,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            streaks: StreakConfig::default(),
            screener: ScreenerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build from environment variables, keeping defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let streaks = StreakConfig {
            accumulation: StreakRule {
                lookback: env_or("ACCUMULATION_LOOKBACK", defaults.streaks.accumulation.lookback),
                min_days: env_or("ACCUMULATION_MIN_DAYS", defaults.streaks.accumulation.min_days),
            },
            distribution: StreakRule {
                lookback: env_or("DISTRIBUTION_LOOKBACK", defaults.streaks.distribution.lookback),
                min_days: env_or("DISTRIBUTION_MIN_DAYS", defaults.streaks.distribution.min_days),
            },
        };
        let screener = ScreenerConfig {
            volume_breakout: env_or("VOLUME_BREAKOUT", defaults.screener.volume_breakout),
            ..defaults.screener
        };

        Self {
            environment: get_environment(),
            port: env_or("PORT", defaults.port),
            fetch_limit: env_or("FETCH_LIMIT", defaults.fetch_limit),
            streaks,
            screener,
        }
    }
}
