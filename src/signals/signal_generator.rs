use crate::config::ScreenerConfig;
use crate::models::indicators::{IndicatorSet, MacdIndicator};
use crate::models::signal::SignalDirection;

/// Latest-day inputs the rules look at besides the indicators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatestBar {
    pub close: f64,
    pub volume: u64,
}

/// Outcome of the rule set for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub direction: SignalDirection,
    pub score: i32,
    pub reasons: Vec<String>,
}

/// Fixed scoring rules: each of RSI oversold, MACD bullish and an EMA breakout
/// on volume adds one point; enough points is a BUY, otherwise overbought RSI or
/// a negative histogram is a SELL.
pub struct SignalGenerator {
    config: ScreenerConfig,
}

impl SignalGenerator {
    pub fn new(config: ScreenerConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, indicators: &IndicatorSet, latest: LatestBar) -> Classification {
        let rsi = indicators.rsi.value;
        let mut score = 0;
        let mut reasons = Vec::new();

        if let RsiAnalysis::Oversold = self.analyze_rsi(rsi) {
            reasons.push(format!("RSI {:.0} oversold", rsi));
            score += 1;
        }

        if let MacdAnalysis::Bullish = self.analyze_macd(&indicators.macd) {
            reasons.push("MACD bullish".to_string());
            score += 1;
        }

        if latest.close > indicators.ema.value && latest.volume > self.config.volume_breakout {
            reasons.push(format!("Break EMA{}", indicators.ema.period));
            score += 1;
        }

        if score >= self.config.buy_min_score {
            return Classification {
                direction: SignalDirection::Buy,
                score,
                reasons,
            };
        }

        let sell_reason = match (self.analyze_rsi(rsi), self.analyze_macd(&indicators.macd)) {
            (RsiAnalysis::Overbought, _) => Some(format!("RSI {:.0} overbought", rsi)),
            (_, MacdAnalysis::Bearish) => Some("MACD bearish".to_string()),
            _ => None,
        };

        match sell_reason {
            Some(reason) => Classification {
                direction: SignalDirection::Sell,
                score,
                reasons: vec![reason],
            },
            None => Classification {
                direction: SignalDirection::Watch,
                score,
                reasons,
            },
        }
    }

    fn analyze_rsi(&self, rsi: f64) -> RsiAnalysis {
        if rsi > self.config.rsi_oversold_low && rsi < self.config.rsi_oversold_high {
            RsiAnalysis::Oversold
        } else if rsi > self.config.rsi_overbought {
            RsiAnalysis::Overbought
        } else {
            RsiAnalysis::Neutral
        }
    }

    fn analyze_macd(&self, macd: &MacdIndicator) -> MacdAnalysis {
        if macd.histogram > 0.0 && macd.macd > macd.signal {
            MacdAnalysis::Bullish
        } else if macd.histogram < 0.0 {
            MacdAnalysis::Bearish
        } else {
            MacdAnalysis::Neutral
        }
    }
}

enum RsiAnalysis {
    Oversold,
    Overbought,
    Neutral,
}

enum MacdAnalysis {
    Bullish,
    Bearish,
    Neutral,
}
