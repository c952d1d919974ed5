//! Technical screener: indicators per ticker, then classification.

use tracing::{debug, info};

use crate::config::ScreenerConfig;
use crate::history::group_by_ticker;
use crate::indicators::compute_indicator_set;
use crate::models::{closes, DailyRecord, SignalResult, TickerHistory};
use crate::signals::signal_generator::{LatestBar, SignalGenerator};

pub struct SignalEngine {
    config: ScreenerConfig,
    generator: SignalGenerator,
}

impl SignalEngine {
    pub fn new(config: ScreenerConfig) -> Self {
        Self {
            config,
            generator: SignalGenerator::new(config),
        }
    }

    /// Evaluate one ticker. Empty histories produce nothing.
    pub fn evaluate(&self, history: &TickerHistory) -> Option<SignalResult> {
        let ascending = history.sorted_ascending();
        let latest = ascending.last()?;
        let closes = closes(&ascending);

        let indicators = compute_indicator_set(&closes, &self.config);
        let classification = self.generator.classify(
            &indicators,
            LatestBar {
                close: latest.close,
                volume: latest.volume,
            },
        );

        debug!(
            ticker = %latest.ticker_code,
            rsi = indicators.rsi.value,
            macd = indicators.macd.macd,
            histogram = indicators.macd.histogram,
            ema = indicators.ema.value,
            signal = %classification.direction,
            score = classification.score,
            "ticker classified"
        );

        Some(SignalResult {
            ticker_code: latest.ticker_code.clone(),
            company_name: latest.company_name.clone(),
            latest_close: latest.close,
            latest_volume: latest.volume,
            history_length: ascending.len(),
            rsi: indicators.rsi.value,
            macd: indicators.macd.macd,
            macd_signal: indicators.macd.signal,
            macd_histogram: indicators.macd.histogram,
            ema20: indicators.ema.value,
            signal: classification.direction,
            score: classification.score,
            reasons: classification.reasons,
        })
    }

    /// Evaluate every ticker in the snapshot, highest score first.
    pub fn screen(&self, records: &[DailyRecord]) -> Vec<SignalResult> {
        let mut results: Vec<SignalResult> = group_by_ticker(records)
            .iter()
            .filter_map(|history| self.evaluate(history))
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));

        info!(
            records = records.len(),
            tickers = results.len(),
            "screener run complete"
        );

        results
    }
}

/// Classify every ticker with the default screener thresholds.
pub fn run_screener(records: &[DailyRecord]) -> Vec<SignalResult> {
    run_screener_with_config(records, &ScreenerConfig::default())
}

pub fn run_screener_with_config(records: &[DailyRecord], config: &ScreenerConfig) -> Vec<SignalResult> {
    SignalEngine::new(*config).screen(records)
}
