//! Foreign-flow streak detection.
//!
//! A streak is the unbroken run of same-signed `foreign_net` days starting at the
//! most recent record. The scan never looks further back than the rule's cap.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{StreakConfig, StreakRule};
use crate::history::group_by_ticker;
use crate::models::{DailyRecord, StreakKind, StreakResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakReport {
    pub accumulation: Vec<StreakResult>,
    pub distribution: Vec<StreakResult>,
}

/// Scan `records` (most recent first) for a qualifying streak of `kind`.
pub fn scan_streak(records: &[DailyRecord], kind: StreakKind, rule: StreakRule) -> Option<StreakResult> {
    let latest = records.first()?;

    let run: Vec<&DailyRecord> = records
        .iter()
        .take(rule.lookback)
        .take_while(|r| kind.matches(r.foreign_net))
        .collect();

    if run.is_empty() || run.len() < rule.min_days {
        return None;
    }

    let start = run.last()?;
    let cumulative_net = run.iter().map(|r| r.foreign_net).sum();

    Some(StreakResult {
        kind,
        ticker_code: latest.ticker_code.clone(),
        company_name: latest.company_name.clone(),
        duration_days: run.len(),
        streak_start_date: start.trade_date,
        cumulative_net,
        latest_close: latest.close,
        latest_date: latest.trade_date,
    })
}

/// Detect accumulation and distribution streaks with the default thresholds.
pub fn detect_streaks(records: &[DailyRecord]) -> StreakReport {
    detect_streaks_with_config(records, &StreakConfig::default())
}

pub fn detect_streaks_with_config(records: &[DailyRecord], config: &StreakConfig) -> StreakReport {
    let mut report = StreakReport::default();

    for history in group_by_ticker(records) {
        let descending = history.sorted_descending();

        if let Some(streak) = scan_streak(&descending, StreakKind::Accumulation, config.accumulation) {
            debug!(
                ticker = %streak.ticker_code,
                days = streak.duration_days,
                net = streak.cumulative_net,
                "accumulation streak"
            );
            report.accumulation.push(streak);
        }
        if let Some(streak) = scan_streak(&descending, StreakKind::Distribution, config.distribution) {
            debug!(
                ticker = %streak.ticker_code,
                days = streak.duration_days,
                net = streak.cumulative_net,
                "distribution streak"
            );
            report.distribution.push(streak);
        }
    }

    report
        .accumulation
        .sort_by(|a, b| b.cumulative_net.total_cmp(&a.cumulative_net));
    report
        .distribution
        .sort_by(|a, b| a.cumulative_net.total_cmp(&b.cumulative_net));

    info!(
        records = records.len(),
        accumulation = report.accumulation.len(),
        distribution = report.distribution.len(),
        "streak detection complete"
    );

    report
}
