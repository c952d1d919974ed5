//! Partitioning of a flat record snapshot into per-ticker histories.

use std::collections::HashMap;

use crate::models::{DailyRecord, TickerHistory};

/// Group records by `ticker_code`.
///
/// Groups come out in the order each ticker first appears, and records keep
/// their input order inside a group. Input is never reordered or deduplicated.
pub fn group_by_ticker(records: &[DailyRecord]) -> Vec<TickerHistory> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut histories: Vec<TickerHistory> = Vec::new();

    for record in records {
        let slot = *index.entry(record.ticker_code.as_str()).or_insert_with(|| {
            histories.push(TickerHistory::new(record.ticker_code.clone()));
            histories.len() - 1
        });
        histories[slot].records.push(record.clone());
    }

    histories
}
