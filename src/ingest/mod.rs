//! Conversion of raw uploads into validated `DailyRecord`s.

pub mod daily_summary;
pub mod error;

pub use daily_summary::{date_from_filename, parse_csv, parse_csv_file, parse_named_csv, parse_number};
pub use error::IngestError;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DailyRecord;

/// A record as submitted over JSON; `foreign_net` is always recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordInput {
    pub ticker_code: String,
    #[serde(default)]
    pub company_name: String,
    pub trade_date: NaiveDate,
    #[serde(default)]
    pub open: f64,
    #[serde(default)]
    pub high: f64,
    #[serde(default)]
    pub low: f64,
    #[serde(default)]
    pub close: f64,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub foreign_buy: f64,
    #[serde(default)]
    pub foreign_sell: f64,
}

impl RecordInput {
    pub fn into_record(self) -> error::Result<DailyRecord> {
        let record = DailyRecord::new(self.ticker_code.trim(), self.trade_date, self.close)
            .with_company_name(self.company_name)
            .with_prices(self.open, self.high, self.low, self.close)
            .with_volume(self.volume)
            .with_foreign_flow(self.foreign_buy, self.foreign_sell);
        validate_record(record)
    }
}

/// Reject a record whose prices or foreign flows are negative or not finite.
/// Both the JSON and the CSV ingest paths pass through here.
pub fn validate_record(record: DailyRecord) -> error::Result<DailyRecord> {
    let amounts = [
        ("open", record.open),
        ("high", record.high),
        ("low", record.low),
        ("close", record.close),
        ("foreign_buy", record.foreign_buy),
        ("foreign_sell", record.foreign_sell),
    ];
    if let Some((field, _)) = amounts.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
        return Err(IngestError::InvalidRecord {
            ticker: record.ticker_code,
            reason: format!("{} must be a non-negative number", field),
        });
    }
    Ok(record)
}

/// Validate a JSON batch. Inputs with a blank ticker are dropped; any other
/// invalid input rejects the whole batch.
pub fn records_from_inputs(inputs: Vec<RecordInput>) -> error::Result<Vec<DailyRecord>> {
    let records = inputs
        .into_iter()
        .filter(|input| !input.ticker_code.trim().is_empty())
        .map(RecordInput::into_record)
        .collect::<error::Result<Vec<_>>>()?;

    if records.is_empty() {
        return Err(IngestError::NoValidRecords);
    }
    Ok(records)
}
