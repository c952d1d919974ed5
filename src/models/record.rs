use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day for one ticker.
///
/// `foreign_net` is derived from the buy and sell flow when the record is built
/// and is never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub ticker_code: String,
    pub company_name: String,
    pub trade_date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub foreign_buy: f64,
    pub foreign_sell: f64,
    pub foreign_net: f64,
}

impl DailyRecord {
    pub fn new(ticker_code: impl Into<String>, trade_date: NaiveDate, close: f64) -> Self {
        Self {
            ticker_code: ticker_code.into(),
            company_name: String::new(),
            trade_date,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0,
            foreign_buy: 0.0,
            foreign_sell: 0.0,
            foreign_net: 0.0,
        }
    }

    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    pub fn with_prices(mut self, open: f64, high: f64, low: f64, close: f64) -> Self {
        self.open = open;
        self.high = high;
        self.low = low;
        self.close = close;
        self
    }

    pub fn with_volume(mut self, volume: u64) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_foreign_flow(mut self, foreign_buy: f64, foreign_sell: f64) -> Self {
        self.foreign_buy = foreign_buy;
        self.foreign_sell = foreign_sell;
        self.foreign_net = foreign_buy - foreign_sell;
        self
    }
}

/// All records of a single ticker, in whatever order they were handed over.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerHistory {
    pub ticker_code: String,
    pub records: Vec<DailyRecord>,
}

impl TickerHistory {
    pub fn new(ticker_code: impl Into<String>) -> Self {
        Self {
            ticker_code: ticker_code.into(),
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copy of the records, most recent first (streak scanning order).
    pub fn sorted_descending(&self) -> Vec<DailyRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.trade_date.cmp(&a.trade_date));
        records
    }

    /// Copy of the records, oldest first (indicator order).
    pub fn sorted_ascending(&self) -> Vec<DailyRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| a.trade_date.cmp(&b.trade_date));
        records
    }
}

/// Closing prices of `records` in the order given.
pub fn closes(records: &[DailyRecord]) -> Vec<f64> {
    records.iter().map(|r| r.close).collect()
}
