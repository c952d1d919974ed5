//! Record storage interface the analysis entry points are fed from.

pub mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::DailyRecord;

/// Failures raised by external backends (a database or a remote cache).
/// `MemoryStore` never fails; the HTTP layer maps `Unavailable` to 503 and
/// `Backend` to 500.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend cannot be reached right now.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The backend was reached but rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Daily record storage keyed by (ticker_code, trade_date).
pub trait RecordStore {
    /// Insert or replace records by key. Returns how many were written.
    fn upsert(&mut self, records: Vec<DailyRecord>) -> Result<usize, StoreError>;

    /// Most recent records first (date descending, then ticker ascending).
    fn recent(&self, limit: usize) -> Result<Vec<DailyRecord>, StoreError>;

    /// Records of a single trading day, ticker ascending.
    fn on_date(&self, date: NaiveDate, limit: usize) -> Result<Vec<DailyRecord>, StoreError>;

    /// Distinct trading days, newest first.
    fn dates(&self) -> Result<Vec<NaiveDate>, StoreError>;

    /// Remove every record of `date`. Returns how many were removed.
    fn delete_date(&mut self, date: NaiveDate) -> Result<usize, StoreError>;
}
