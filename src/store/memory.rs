use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::DailyRecord;
use crate::store::{RecordStore, StoreError};

type Key = (Reverse<NaiveDate>, String);

/// In-process store. Iteration order of the map is the `recent` order.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    rows: BTreeMap<Key, DailyRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn upsert(&mut self, records: Vec<DailyRecord>) -> Result<usize, StoreError> {
        let count = records.len();
        for record in records {
            let key = (Reverse(record.trade_date), record.ticker_code.clone());
            self.rows.insert(key, record);
        }
        Ok(count)
    }

    fn recent(&self, limit: usize) -> Result<Vec<DailyRecord>, StoreError> {
        Ok(self.rows.values().take(limit).cloned().collect())
    }

    fn on_date(&self, date: NaiveDate, limit: usize) -> Result<Vec<DailyRecord>, StoreError> {
        Ok(self
            .rows
            .range((Reverse(date), String::new())..)
            .take_while(|((d, _), _)| d.0 == date)
            .map(|(_, record)| record.clone())
            .take(limit)
            .collect())
    }

    fn dates(&self) -> Result<Vec<NaiveDate>, StoreError> {
        let mut dates: Vec<NaiveDate> = self.rows.keys().map(|(d, _)| d.0).collect();
        dates.dedup();
        Ok(dates)
    }

    fn delete_date(&mut self, date: NaiveDate) -> Result<usize, StoreError> {
        let before = self.rows.len();
        self.rows.retain(|(d, _), _| d.0 != date);
        Ok(before - self.rows.len())
    }
}
