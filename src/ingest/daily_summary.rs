//! Exchange export CSV parsing.
//!
//! The daily summary export carries Indonesian headers and thousands separators
//! in numeric cells. Every row becomes a typed `DailyRecord`; nothing downstream
//! looks at header names.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::ingest::error::{IngestError, Result};
use crate::ingest::validate_record;
use crate::models::DailyRecord;

pub const COL_TICKER: &str = "Kode Saham";
pub const COL_COMPANY: &str = "Nama Perusahaan";
pub const COL_TRADE_DATE: &str = "Tanggal Perdagangan Terakhir";
pub const COL_OPEN: &str = "Open Price";
pub const COL_CLOSE: &str = "Penutupan";
pub const COL_HIGH: &str = "Tertinggi";
pub const COL_LOW: &str = "Terendah";
pub const COL_VOLUME: &str = "Volume";
pub const COL_FOREIGN_BUY: &str = "Foreign Buy";
pub const COL_FOREIGN_SELL: &str = "Foreign Sell";

const DATE_FORMATS: [&str; 3] = ["%d %b %Y", "%d %B %Y", "%Y-%m-%d"];

/// Parse a numeric cell, dropping thousands separators. Blank or garbage is 0.
pub fn parse_number(raw: &str) -> f64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

pub fn parse_trade_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// First `YYYY-MM-DD` embedded in a file name, e.g. `ringkasan-2025-11-28.csv`.
pub fn date_from_filename(name: &str) -> Option<NaiveDate> {
    let bytes = name.as_bytes();
    if bytes.len() < 10 {
        return None;
    }
    (0..=bytes.len() - 10).find_map(|start| {
        let candidate = &bytes[start..start + 10];
        let shaped = candidate.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
        if !shaped {
            return None;
        }
        std::str::from_utf8(candidate)
            .ok()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    })
}

struct Columns {
    index: HashMap<String, usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_string(), i))
            .collect();
        if !index.contains_key(COL_TICKER) {
            return Err(IngestError::MissingColumn(COL_TICKER.to_string()));
        }
        Ok(Self { index })
    }

    fn get<'r>(&self, row: &'r StringRecord, column: &str) -> &'r str {
        self.index
            .get(column)
            .and_then(|&i| row.get(i))
            .map(str::trim)
            .unwrap_or("")
    }

    fn number(&self, row: &StringRecord, column: &str) -> f64 {
        parse_number(self.get(row, column))
    }
}

/// Parse CSV text into records. Rows without a ticker code are skipped; rows
/// without a parsable trade date use `fallback_date`. A row with a negative
/// price or foreign flow fails the whole file with `InvalidRecord`.
pub fn parse_csv<R: Read>(reader: R, fallback_date: NaiveDate) -> Result<Vec<DailyRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(csv_reader.headers()?)?;
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in csv_reader.records() {
        let row = row?;
        let ticker = columns.get(&row, COL_TICKER);
        if ticker.is_empty() {
            skipped += 1;
            continue;
        }

        let trade_date =
            parse_trade_date(columns.get(&row, COL_TRADE_DATE)).unwrap_or(fallback_date);
        let volume = columns.number(&row, COL_VOLUME).max(0.0) as u64;

        let record = DailyRecord::new(ticker, trade_date, columns.number(&row, COL_CLOSE))
            .with_company_name(columns.get(&row, COL_COMPANY))
            .with_prices(
                columns.number(&row, COL_OPEN),
                columns.number(&row, COL_HIGH),
                columns.number(&row, COL_LOW),
                columns.number(&row, COL_CLOSE),
            )
            .with_volume(volume)
            .with_foreign_flow(
                columns.number(&row, COL_FOREIGN_BUY),
                columns.number(&row, COL_FOREIGN_SELL),
            );
        records.push(validate_record(record)?);
    }

    if skipped > 0 {
        debug!(skipped, "skipped rows without a ticker code");
    }
    if records.is_empty() {
        return Err(IngestError::NoValidRecords);
    }

    Ok(records)
}

/// Parse CSV text that arrived under `file_name`; the name's embedded date,
/// if any, takes precedence over `default_date` as the row fallback.
pub fn parse_named_csv<R: Read>(
    reader: R,
    file_name: &str,
    default_date: NaiveDate,
) -> Result<Vec<DailyRecord>> {
    let fallback = date_from_filename(file_name).unwrap_or_else(|| {
        warn!(file = file_name, date = %default_date, "no date in file name, using default");
        default_date
    });
    parse_csv(reader, fallback)
}

pub fn parse_csv_file(path: &Path, default_date: NaiveDate) -> Result<Vec<DailyRecord>> {
    let file = File::open(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_named_csv(file, &name, default_date)
}
