use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Invalid record for {ticker}: {reason}")]
    InvalidRecord { ticker: String, reason: String },
    #[error("No valid records to ingest")]
    NoValidRecords,
}

pub type Result<T> = std::result::Result<T, IngestError>;
