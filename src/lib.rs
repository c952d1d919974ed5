//! Foreign-flow streak detection and technical screening over daily ticker records.

pub mod config;
pub mod core;
pub mod history;
pub mod indicators;
pub mod ingest;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod signals;
pub mod store;
pub mod streaks;

pub use models::{DailyRecord, SignalDirection, SignalResult, StreakKind, StreakResult};
pub use signals::engine::{run_screener, run_screener_with_config};
pub use streaks::detector::{detect_streaks, detect_streaks_with_config, StreakReport};
