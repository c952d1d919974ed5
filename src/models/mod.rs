//! Shared data models spanning the analysis layers.

pub mod indicators;
pub mod record;
pub mod signal;
pub mod streak;

pub use indicators::{EmaIndicator, IndicatorSet, MacdIndicator, RsiIndicator};
pub use record::{closes, DailyRecord, TickerHistory};
pub use signal::{SignalDirection, SignalResult, NEUTRAL_REASON};
pub use streak::{StreakKind, StreakResult};
