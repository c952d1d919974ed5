//! BUY / SELL / WATCH classification from technical indicators.

pub mod engine;
pub mod signal_generator;

pub use engine::*;
pub use signal_generator::*;
