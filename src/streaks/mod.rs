//! Multi-day foreign accumulation / distribution detection.

pub mod detector;

pub use detector::*;
