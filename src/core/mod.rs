//! HTTP surface over the record store and analysis pipelines

pub mod http;

pub use http::*;
