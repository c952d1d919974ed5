//! Prometheus metrics for the HTTP surface and the analysis pipelines.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub analysis_runs_total: IntCounterVec,
    pub records_upserted_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let analysis_runs_total = IntCounterVec::new(
            Opts::new("analysis_runs_total", "Analysis pipeline invocations"),
            &["pipeline"],
        )?;
        let records_upserted_total =
            IntCounter::new("records_upserted_total", "Daily records written to the store")?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(analysis_runs_total.clone()))?;
        registry.register(Box::new(records_upserted_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            analysis_runs_total,
            records_upserted_total,
        })
    }

    pub fn record_analysis(&self, pipeline: &str) {
        self.analysis_runs_total.with_label_values(&[pipeline]).inc();
    }

    /// Render every registered metric in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
