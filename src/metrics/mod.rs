//! Basic metrics instrumentation for tracking dispatch health.
//!
//! Provides counters and duration tracking for email provider calls and
//! dispatch requests.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the mailer and the dispatch handler.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of provider HTTP requests made
    provider_requests_total: Arc<AtomicU64>,

    /// Total number of provider HTTP errors
    provider_errors_total: Arc<AtomicU64>,

    /// Total duration of all provider requests in milliseconds
    provider_duration_total_ms: Arc<AtomicU64>,

    /// Dispatch requests whose emails were all sent
    dispatches_succeeded_total: Arc<AtomicU64>,

    /// Dispatch requests that failed while sending
    dispatches_failed_total: Arc<AtomicU64>,

    /// Dispatch requests rejected before sending (malformed or invalid)
    dispatches_rejected_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            provider_requests_total: Arc::new(AtomicU64::new(0)),
            provider_errors_total: Arc::new(AtomicU64::new(0)),
            provider_duration_total_ms: Arc::new(AtomicU64::new(0)),
            dispatches_succeeded_total: Arc::new(AtomicU64::new(0)),
            dispatches_failed_total: Arc::new(AtomicU64::new(0)),
            dispatches_rejected_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a provider request with duration.
    pub fn record_provider_request(&self, duration: Duration) {
        self.provider_requests_total.fetch_add(1, Ordering::Relaxed);
        self.provider_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a provider error.
    pub fn record_provider_error(&self) {
        self.provider_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dispatch_succeeded(&self) {
        self.dispatches_succeeded_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dispatch_failed(&self) {
        self.dispatches_failed_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dispatch_rejected(&self) {
        self.dispatches_rejected_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Get total provider requests.
    pub fn provider_requests_total(&self) -> u64 {
        self.provider_requests_total.load(Ordering::Relaxed)
    }

    /// Get total provider errors.
    pub fn provider_errors_total(&self) -> u64 {
        self.provider_errors_total.load(Ordering::Relaxed)
    }

    /// Get average provider request duration in milliseconds.
    pub fn provider_duration_avg_ms(&self) -> f64 {
        let total = self.provider_duration_total_ms.load(Ordering::Relaxed);
        let count = self.provider_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn dispatches_succeeded_total(&self) -> u64 {
        self.dispatches_succeeded_total.load(Ordering::Relaxed)
    }

    pub fn dispatches_failed_total(&self) -> u64 {
        self.dispatches_failed_total.load(Ordering::Relaxed)
    }

    pub fn dispatches_rejected_total(&self) -> u64 {
        self.dispatches_rejected_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            provider_requests_total: self.provider_requests_total(),
            provider_errors_total: self.provider_errors_total(),
            provider_duration_avg_ms: self.provider_duration_avg_ms(),
            dispatches_succeeded_total: self.dispatches_succeeded_total(),
            dispatches_failed_total: self.dispatches_failed_total(),
            dispatches_rejected_total: self.dispatches_rejected_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub provider_requests_total: u64,
    pub provider_errors_total: u64,
    pub provider_duration_avg_ms: f64,
    pub dispatches_succeeded_total: u64,
    pub dispatches_failed_total: u64,
    pub dispatches_rejected_total: u64,
}

/// Helper for timing provider requests.
pub struct ProviderTimer {
    start: Instant,
    metrics: Metrics,
}

impl ProviderTimer {
    /// Start timing a provider request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_provider_request(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_provider_request(self.start.elapsed());
        self.metrics.record_provider_error();
    }
}
