//! Metrics for generation service calls.
//!
//! Provides OpenTelemetry-based metrics for tracking request volume, latency
//! and failures across text, image, and video operations.

use easel_error::FailureKind;
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<StudioMetrics> = OnceLock::new();

/// Metrics for generation service interactions.
///
/// Labeled with the operation (`generate_content`, `generate_images`,
/// `start_video`, ...) and the model name.
#[derive(Clone)]
pub struct StudioMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total service requests
    pub requests: Counter<u64>,
    /// Failed service requests
    pub errors: Counter<u64>,
    /// Service call duration in seconds
    pub duration: Histogram<f64>,
}

impl StudioMetrics {
    fn init() -> Self {
        let meter = global::meter("easel");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("easel.requests")
                .with_description("Total generation service requests")
                .build(),
            errors: meter
                .u64_counter("easel.errors")
                .with_description("Failed generation service requests")
                .build(),
            duration: meter
                .f64_histogram("easel.duration")
                .with_unit("seconds")
                .with_description("Generation service call duration")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful request.
    pub fn record_request(&self, operation: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("operation", operation.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed request.
    ///
    /// Failures count toward `easel.requests` as well as `easel.errors`.
    pub fn record_error(&self, operation: &str, model: &str, kind: FailureKind) {
        let labels = &[
            KeyValue::new("operation", operation.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.errors.add(
            1,
            &[
                KeyValue::new("operation", operation.to_string()),
                KeyValue::new("model", model.to_string()),
                KeyValue::new("error_type", kind.to_string()),
            ],
        );
    }
}

impl Default for StudioMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}
