//! Selector metrics
//!
//! Recorded through the `metrics` facade. Without an installed recorder the
//! calls are no-ops.

use std::time::Duration;

/// Counter metric types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMetric {
    /// Selector rebuilt its output
    SelectorRecompute,
    /// Selector served its cached output
    SelectorHit,
    /// Selector computation failed
    SelectorError,
}

impl CounterMetric {
    fn name(&self) -> &'static str {
        match self {
            CounterMetric::SelectorRecompute => "dexview_selector_recompute_total",
            CounterMetric::SelectorHit => "dexview_selector_hit_total",
            CounterMetric::SelectorError => "dexview_selector_error_total",
        }
    }
}

/// Bump a per-selector counter
pub fn increment(metric: CounterMetric, selector: &'static str) {
    metrics::counter!(metric.name(), "selector" => selector).increment(1);
}

/// Record how long a selector took to rebuild
pub fn record_compute_time(selector: &'static str, duration: Duration) {
    metrics::histogram!("dexview_selector_compute_seconds", "selector" => selector)
        .record(duration.as_secs_f64());

    tracing::debug!(
        selector,
        elapsed_us = duration.as_micros() as u64,
        "Selector recomputed"
    );
}
