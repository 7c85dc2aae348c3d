// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for the order store
// ============================================================================
//
// Tracks:
// - Orders created and fetched
// - Store failures by operation and kind
// - Store operation latency
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub orders_created: IntCounter,
    pub orders_fetched: IntCounter,
    pub store_failures: IntCounterVec,
    pub store_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_created = IntCounter::new("orders_created_total", "Total orders persisted")?;
        registry.register(Box::new(orders_created.clone()))?;

        let orders_fetched = IntCounter::new("orders_fetched_total", "Total orders loaded by id")?;
        registry.register(Box::new(orders_fetched.clone()))?;

        let store_failures = IntCounterVec::new(
            Opts::new("order_store_failures_total", "Order store operations that returned an error"),
            &["operation", "kind"],
        )?;
        registry.register(Box::new(store_failures.clone()))?;

        let store_duration = HistogramVec::new(
            HistogramOpts::new("order_store_duration_seconds", "Order store operation duration")
                .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
            &["operation"],
        )?;
        registry.register(Box::new(store_duration.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            orders_fetched,
            store_failures,
            store_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_created(&self, duration_secs: f64) {
        self.orders_created.inc();
        self.store_duration.with_label_values(&["create_order"]).observe(duration_secs);
    }

    pub fn record_fetched(&self, duration_secs: f64) {
        self.orders_fetched.inc();
        self.store_duration.with_label_values(&["get_order"]).observe(duration_secs);
    }

    pub fn record_failure(&self, operation: &str, kind: &str, duration_secs: f64) {
        self.store_failures.with_label_values(&[operation, kind]).inc();
        self.store_duration.with_label_values(&[operation]).observe(duration_secs);
    }
}
