use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Metric names emitted by the contact store
///
/// No recorder is installed here; the calls are no-ops unless the host
/// application installs one.
#[derive(Debug, Clone, Copy)]
pub struct StoreMetrics {
    /// Counter of facade operations, labelled by operation and status
    pub operations_total: &'static str,
    /// Histogram of facade operation durations in seconds
    pub operation_duration: &'static str,
    /// Gauge of the stored collection size
    pub collection_size: &'static str,
}

impl Default for StoreMetrics {
    fn default() -> Self {
        Self {
            operations_total: "contacts_operations_total",
            operation_duration: "contacts_operation_duration_seconds",
            collection_size: "contacts_collection_size",
        }
    }
}

impl StoreMetrics {
    /// Record one completed operation
    pub fn record_operation(&self, operation: &'static str, duration: Duration, success: bool) {
        let status = if success { "success" } else { "error" };
        counter!(self.operations_total, "operation" => operation, "status" => status).increment(1);
        histogram!(self.operation_duration, "operation" => operation).record(duration.as_secs_f64());
    }

    /// Record the current collection size
    pub fn record_collection_size(&self, size: usize) {
        gauge!(self.collection_size).set(gauge_value(size));
    }
}

/// Collection sizes past `u32::MAX` saturate.
fn gauge_value(size: usize) -> f64 {
    f64::from(u32::try_from(size).unwrap_or(u32::MAX))
}
