//! Observability side-channel for the query path.
//!
//! The service reports timings and storage failures through
//! [`QueryReporter`] instead of logging directly, so tests can assert on
//! what was reported and deployments can swap the sink.

use todo_read_core::QueryFilters;
use todo_read_storage::StorageError;

/// Timing of one successful repository call.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPerformance {
    pub query_name: &'static str,
    pub duration_ms: f64,
    pub record_count: usize,
    pub filters: QueryFilters,
}

/// A failed repository call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseErrorReport {
    pub error_type: &'static str,
    pub error_message: String,
}

impl DatabaseErrorReport {
    #[must_use]
    pub fn from_error(err: &StorageError) -> Self {
        Self { error_type: err.kind(), error_message: err.to_string() }
    }
}

/// Fire-and-forget sink for query telemetry.
pub trait QueryReporter: Send + Sync {
    fn query_performance(&self, report: &QueryPerformance);

    fn database_error(&self, report: &DatabaseErrorReport);
}

/// Emits reports as structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl QueryReporter for TracingReporter {
    fn query_performance(&self, report: &QueryPerformance) {
        let filters = &report.filters;
        tracing::info!(
            query_name = report.query_name,
            duration_ms = report.duration_ms,
            record_count = report.record_count,
            status = filters.status.map(|s| s.as_str()),
            sort = %filters.sort_field,
            order = %filters.sort_order,
            page = filters.page,
            limit = filters.limit,
            "Query performance: {}",
            report.query_name
        );
    }

    fn database_error(&self, report: &DatabaseErrorReport) {
        tracing::error!(
            error_type = report.error_type,
            error_message = %report.error_message,
            "Database error occurred"
        );
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl QueryReporter for NoopReporter {
    fn query_performance(&self, _report: &QueryPerformance) {}

    fn database_error(&self, _report: &DatabaseErrorReport) {}
}
