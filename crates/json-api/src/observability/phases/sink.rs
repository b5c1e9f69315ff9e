//! Report sinks.

use std::fmt::Debug;

use tracing::info;

use super::report::PhaseReport;

/// Destination for completed phase reports.
pub(crate) trait ReportSink: Debug + Send + Sync {
    fn publish(&self, report: &PhaseReport);
}

/// Logs each report as one `info` event on the `barista_json::performance` target.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TracingReportSink;

impl ReportSink for TracingReportSink {
    fn publish(&self, report: &PhaseReport) {
        info!(
            target: "barista_json::performance",
            path = %report.path,
            handler = %report.handler,
            status = report.status,
            failure = %report.failure,
            total_ms = report.total_ms,
            processing_ms = report.processing_ms,
            last_phase_ms = report.last_phase_ms,
            "{report}"
        );
    }
}
