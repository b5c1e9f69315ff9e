//! Prometheus metrics collection and exposition endpoint.

use std::{sync::OnceLock, time::Duration};

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
    core::Collector,
};
use salvo::{
    Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

use super::settings;

const LATENCY_BUCKETS: [f64; 13] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

#[derive(Debug)]
struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    request_phase_seconds: HistogramVec,
}

impl HttpMetrics {
    fn build() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = register(
            &registry,
            IntCounterVec::new(
                Opts::new(
                    "barista_json_http_requests_total",
                    "Total HTTP requests partitioned by method, route, status class, and status code.",
                ),
                &["method", "route", "status_class", "status_code"],
            )?,
        )?;

        let request_duration_seconds = register(
            &registry,
            HistogramVec::new(
                HistogramOpts::new(
                    "barista_json_http_request_duration_seconds",
                    "HTTP request duration in seconds partitioned by method and route.",
                )
                .buckets(LATENCY_BUCKETS.to_vec()),
                &["method", "route"],
            )?,
        )?;

        let requests_in_flight = register(
            &registry,
            IntGauge::with_opts(Opts::new(
                "barista_json_http_requests_in_flight",
                "Current number of in-flight HTTP requests.",
            ))?,
        )?;

        let request_phase_seconds = register(
            &registry,
            HistogramVec::new(
                HistogramOpts::new(
                    "barista_json_http_request_phase_seconds",
                    "Time spent before and after the handler returned, in seconds.",
                )
                .buckets(LATENCY_BUCKETS.to_vec()),
                &["phase"],
            )?,
        )?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
            request_phase_seconds,
        })
    }
}

fn register<M>(registry: &Registry, metric: M) -> Result<M, prometheus::Error>
where
    M: Collector + Clone + 'static,
{
    registry.register(Box::new(metric.clone()))?;

    Ok(metric)
}

static HTTP_METRICS: OnceLock<Option<HttpMetrics>> = OnceLock::new();

/// Counts a request as in flight until dropped.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    tracked: bool,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let Some(metrics) = metrics() else {
            return Self { tracked: false };
        };

        metrics.requests_in_flight.inc();

        Self { tracked: true }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if self.tracked
            && let Some(metrics) = metrics()
        {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status_code_label = status_code.to_string();

    metrics
        .requests_total
        .with_label_values(&[method, route, status_class(status_code), &status_code_label])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Record the processing and finalization phases of a timed request.
pub(super) fn observe_phases(processing_ms: u64, finalization_ms: u64) {
    let Some(metrics) = metrics() else {
        return;
    };

    for (phase, millis) in [("processing", processing_ms), ("finalization", finalization_ms)] {
        metrics
            .request_phase_seconds
            .with_label_values(&[phase])
            .observe(Duration::from_millis(millis).as_secs_f64());
    }
}

#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::NOT_FOUND);
        return;
    };

    let encoder = TextEncoder::new();
    let mut encoded = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut encoded) {
        error!("failed to encode metrics response: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    match HeaderValue::from_str(encoder.format_type()) {
        Ok(content_type) => {
            res.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        Err(source) => {
            error!("failed to encode metrics content type header: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
    }

    res.render(String::from_utf8_lossy(&encoded).into_owned());
}

fn metrics() -> Option<&'static HttpMetrics> {
    if !settings::metrics_enabled() {
        return None;
    }

    HTTP_METRICS
        .get_or_init(|| {
            HttpMetrics::build()
                .inspect_err(|source| error!("failed to build http metrics: {source}"))
                .ok()
        })
        .as_ref()
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}
