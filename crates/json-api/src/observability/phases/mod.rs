//! Per-request phase timing.
//!
//! [`RequestPhases`] gives every request its own [`RequestPhaseTimer`], kept
//! in the request's [`Depot`]. Routes wrapped with [`bound`] or [`trace_routes`]
//! record who handled the request and close the handler phase when it
//! returns. On completion the hoop takes the timer back out of the depot,
//! stops it and publishes the report.

mod clock;
mod handler;
mod report;
mod sink;
mod timer;

use std::sync::Arc;

use salvo::{Depot, FlowCtrl, Handler, Request, Response, async_trait, http::StatusCode};
use tracing::error;

use super::metrics;

pub(crate) use handler::{bound, record_failure, trace_routes};
pub(crate) use report::{FailureClass, PhaseReport};
pub(crate) use sink::{ReportSink, TracingReportSink};

use handler::{HandlerIdentity, HandlerProgress};
use timer::RequestPhaseTimer;

/// Hoop that times and reports every request passing through it.
///
/// Must sit outside `CatchPanic` so panicking handlers are still reported.
#[derive(Debug, Clone)]
pub(crate) struct RequestPhases {
    sink: Arc<dyn ReportSink>,
}

impl RequestPhases {
    pub(crate) fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }

    fn complete(&self, req: &Request, depot: &mut Depot, res: &Response) {
        let Ok(mut timer) = depot.scrape::<RequestPhaseTimer>() else {
            error!("phase timer missing from request depot");
            return;
        };

        let handler = depot.scrape::<HandlerIdentity>().unwrap_or_default();
        let progress = depot.scrape::<HandlerProgress>().ok();

        let failure = match (depot.scrape::<FailureClass>(), progress) {
            (Ok(failure), _) => failure,
            (Err(_), Some(HandlerProgress::Entered)) => FailureClass::Panic,
            (Err(_), Some(HandlerProgress::Returned) | None) => FailureClass::None,
        };

        let status = res.status_code.unwrap_or(StatusCode::OK).as_u16();

        let report = timer
            .stop()
            .and_then(|()| timer.report(req.uri().path(), handler, status, failure));

        match report {
            Ok(report) => {
                metrics::observe_phases(report.processing_ms, report.last_phase_ms);
                self.sink.publish(&report);
            }
            Err(source) => error!(%handler, "phase timer misuse: {source}"),
        }
    }
}

#[async_trait]
impl Handler for RequestPhases {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let mut timer = RequestPhaseTimer::new();

        if let Err(source) = timer.start() {
            error!("failed to start phase timer: {source}");
            ctrl.call_next(req, depot, res).await;

            return;
        }

        depot.inject(timer);

        ctrl.call_next(req, depot, res).await;

        self.complete(req, depot, res);
    }
}
