//! Handler identity and the post-handler phase boundary.

use std::{
    any::{TypeId, type_name},
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    sync::Arc,
};

use salvo::{
    Depot, FlowCtrl, Handler, Request, Response, Router, async_trait, http::StatusError,
};
use tracing::error;

use super::{
    report::{FailureClass, NONE_MARKER},
    timer::RequestPhaseTimer,
};

/// Which handler served a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum HandlerIdentity {
    /// No route matched.
    #[default]
    Unmatched,

    /// A handler bound to an owning module, reported as `owner.method`.
    Method {
        owner: &'static str,
        method: &'static str,
    },

    /// Any other handler, reported by its short type name.
    Callable(&'static str),
}

impl Display for HandlerIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Unmatched => f.write_str(NONE_MARKER),
            Self::Method { owner, method } => write!(f, "{owner}.{method}"),
            Self::Callable(name) => f.write_str(name),
        }
    }
}

/// Last path segment of a type name, without generic arguments.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let without_generics = full.split('<').next().unwrap_or(full);

    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// How far a request got through its handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandlerProgress {
    Entered,
    Returned,
}

/// Record the failure class of the current request.
///
/// The first failure recorded wins.
pub(crate) fn record_failure(depot: &mut Depot, failure: FailureClass) {
    if depot.obtain::<FailureClass>().is_err() {
        depot.inject(failure);
    }
}

/// Wraps a route handler so the phase timer knows who served the request and
/// when the handler returned.
///
/// The wrapper reports the inner handler's [`TypeId`], so OpenAPI generation
/// still finds the endpoint behind it.
#[derive(Debug)]
pub(crate) struct Traced<H> {
    identity: HandlerIdentity,
    inner: H,
}

/// Trace a handler as `owner.method`.
pub(crate) fn bound<H: Handler>(owner: &'static str, method: &'static str, inner: H) -> Traced<H> {
    Traced {
        identity: HandlerIdentity::Method { owner, method },
        inner,
    }
}

/// A route goal taken out of a [`Router`] to be traced.
struct Goal(Arc<dyn Handler>);

impl Debug for Goal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Goal").field(&self.0.type_name()).finish()
    }
}

#[async_trait]
impl Handler for Goal {
    fn type_id(&self) -> TypeId {
        Handler::type_id(&*self.0)
    }

    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        self.0.handle(req, depot, res, ctrl).await;
    }
}

fn is_traced(handler: &dyn Handler) -> bool {
    let traced = type_name::<Traced<Goal>>();
    let prefix = traced.split('<').next().unwrap_or(traced);

    handler.type_name().starts_with(prefix)
}

/// Trace every goal in `router` and its children.
///
/// Goals already wrapped with [`bound`] keep their identity. Any other goal
/// is reported under its short type name, so no matched route can report
/// the unmatched marker.
pub(crate) fn trace_routes(mut router: Router) -> Router {
    router.goal = router.goal.map(|goal| {
        if is_traced(&*goal) {
            return goal;
        }

        let identity = HandlerIdentity::Callable(short_type_name(goal.type_name()));

        Arc::new(Traced {
            identity,
            inner: Goal(goal),
        }) as Arc<dyn Handler>
    });

    router.routers = std::mem::take(&mut router.routers)
        .into_iter()
        .map(trace_routes)
        .collect();

    router
}

#[async_trait]
impl<H: Handler> Handler for Traced<H> {
    fn type_id(&self) -> TypeId {
        Handler::type_id(&self.inner)
    }

    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.inject(self.identity);
        depot.inject(HandlerProgress::Entered);

        self.inner.handle(req, depot, res, ctrl).await;

        depot.inject(HandlerProgress::Returned);

        // Errors written without an ApiError (e.g. by salvo itself) still count.
        if depot.obtain::<FailureClass>().is_err()
            && res
                .status_code
                .is_some_and(|status| status.is_client_error() || status.is_server_error())
        {
            record_failure(depot, FailureClass::of::<StatusError>());
        }

        // A failed handler skips the boundary.
        if depot.obtain::<FailureClass>().is_ok() {
            return;
        }

        if let Ok(timer) = depot.obtain_mut::<RequestPhaseTimer>()
            && let Err(source) = timer.mark_phase_boundary()
        {
            error!(
                handler = %self.identity,
                "failed to mark post-handler phase boundary: {source}"
            );
        }
    }
}
