//! App Router

use std::sync::Arc;

use salvo::{
    Router, Service,
    affix_state::inject,
    catch_panic::CatchPanic,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    trailing_slash::remove_slash,
};

use crate::{
    coffees, healthcheck,
    observability::{
        self,
        phases::{ReportSink, RequestPhases, bound, trace_routes},
    },
    orders,
    state::State,
};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Coffee and order routes, each traced under `module.action`.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("coffees")
                .get(bound(coffees::HANDLER_OWNER, "list_coffees", coffees::index::handler))
                .post(bound(coffees::HANDLER_OWNER, "create_coffee", coffees::create::handler))
                .push(Router::with_path("{coffee}").get(bound(
                    coffees::HANDLER_OWNER,
                    "get_coffee",
                    coffees::get::handler,
                ))),
        )
        .push(
            Router::with_path("orders")
                .post(bound(orders::HANDLER_OWNER, "create_order", orders::create::handler))
                .push(
                    Router::with_path("{order}")
                        .get(bound(orders::HANDLER_OWNER, "get_order", orders::get::handler))
                        .patch(bound(
                            orders::HANDLER_OWNER,
                            "update_order",
                            orders::update::handler,
                        )),
                ),
        )
}

/// Every route the server answers, with the OpenAPI document generated from
/// the API routes. All goals are traced.
pub(crate) fn root_router(state: Arc<State>, metrics_enabled: bool) -> Router {
    let mut router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(bound(
            healthcheck::HANDLER_OWNER,
            "healthcheck",
            healthcheck::handler,
        )))
        .push(app_router());

    let doc = OpenApi::new("Barista API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router = router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"));

    if metrics_enabled {
        router = router.push(Router::with_path("metrics").get(observability::metrics_handler));
    }

    trace_routes(router)
}

/// Wrap `router` in the service-level hoops, which also run for requests
/// that match no route. Phase timing sits outside `CatchPanic`.
pub(crate) fn service(router: Router, sink: Arc<dyn ReportSink>) -> Service {
    Service::new(router)
        .hoop(observability::request_logging)
        .hoop(RequestPhases::new(sink))
}
