//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod settings;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
pub use metrics::prometheus_metrics;
pub use settings::ServerSettings;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{CartService, CatalogueService, CheckoutService};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::routes::api_scope;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::persistence::{
    DbPool, DieselCartRepository, DieselCheckoutRepository, DieselProductRepository,
};

/// Wire Diesel repositories into domain services behind the driving ports.
#[must_use]
pub fn build_http_state(db_pool: &DbPool) -> HttpState {
    let catalogue = CatalogueService::new(Arc::new(DieselProductRepository::new(db_pool.clone())));
    let cart = Arc::new(CartService::new(Arc::new(DieselCartRepository::new(
        db_pool.clone(),
    ))));
    let checkout = CheckoutService::new(
        Arc::new(DieselCheckoutRepository::new(db_pool.clone())),
        Arc::new(DefaultClock),
    );
    HttpState::new(Arc::new(catalogue), cart.clone(), cart, Arc::new(checkout))
}

/// Build the application: CORS, tracing, `/api`, health probes, and Swagger
/// UI in debug builds.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Cors::permissive())
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// Readiness is marked once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config.db_pool));
    let ServerConfig {
        bind_addr,
        listener,
        db_pool: _,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    });
    let server = match listener {
        Some(listener) => server.listen(listener)?,
        None => server.bind(bind_addr)?,
    };

    let addrs = server.addrs();
    let server = server.run();

    health_state.mark_ready();
    info!(?addrs, "storefront listening");
    Ok(server)
}
