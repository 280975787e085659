//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{
    MockCartCommand, MockCartQuery, MockCatalogueQuery, MockCheckoutCommand,
};
use crate::inbound::http::routes::api_scope;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

/// Mocks backing an [`HttpState`]. Unconfigured mocks fail the test if
/// called.
#[derive(Default)]
pub struct MockPorts {
    pub catalogue: MockCatalogueQuery,
    pub cart: MockCartQuery,
    pub cart_commands: MockCartCommand,
    pub checkout: MockCheckoutCommand,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.catalogue),
            Arc::new(self.cart),
            Arc::new(self.cart_commands),
            Arc::new(self.checkout),
        )
    }
}

pub fn state_with_catalogue(catalogue: MockCatalogueQuery) -> HttpState {
    MockPorts {
        catalogue,
        ..MockPorts::default()
    }
    .into_state()
}

/// App wired like the server's `/api` scope, without CORS or docs.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}
