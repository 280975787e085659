//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every catalogue, cart, checkout, and health
//! endpoint plus the error schemas. The document backs Swagger UI in debug
//! builds and is exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        description = "Catalogue listing, a shared shopping cart, and mock checkout.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::list_products,
        crate::inbound::http::cart::get_cart,
        crate::inbound::http::cart::add_to_cart,
        crate::inbound::http::cart::update_cart_line,
        crate::inbound::http::cart::remove_cart_line,
        crate::inbound::http::checkout::checkout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "catalogue", description = "Product listing"),
        (name = "cart", description = "Shared shopping cart"),
        (name = "checkout", description = "Mock checkout producing a receipt"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
