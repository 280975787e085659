//! `/api` scope wiring.
//!
//! Extractor failures are answered with the same JSON error body as handler
//! failures: a malformed body or a non-integer path id is an
//! `invalid_request`.

use actix_web::{Scope, web};
use serde_json::json;

use crate::domain::Error;
use crate::inbound::http::{cart, checkout, products};

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request("Malformed JSON body")
            .with_details(json!({ "code": "malformed_json", "reason": err.to_string() }))
            .into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        Error::invalid_request("Invalid cart id")
            .with_details(json!({
                "field": "id",
                "code": "not_integer",
                "reason": err.to_string(),
            }))
            .into()
    })
}

/// Build the `/api` scope with every catalogue, cart, and checkout route.
///
/// Handlers expect [`crate::inbound::http::state::HttpState`] in app data.
#[must_use]
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(json_config())
        .app_data(path_config())
        .service(products::list_products)
        .service(cart::get_cart)
        .service(cart::add_to_cart)
        .service(cart::update_cart_line)
        .service(cart::remove_cart_line)
        .service(checkout::checkout)
}
