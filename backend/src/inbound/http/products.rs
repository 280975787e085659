//! Catalogue read endpoint.
//!
//! ```text
//! GET /api/products
//! ```

use actix_web::{get, web};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Product;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Catalogue entry as exposed over HTTP.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    /// Product identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    #[schema(example = "Vibe T-shirt")]
    pub name: String,
    /// Unit price.
    #[schema(value_type = f64, example = 24.99)]
    pub price: Decimal,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id().get(),
            name: product.name().to_owned(),
            price: product.price(),
        }
    }
}

/// List every catalogue product in ascending id order.
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Catalogue products", body = [ProductResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ProductResponse>>> {
    let products = state.catalogue.list_products().await?;
    Ok(web::Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}
