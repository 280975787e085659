//! Cart endpoints.
//!
//! ```text
//! GET    /api/cart
//! POST   /api/cart        {"productId": 1, "qty": 2}
//! PATCH  /api/cart/{id}   {"qty": 0}
//! DELETE /api/cart/{id}
//! ```
//!
//! Every endpoint answers with the full cart view. Unknown line ids are
//! accepted and leave the cart untouched.

use actix_web::{delete, get, patch, post, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ports::AddToCartRequest;
use crate::domain::{CartItem, CartLineId, CartView, Error, ProductId, Quantity, QuantityUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldErrorCode, field_error, present, required_positive, strict_integer,
};

const INVALID_ADD: &str = "Invalid productId or qty";
const INVALID_QTY: &str = "Invalid qty";

/// Cart line as exposed over HTTP.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    /// Cart line identifier used by the PATCH and DELETE endpoints.
    #[schema(example = 1)]
    pub cart_id: i32,
    /// Referenced product.
    #[schema(example = 3)]
    pub product_id: i32,
    /// Units on the line.
    #[schema(example = 2)]
    pub qty: u32,
    /// Product name.
    #[schema(example = "Vibe Mug")]
    pub name: String,
    /// Product unit price.
    #[schema(value_type = f64, example = 14.5)]
    pub price: Decimal,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            cart_id: item.line_id().get(),
            product_id: item.product_id().get(),
            qty: item.quantity().get(),
            name: item.name().to_owned(),
            price: item.price(),
        }
    }
}

/// Cart view with its rounded total.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    /// Lines in the order they were first added.
    pub items: Vec<CartItemResponse>,
    /// Sum of `price × qty`, rounded to cents.
    #[schema(value_type = f64, example = 29.0)]
    pub total: Decimal,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        Self {
            items: view.items().iter().map(CartItemResponse::from).collect(),
            total: view.total(),
        }
    }
}

/// Body of `POST /api/cart`.
///
/// Fields are kept loosely typed so missing and mistyped values produce the
/// same field-level error.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartBody {
    /// Positive product identifier.
    #[serde(default)]
    #[schema(value_type = i64, example = 1)]
    pub product_id: Option<Value>,
    /// Positive number of units to add.
    #[serde(default)]
    #[schema(value_type = i64, example = 1)]
    pub qty: Option<Value>,
}

/// Body of `PATCH /api/cart/{id}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateQuantityBody {
    /// New quantity; `0` removes the line.
    #[serde(default)]
    #[schema(value_type = i64, example = 4)]
    pub qty: Option<Value>,
}

fn parse_add_request(body: &AddToCartBody) -> Result<AddToCartRequest, Error> {
    let product_id = required_positive(
        INVALID_ADD,
        "productId",
        body.product_id.as_ref(),
        ProductId::new,
    )?;
    let quantity = required_positive(INVALID_ADD, "qty", body.qty.as_ref(), Quantity::new)?;
    Ok(AddToCartRequest {
        product_id,
        quantity,
    })
}

fn parse_quantity_update(raw: Option<&Value>) -> Result<QuantityUpdate, Error> {
    let Some(value) = present(raw) else {
        return Err(field_error(
            INVALID_QTY,
            "qty",
            FieldErrorCode::MissingField,
            None,
        ));
    };
    let Some(number) = strict_integer(Some(value)) else {
        return Err(field_error(
            INVALID_QTY,
            "qty",
            FieldErrorCode::NotInteger,
            Some(value),
        ));
    };
    if number < 0 {
        return Err(field_error(
            INVALID_QTY,
            "qty",
            FieldErrorCode::Negative,
            Some(value),
        ));
    }
    QuantityUpdate::from_requested(number)
        .map_err(|_| field_error(INVALID_QTY, "qty", FieldErrorCode::OutOfRange, Some(value)))
}

/// Path ids that cannot name a stored line resolve to `None`.
fn line_id(raw: i64) -> Option<CartLineId> {
    CartLineId::new(raw)
        .inspect_err(|err| debug!(%err, "cart line id cannot exist; treating as no-op"))
        .ok()
}

/// Current cart contents.
#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart view", body = CartResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["cart"],
    operation_id = "getCart"
)]
#[get("/cart")]
pub async fn get_cart(state: web::Data<HttpState>) -> ApiResult<web::Json<CartResponse>> {
    let view = state.cart.view_cart().await?;
    Ok(web::Json(CartResponse::from(view)))
}

/// Add units of a product, merging with an existing line.
#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartBody,
    responses(
        (status = 200, description = "Updated cart view", body = CartResponse),
        (status = 400, description = "Invalid productId or qty, or unknown product", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["cart"],
    operation_id = "addToCart"
)]
#[post("/cart")]
pub async fn add_to_cart(
    state: web::Data<HttpState>,
    payload: web::Json<AddToCartBody>,
) -> ApiResult<web::Json<CartResponse>> {
    let request = parse_add_request(&payload)?;
    let view = state.cart_commands.add_item(request).await?;
    Ok(web::Json(CartResponse::from(view)))
}

/// Set a line's quantity; `0` removes the line.
#[utoipa::path(
    patch,
    path = "/api/cart/{id}",
    params(("id" = i64, Path, description = "Cart line identifier")),
    request_body = UpdateQuantityBody,
    responses(
        (status = 200, description = "Updated cart view", body = CartResponse),
        (status = 400, description = "Invalid qty or cart id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["cart"],
    operation_id = "updateCartLine"
)]
#[patch("/cart/{id}")]
pub async fn update_cart_line(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateQuantityBody>,
) -> ApiResult<web::Json<CartResponse>> {
    let update = parse_quantity_update(payload.qty.as_ref())?;
    let view = match line_id(path.into_inner()) {
        Some(id) => state.cart_commands.update_quantity(id, update).await?,
        None => state.cart.view_cart().await?,
    };
    Ok(web::Json(CartResponse::from(view)))
}

/// Remove a line.
#[utoipa::path(
    delete,
    path = "/api/cart/{id}",
    params(("id" = i64, Path, description = "Cart line identifier")),
    responses(
        (status = 200, description = "Updated cart view", body = CartResponse),
        (status = 400, description = "Invalid cart id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["cart"],
    operation_id = "removeCartLine"
)]
#[delete("/cart/{id}")]
pub async fn remove_cart_line(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<CartResponse>> {
    let view = match line_id(path.into_inner()) {
        Some(id) => state.cart_commands.remove_line(id).await?,
        None => state.cart.view_cart().await?,
    };
    Ok(web::Json(CartResponse::from(view)))
}

#[cfg(test)]
#[path = "cart_tests.rs"]
mod tests;
