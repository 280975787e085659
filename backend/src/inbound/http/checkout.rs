//! Mock checkout endpoint.
//!
//! ```text
//! POST /api/checkout  {"cartItems": [{"productId": 1, "qty": 2}], "name": "Ada", "email": "ada@example.com"}
//! ```
//!
//! Pricing uses the submitted lines; the stored cart is cleared wholesale.

use actix_web::{post, web};
use chrono::SecondsFormat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{
    CheckoutLine, CheckoutRequest, Error, ProductId, Quantity, Receipt, ReceiptItem,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldErrorCode, field_error, lenient_positive_integer, present,
};

const CART_EMPTY: &str = "Cart empty";
const INVALID_ITEM: &str = "Invalid productId";
const INVALID_QTY: &str = "Invalid qty";

/// One submitted line. Documentation only; entries are parsed leniently.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItemBody {
    /// Product to purchase; numeric strings are accepted.
    #[schema(example = 1)]
    pub product_id: i64,
    /// Units to purchase; anything but a positive integer counts as 1.
    #[schema(example = 2)]
    pub qty: Option<i64>,
}

/// Body of `POST /api/checkout`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutBody {
    /// Non-empty list of lines to price.
    #[serde(default)]
    #[schema(value_type = Vec<CheckoutItemBody>)]
    pub cart_items: Option<Value>,
    /// Customer name echoed on the receipt.
    #[serde(default)]
    pub name: Option<String>,
    /// Customer email echoed on the receipt.
    #[serde(default)]
    pub email: Option<String>,
}

/// Receipt line.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItemResponse {
    /// Purchased product.
    pub product_id: i32,
    /// Product name at checkout.
    pub name: String,
    /// Unit price at checkout.
    #[schema(value_type = f64)]
    pub price: Decimal,
    /// Units purchased.
    pub qty: u32,
    /// `price × qty`, rounded to cents.
    #[schema(value_type = f64)]
    pub amount: Decimal,
}

impl From<&ReceiptItem> for ReceiptItemResponse {
    fn from(item: &ReceiptItem) -> Self {
        Self {
            product_id: item.product_id.get(),
            name: item.name.clone(),
            price: item.price,
            qty: item.quantity.get(),
            amount: item.amount,
        }
    }
}

/// Receipt for a completed checkout.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReceiptResponse {
    /// Milliseconds since the Unix epoch at issue time.
    #[schema(example = 1_735_787_045_000_i64)]
    pub id: i64,
    /// Customer name, if given.
    pub name: Option<String>,
    /// Customer email, if given.
    pub email: Option<String>,
    /// Purchased lines in submission order.
    pub items: Vec<ReceiptItemResponse>,
    /// Sum of line amounts, rounded to cents.
    #[schema(value_type = f64)]
    pub total: Decimal,
    /// RFC 3339 issue time with millisecond precision.
    #[schema(example = "2025-01-02T03:04:05.000Z")]
    pub timestamp: String,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            id: receipt.id(),
            name: receipt.name().map(str::to_owned),
            email: receipt.email().map(str::to_owned),
            items: receipt.items().iter().map(ReceiptItemResponse::from).collect(),
            total: receipt.total(),
            timestamp: receipt
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Checkout response envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    /// The issued receipt.
    pub receipt: ReceiptResponse,
}

fn parse_line(index: usize, item: &Value) -> Result<CheckoutLine, Error> {
    let field = format!("cartItems[{index}].productId");
    let raw = present(item.get("productId"));
    let Some(number) = lenient_positive_integer(raw) else {
        let code = if raw.is_some() {
            FieldErrorCode::NotPositiveInteger
        } else {
            FieldErrorCode::MissingField
        };
        return Err(field_error(INVALID_ITEM, field, code, raw));
    };
    let product_id = ProductId::new(number)
        .map_err(|_| field_error(INVALID_ITEM, field, FieldErrorCode::OutOfRange, raw))?;
    // Unusable quantities fall back to one; oversized counts are rejected.
    let raw_qty = present(item.get("qty"));
    let quantity = match lenient_positive_integer(raw_qty) {
        Some(qty) => Quantity::new(qty).map_err(|_| {
            field_error(
                INVALID_QTY,
                format!("cartItems[{index}].qty"),
                FieldErrorCode::OutOfRange,
                raw_qty,
            )
        })?,
        None => Quantity::ONE,
    };
    Ok(CheckoutLine {
        product_id,
        quantity,
    })
}

fn parse_checkout(body: CheckoutBody) -> Result<CheckoutRequest, Error> {
    let items = match present(body.cart_items.as_ref()) {
        Some(Value::Array(items)) if !items.is_empty() => items,
        other => {
            return Err(field_error(
                CART_EMPTY,
                "cartItems",
                FieldErrorCode::EmptyList,
                other,
            ));
        }
    };
    let lines = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_line(index, item))
        .collect::<Result<Vec<_>, _>>()?;
    CheckoutRequest::new(lines, body.name, body.email).map_err(|_| {
        field_error(CART_EMPTY, "cartItems", FieldErrorCode::EmptyList, None)
    })
}

/// Price the submitted lines, clear the cart, and return a receipt.
///
/// Unknown products reject the whole checkout and leave the cart intact.
#[utoipa::path(
    post,
    path = "/api/checkout",
    request_body = CheckoutBody,
    responses(
        (status = 200, description = "Receipt", body = CheckoutResponse),
        (status = 400, description = "Cart empty, malformed line, or unknown product", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["checkout"],
    operation_id = "checkout"
)]
#[post("/checkout")]
pub async fn checkout(
    state: web::Data<HttpState>,
    payload: web::Json<CheckoutBody>,
) -> ApiResult<web::Json<CheckoutResponse>> {
    let request = parse_checkout(payload.into_inner())?;
    let receipt = state.checkout.checkout(request).await?;
    Ok(web::Json(CheckoutResponse {
        receipt: ReceiptResponse::from(receipt),
    }))
}

#[cfg(test)]
#[path = "checkout_tests.rs"]
mod tests;
