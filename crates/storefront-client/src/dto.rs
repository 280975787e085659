//! Wire shapes exchanged with the storefront service.
//!
//! Field names follow the service's camelCase JSON. Money arrives as JSON
//! numbers and is held as [`Decimal`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
}

/// One line of the cart joined with its product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Cart line identifier used by update and remove.
    pub cart_id: i32,
    /// Referenced product.
    pub product_id: i32,
    /// Units on the line.
    pub qty: u32,
    /// Product name.
    pub name: String,
    /// Product unit price.
    pub price: Decimal,
}

/// Cart snapshot with its rounded total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartItem>,
    /// Rounded total.
    pub total: Decimal,
}

impl Cart {
    /// Find a line by its cart id.
    #[must_use]
    pub fn line(&self, cart_id: i32) -> Option<&CartItem> {
        self.items.iter().find(|item| item.cart_id == cart_id)
    }
}

/// A purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    /// Purchased product.
    pub product_id: i32,
    /// Product name at checkout.
    pub name: String,
    /// Unit price at checkout.
    pub price: Decimal,
    /// Units purchased.
    pub qty: u32,
    /// Rounded line amount.
    pub amount: Decimal,
}

/// Receipt returned by a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Receipt {
    /// Timestamp-derived order id.
    pub id: i64,
    /// Customer name, if the service kept one.
    pub name: Option<String>,
    /// Customer email, if the service kept one.
    pub email: Option<String>,
    /// Purchased lines.
    pub items: Vec<ReceiptItem>,
    /// Rounded total.
    pub total: Decimal,
    /// RFC 3339 issue time.
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReceiptEnvelope {
    pub(crate) receipt: Receipt,
}

/// Error body sent with every non-success response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
    #[serde(default)]
    pub(crate) code: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddToCartBody {
    pub(crate) product_id: i32,
    pub(crate) qty: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateQuantityBody {
    pub(crate) qty: u32,
}

/// A line submitted for checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    /// Product being purchased.
    pub product_id: i32,
    /// Units purchased.
    pub qty: u32,
}

impl From<&CartItem> for CheckoutItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            qty: item.qty,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutBody<'a> {
    pub(crate) cart_items: &'a [CheckoutItem],
    pub(crate) name: &'a str,
    pub(crate) email: &'a str,
}
