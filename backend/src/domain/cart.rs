//! The shared shopping cart.
//!
//! There is one cart per process. Each line references a catalogue product
//! and carries a positive quantity; at most one line exists per product.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Product, ProductId, extended_price, round_currency};

/// Identifier of a cart line, assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct CartLineId(i32);

/// Raw value cannot name a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cart line id must be a positive 32-bit integer, got {0}")]
pub struct CartLineIdError(pub i64);

impl CartLineId {
    /// Validate a raw line identifier.
    pub fn new(value: i64) -> Result<Self, CartLineIdError> {
        if value <= 0 {
            return Err(CartLineIdError(value));
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| CartLineIdError(value))
    }

    /// Raw identifier as stored.
    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for CartLineId {
    type Error = CartLineIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CartLineId> for i32 {
    fn from(value: CartLineId) -> Self {
        value.0
    }
}

impl fmt::Display for CartLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Strictly positive item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

/// Quantity validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Lines never hold zero or fewer items.
    #[error("quantity must be positive, got {0}")]
    NotPositive(i64),
    /// Larger than any stored count can be.
    #[error("quantity {0} is too large")]
    TooLarge(i64),
}

impl Quantity {
    /// Exactly one item.
    pub const ONE: Self = Self(1);

    /// Validate a raw quantity.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::Quantity;
    ///
    /// assert_eq!(Quantity::new(2).map(Quantity::get), Ok(2));
    /// assert!(Quantity::new(0).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, QuantityError> {
        if value <= 0 {
            return Err(QuantityError::NotPositive(value));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| QuantityError::TooLarge(value))
    }

    /// Numeric count.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Requested change to a line's quantity.
///
/// Zero removes the line; negative values are rejected before reaching the
/// store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// Delete the line.
    Remove,
    /// Replace the line's quantity.
    Set(Quantity),
}

impl QuantityUpdate {
    /// Interpret a raw requested quantity.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::{Quantity, QuantityUpdate};
    ///
    /// assert_eq!(QuantityUpdate::from_requested(0), Ok(QuantityUpdate::Remove));
    /// assert_eq!(
    ///     QuantityUpdate::from_requested(4),
    ///     Ok(QuantityUpdate::Set(Quantity::new(4).expect("positive"))),
    /// );
    /// assert!(QuantityUpdate::from_requested(-1).is_err());
    /// ```
    pub fn from_requested(value: i64) -> Result<Self, QuantityError> {
        if value == 0 {
            Ok(Self::Remove)
        } else {
            Quantity::new(value).map(Self::Set)
        }
    }
}

/// A cart line joined with its product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    line_id: CartLineId,
    quantity: Quantity,
    product: Product,
}

impl CartItem {
    /// Join a stored line with the product it references.
    #[must_use]
    pub fn new(line_id: CartLineId, quantity: Quantity, product: Product) -> Self {
        Self {
            line_id,
            quantity,
            product,
        }
    }

    /// Cart line identifier.
    #[must_use]
    pub fn line_id(&self) -> CartLineId {
        self.line_id
    }

    /// Number of units on the line.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Referenced product identifier.
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }

    /// Product display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.product.name()
    }

    /// Product unit price.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.product.price()
    }

    /// Unrounded line amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        extended_price(self.price(), self.quantity)
    }
}

/// Snapshot of the cart with its rounded total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartView {
    items: Vec<CartItem>,
    total: Decimal,
}

impl CartView {
    /// Build a view, computing `round(Σ price × qty)` over `items`.
    ///
    /// Items keep the order they are given in; adapters list them by line id.
    #[must_use]
    pub fn new(items: Vec<CartItem>) -> Self {
        let total = round_currency(items.iter().map(CartItem::amount).sum());
        Self { items, total }
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Rounded cart total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the view, returning the lines.
    #[must_use]
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn product(id: i64, name: &str, price: Decimal) -> Product {
        Product::new(ProductId::new(id).expect("id"), name, price).expect("product")
    }

    fn item(line: i64, qty: i64, product: Product) -> CartItem {
        CartItem::new(
            CartLineId::new(line).expect("line id"),
            Quantity::new(qty).expect("qty"),
            product,
        )
    }

    #[fixture]
    fn tshirt() -> Product {
        product(1, "Vibe T-shirt", Decimal::new(24_999, 2))
    }

    #[fixture]
    fn mug() -> Product {
        product(3, "Vibe Mug", Decimal::new(14_950, 2))
    }

    #[rstest]
    #[case(-1, QuantityError::NotPositive(-1))]
    #[case(0, QuantityError::NotPositive(0))]
    #[case(i64::from(u32::MAX) + 1, QuantityError::TooLarge(i64::from(u32::MAX) + 1))]
    fn quantity_rejects_out_of_range(#[case] raw: i64, #[case] expected: QuantityError) {
        assert_eq!(Quantity::new(raw), Err(expected));
    }

    #[rstest]
    #[case(0, Ok(QuantityUpdate::Remove))]
    #[case(5, Ok(QuantityUpdate::Set(Quantity(5))))]
    #[case(-2, Err(QuantityError::NotPositive(-2)))]
    fn quantity_update_interprets_requests(
        #[case] raw: i64,
        #[case] expected: Result<QuantityUpdate, QuantityError>,
    ) {
        assert_eq!(QuantityUpdate::from_requested(raw), expected);
    }

    #[rstest]
    fn empty_view_totals_zero() {
        let view = CartView::new(Vec::new());
        assert!(view.is_empty());
        assert_eq!(view.total(), Decimal::ZERO);
    }

    #[rstest]
    fn view_total_sums_line_amounts(tshirt: Product, mug: Product) {
        let view = CartView::new(vec![item(1, 2, tshirt), item(2, 1, mug)]);
        assert_eq!(view.total(), Decimal::new(64_948, 2));
        assert_eq!(view.items().len(), 2);
    }

    #[rstest]
    fn view_total_rounds_once_after_summing() {
        let third = product(9, "Third", Decimal::new(3_335, 3));
        let view = CartView::new(vec![item(1, 1, third.clone()), item(2, 1, third)]);
        // 3.335 + 3.335 = 6.670, never 3.34 + 3.34.
        assert_eq!(view.total(), Decimal::new(667, 2));
    }

    #[rstest]
    fn item_exposes_product_fields(mug: Product) {
        let line = item(4, 3, mug);
        assert_eq!(line.product_id().get(), 3);
        assert_eq!(line.name(), "Vibe Mug");
        assert_eq!(line.amount(), Decimal::new(44_850, 2));
    }

    #[rstest]
    fn cart_line_id_rejects_zero() {
        assert_eq!(CartLineId::new(0), Err(CartLineIdError(0)));
    }
}
