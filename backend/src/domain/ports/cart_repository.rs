//! Port abstraction for cart line persistence.
//!
//! Adapters own the one-line-per-product invariant: adding a product that is
//! already in the cart must grow the existing line rather than insert a
//! second one, and the check-then-write must be atomic.

use async_trait::async_trait;

use crate::domain::{CartItem, CartLineId, ProductId, Quantity};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by cart repository adapters.
    pub enum CartRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "cart repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "cart repository query failed: {message}",
        /// The referenced product does not exist; nothing was written.
        UnknownProduct { product_id: i32 } => "product {product_id} does not exist",
        /// The merged line would exceed the largest storable quantity;
        /// nothing was written.
        QuantityOverflow { product_id: i32, requested: i64 } =>
            "cart line for product {product_id} cannot hold {requested} units",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// All lines joined with their products, ordered by line identifier.
    async fn list_items(&self) -> Result<Vec<CartItem>, CartRepositoryError>;

    /// Add `quantity` units of `product_id`, creating the line if needed.
    ///
    /// A merge whose sum exceeds [`Quantity`]'s range is rejected with
    /// [`CartRepositoryError::QuantityOverflow`] and leaves the line as it
    /// was.
    async fn add_quantity(
        &self,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<(), CartRepositoryError>;

    /// Overwrite the quantity of `line_id`. Missing lines are ignored.
    async fn set_quantity(
        &self,
        line_id: CartLineId,
        quantity: Quantity,
    ) -> Result<(), CartRepositoryError>;

    /// Delete `line_id`. Missing lines are ignored.
    async fn remove_line(&self, line_id: CartLineId) -> Result<(), CartRepositoryError>;
}
