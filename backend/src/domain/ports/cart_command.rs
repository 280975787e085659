//! Driving port for cart mutations.
//!
//! Every command answers with the cart as it stands after the mutation, so
//! adapters never have to issue a follow-up read.

use async_trait::async_trait;

use crate::domain::{CartLineId, CartView, Error, ProductId, Quantity, QuantityUpdate};

/// Request to put units of a product into the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddToCartRequest {
    /// Product to add.
    pub product_id: ProductId,
    /// Units to add on top of any existing line.
    pub quantity: Quantity,
}

/// Domain use-case port for changing cart contents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartCommand: Send + Sync {
    /// Add units of a product; rejects unknown products.
    async fn add_item(&self, request: AddToCartRequest) -> Result<CartView, Error>;

    /// Set or clear a line's quantity. Unknown lines are a no-op.
    async fn update_quantity(
        &self,
        line_id: CartLineId,
        update: QuantityUpdate,
    ) -> Result<CartView, Error>;

    /// Remove a line. Unknown lines are a no-op.
    async fn remove_line(&self, line_id: CartLineId) -> Result<CartView, Error>;
}
