//! Cart services.
//!
//! Reads recompute the view from the store on every call. Mutations delegate
//! to the repository and then re-read, so the returned view always reflects
//! committed state.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{
    AddToCartRequest, CartCommand, CartQuery, CartRepository, CartRepositoryError,
};
use crate::domain::{CartLineId, CartView, Error, QuantityUpdate};

fn map_repository_error(error: CartRepositoryError) -> Error {
    match error {
        CartRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("cart repository unavailable: {message}"))
        }
        CartRepositoryError::Query { message } => {
            Error::internal(format!("cart repository error: {message}"))
        }
        CartRepositoryError::UnknownProduct { product_id } => unknown_product(product_id),
        CartRepositoryError::QuantityOverflow {
            product_id,
            requested,
        } => quantity_overflow(product_id, requested),
    }
}

fn quantity_overflow(product_id: i32, requested: i64) -> Error {
    Error::invalid_request(format!(
        "Quantity for productId {product_id} would exceed the maximum"
    ))
    .with_details(json!({
        "field": "qty",
        "code": "out_of_range",
        "value": requested,
    }))
}

pub(crate) fn unknown_product(product_id: i32) -> Error {
    Error::invalid_request(format!("Unknown productId {product_id}")).with_details(json!({
        "field": "productId",
        "code": "unknown_product",
        "value": product_id,
    }))
}

/// Cart service implementing [`CartQuery`] and [`CartCommand`].
#[derive(Clone)]
pub struct CartService<R> {
    cart_repo: Arc<R>,
}

impl<R> CartService<R> {
    /// Create a new service over the cart repository.
    pub fn new(cart_repo: Arc<R>) -> Self {
        Self { cart_repo }
    }
}

impl<R> CartService<R>
where
    R: CartRepository,
{
    async fn current_view(&self) -> Result<CartView, Error> {
        let items = self
            .cart_repo
            .list_items()
            .await
            .map_err(map_repository_error)?;
        Ok(CartView::new(items))
    }
}

#[async_trait]
impl<R> CartQuery for CartService<R>
where
    R: CartRepository,
{
    async fn view_cart(&self) -> Result<CartView, Error> {
        self.current_view().await
    }
}

#[async_trait]
impl<R> CartCommand for CartService<R>
where
    R: CartRepository,
{
    async fn add_item(&self, request: AddToCartRequest) -> Result<CartView, Error> {
        self.cart_repo
            .add_quantity(request.product_id, request.quantity)
            .await
            .map_err(map_repository_error)?;
        self.current_view().await
    }

    async fn update_quantity(
        &self,
        line_id: CartLineId,
        update: QuantityUpdate,
    ) -> Result<CartView, Error> {
        match update {
            QuantityUpdate::Remove => self.cart_repo.remove_line(line_id).await,
            QuantityUpdate::Set(quantity) => self.cart_repo.set_quantity(line_id, quantity).await,
        }
        .map_err(map_repository_error)?;
        self.current_view().await
    }

    async fn remove_line(&self, line_id: CartLineId) -> Result<CartView, Error> {
        self.cart_repo
            .remove_line(line_id)
            .await
            .map_err(map_repository_error)?;
        self.current_view().await
    }
}

#[cfg(test)]
#[path = "cart_service_tests.rs"]
mod tests;
