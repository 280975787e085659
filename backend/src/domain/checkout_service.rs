//! Checkout service.
//!
//! The repository resolves every submitted product and empties the cart in
//! one transaction; this service only prices the lines and stamps the
//! receipt.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::cart_service::unknown_product;
use crate::domain::ports::{CheckoutCommand, CheckoutRepository, CheckoutRepositoryError};
use crate::domain::{CheckoutRequest, Error, Product, ProductId, Receipt, ReceiptItem};

fn map_repository_error(error: CheckoutRepositoryError) -> Error {
    match error {
        CheckoutRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("checkout repository unavailable: {message}"))
        }
        CheckoutRepositoryError::Query { message } => {
            Error::internal(format!("checkout repository error: {message}"))
        }
        CheckoutRepositoryError::UnknownProduct { product_id } => unknown_product(product_id),
    }
}

/// Checkout service implementing [`CheckoutCommand`].
#[derive(Clone)]
pub struct CheckoutService<R> {
    checkout_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> CheckoutService<R> {
    /// Create a new service; `clock` stamps receipts.
    pub fn new(checkout_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            checkout_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R> CheckoutCommand for CheckoutService<R>
where
    R: CheckoutRepository,
{
    async fn checkout(&self, request: CheckoutRequest) -> Result<Receipt, Error> {
        let products: HashMap<ProductId, Product> = self
            .checkout_repo
            .resolve_and_clear(&request.product_ids())
            .await
            .map_err(map_repository_error)?
            .into_iter()
            .map(|product| (product.id(), product))
            .collect();

        let items = request
            .lines()
            .iter()
            .map(|line| {
                products
                    .get(&line.product_id)
                    .map(|product| ReceiptItem::priced(product, line.quantity))
                    .ok_or_else(|| {
                        Error::internal(format!(
                            "checkout repository omitted product {}",
                            line.product_id
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Receipt::issue(
            self.clock.utc(),
            request.name().map(str::to_owned),
            request.email().map(str::to_owned),
            items,
        ))
    }
}

#[cfg(test)]
#[path = "checkout_service_tests.rs"]
mod tests;
