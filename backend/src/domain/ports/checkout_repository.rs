//! Port abstraction for the checkout transaction.

use async_trait::async_trait;

use crate::domain::{Product, ProductId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by checkout repository adapters.
    pub enum CheckoutRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "checkout repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "checkout repository query failed: {message}",
        /// A submitted product does not exist; the cart was left intact.
        UnknownProduct { product_id: i32 } => "product {product_id} does not exist",
    }
}

/// Port for pricing a checkout and emptying the cart in one unit of work.
///
/// Implementations must:
/// - Load every product in `product_ids`.
/// - Fail with `UnknownProduct` without touching the cart if any is missing.
/// - Otherwise delete every cart line, not only the submitted ones.
/// - Commit the reads and the delete atomically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckoutRepository: Send + Sync {
    /// Resolve the submitted products and clear the cart.
    async fn resolve_and_clear(
        &self,
        product_ids: &[ProductId],
    ) -> Result<Vec<Product>, CheckoutRepositoryError>;
}
