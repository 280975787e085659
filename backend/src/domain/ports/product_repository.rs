//! Port abstraction for reading the product catalogue.
use async_trait::async_trait;

use crate::domain::Product;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "product repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "product repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, ordered by identifier.
    async fn list_products(&self) -> Result<Vec<Product>, ProductRepositoryError>;
}
