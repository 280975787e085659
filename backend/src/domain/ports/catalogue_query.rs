//! Driving port for browsing the catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Product};

/// Domain use-case port for listing products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Every product, ordered by identifier.
    async fn list_products(&self) -> Result<Vec<Product>, Error>;
}
